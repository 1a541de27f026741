use anyhow::Result;
use pallet_roi::cli::{self, Commands};
use pallet_roi::commands::{calculate, email, init};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Calculate {
            inputs,
            format,
            output,
            plain,
        } => calculate::calculate(calculate::CalculateConfig {
            inputs,
            format,
            output,
            plain,
        }),
        Commands::Email { to, name, inputs } => {
            email::email_results(email::EmailConfig { to, name, inputs })
        }
        Commands::Init { force } => init::init_config(force),
    }
}
