use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::{InputOverrides, RawValue};
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pallet-roi")]
#[command(about = "ROI calculator for automated pallet dimensioning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info, -vv: debug, -vvv: trace. RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate ROI and write a report
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Print an email with the results and a mailto link
    Email {
        /// Recipient address
        #[arg(long)]
        to: String,

        /// Recipient name used in the greeting
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Calculator inputs accepted on the command line.
///
/// Values are taken as text so that they go through the same permissive
/// parsing as form entries (`"1,200"` reads as `1`).
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Scenario file with saved inputs (TOML, or JSON by extension)
    #[arg(short, long = "inputs")]
    pub inputs_file: Option<PathBuf>,

    /// Configuration file (skips discovery of .pallet-roi.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pallets dimensioned per day
    #[arg(short = 'p', long)]
    pub pallets_per_day: Option<String>,

    /// Working days per year
    #[arg(short = 'w', long)]
    pub workdays_per_year: Option<String>,

    /// Seconds to capture one pallet by hand
    #[arg(long)]
    pub manual_capture_time: Option<String>,

    /// Seconds to capture one pallet with automation
    #[arg(long)]
    pub automated_capture_time: Option<String>,

    /// Labor cost per hour
    #[arg(long)]
    pub labor_rate: Option<String>,

    /// Known annual chargeback cost (replaces the estimate when > 0)
    #[arg(long)]
    pub annual_chargebacks: Option<String>,

    /// Average cost per chargeback
    #[arg(long)]
    pub avg_chargeback_cost: Option<String>,

    /// Percent of pallets charged back
    #[arg(long)]
    pub chargeback_incidence: Option<String>,

    /// Known disputes per month (replaces the estimate when > 0)
    #[arg(long)]
    pub disputes_per_month: Option<String>,

    /// Estimate disputes from chargeback incidence instead of 1% of pallet
    /// volume (`--use-incidence-estimator=false` turns it off again)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub use_incidence_estimator: Option<bool>,

    /// Hours spent per dispute
    #[arg(long)]
    pub hours_per_dispute: Option<String>,

    /// Percent of chargebacks that are disputed
    #[arg(long)]
    pub share_contested: Option<String>,

    /// Percent less time per dispute with automation
    #[arg(long)]
    pub dispute_reduction: Option<String>,

    /// Percent fewer chargebacks with automation
    #[arg(long)]
    pub chargeback_reduction: Option<String>,

    /// First-year cost
    #[arg(long = "year1-cost")]
    pub year1_cost: Option<String>,

    /// Annual cost from year two
    #[arg(long)]
    pub ongoing_cost: Option<String>,
}

impl InputArgs {
    /// The flags that were given, as the top override layer.
    pub fn to_overrides(&self) -> InputOverrides {
        let raw = |value: &Option<String>| value.clone().map(RawValue::Text);

        InputOverrides {
            pallets_per_day: raw(&self.pallets_per_day),
            workdays_per_year: raw(&self.workdays_per_year),
            manual_capture_time: raw(&self.manual_capture_time),
            automated_capture_time: raw(&self.automated_capture_time),
            labor_rate: raw(&self.labor_rate),
            annual_chargebacks: raw(&self.annual_chargebacks),
            avg_chargeback_cost: raw(&self.avg_chargeback_cost),
            chargeback_incidence: raw(&self.chargeback_incidence),
            disputes_per_month: raw(&self.disputes_per_month),
            use_incidence_estimator: self.use_incidence_estimator,
            hours_per_dispute: raw(&self.hours_per_dispute),
            share_contested: raw(&self.share_contested),
            dispute_reduction: raw(&self.dispute_reduction),
            chargeback_reduction: raw(&self.chargeback_reduction),
            year1_cost: raw(&self.year1_cost),
            ongoing_cost: raw(&self.ongoing_cost),
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
