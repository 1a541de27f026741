use std::io::Write;

use anyhow::Result;

use super::calculate::render_report;
use super::{build_report, load_config, resolve_inputs};
use crate::cli::InputArgs;
use crate::errors::RoiError;
use crate::formatting::FormattingConfig;
use crate::io::output::{OutputFormat, WriterOptions};
use crate::io::writers::terminal::EMPTY_STATE_MESSAGE;

pub struct EmailConfig {
    pub to: String,
    pub name: Option<String>,
    pub inputs: InputArgs,
}

pub fn email_results(config: EmailConfig) -> Result<()> {
    if config.to.trim().is_empty() {
        anyhow::bail!("An email address is required.");
    }

    let roi_config = load_config(&config.inputs)?;
    let raw = resolve_inputs(&config.inputs, &roi_config)?;

    let report = match build_report(raw, &roi_config) {
        Ok(report) => report,
        Err(RoiError::InputsAbsent) => {
            println!("{EMPTY_STATE_MESSAGE}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let options = WriterOptions {
        formatting: FormattingConfig::plain(),
        email_to: Some(config.to.clone()),
        recipient_name: config
            .name
            .or_else(|| roi_config.recipient_name().map(str::to_string)),
        email_subject: Some(roi_config.email_subject()),
    };

    let rendered = render_report(&report, OutputFormat::Email, &options)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;

    log::info!("Prepared results email for {}", config.to);
    Ok(())
}
