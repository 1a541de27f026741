use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{build_report, load_config, resolve_inputs};
use crate::cli::{resolve_formatting, InputArgs};
use crate::errors::RoiError;
use crate::io;
use crate::io::output::{create_writer, OutputFormat, Report, WriterOptions};
use crate::io::writers::terminal::EMPTY_STATE_MESSAGE;

pub struct CalculateConfig {
    pub inputs: InputArgs,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

/// Render a report into memory so it can go to stdout or a file unchanged.
pub fn render_report(
    report: &Report,
    format: OutputFormat,
    options: &WriterOptions,
) -> Result<Vec<u8>, RoiError> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), options);
        writer
            .write_report(report)
            .map_err(|e| RoiError::export(format.name(), e.to_string()))?;
    }
    Ok(buffer)
}

pub fn calculate(config: CalculateConfig) -> Result<()> {
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

    let format = match config.format {
        Some(format) => format,
        None => roi_config.default_format()?.unwrap_or(OutputFormat::Terminal),
    };
    let options = WriterOptions {
        formatting: resolve_formatting(config.plain, config.output.is_some(), &roi_config),
        recipient_name: roi_config.recipient_name().map(str::to_string),
        email_subject: Some(roi_config.email_subject()),
        ..Default::default()
    };

    let rendered = render_report(&report, format, &options)?;

    match &config.output {
        Some(path) => {
            let content = String::from_utf8_lossy(&rendered);
            io::write_file(path, &content)
                .with_context(|| format!("Failed to write {} report", format.name()))?;
            log::info!("Wrote {} report to {}", format.name(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
