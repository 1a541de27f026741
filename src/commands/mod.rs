pub mod calculate;
pub mod email;
pub mod init;

use crate::cli::InputArgs;
use crate::config::{self, RoiConfig};
use crate::core::{InputOverrides, RawInputs};
use crate::engine::{self, Evaluation};
use crate::errors::RoiError;
use crate::io;
use crate::io::output::Report;
use anyhow::{Context, Result};

/// Explicit `--config` file, or discovery from the current directory.
pub fn load_config(args: &InputArgs) -> Result<RoiConfig> {
    match &args.config {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Layer inputs: form defaults, config defaults, scenario file, flags.
pub fn resolve_inputs(args: &InputArgs, config: &RoiConfig) -> Result<RawInputs> {
    let scenario = args
        .inputs_file
        .as_deref()
        .map(io::load_scenario)
        .transpose()?
        .unwrap_or_default();
    let defaults = config.input_defaults();
    let flags = args.to_overrides();

    Ok(InputOverrides::layer(
        RawInputs::default(),
        [&defaults, &scenario, &flags],
    ))
}

/// Evaluate, reporting a closed volume gate as [`RoiError::InputsAbsent`].
pub fn require_evaluation(raw: &RawInputs) -> Result<Evaluation, RoiError> {
    engine::evaluate(raw).ok_or(RoiError::InputsAbsent)
}

pub fn build_report(raw: RawInputs, config: &RoiConfig) -> Result<Report, RoiError> {
    let evaluation = require_evaluation(&raw)?;
    log::info!("{}", evaluation.result.summary());
    let warnings = config::validate_inputs(&evaluation.inputs);
    Ok(Report::new(config.brand(), raw, evaluation, warnings))
}
