//! Advisory checks for inputs and configuration.
//!
//! Input warnings never change a value or block a calculation. They are
//! reported alongside the result so a reader knows which numbers sit outside
//! the ranges the form offers.

use std::fmt;

use serde::Serialize;

use super::core::RoiConfig;
use crate::core::{InputField, NormalizedInputs};
use crate::io::output::OutputFormat;

/// Documented slider range for a percent field.
pub fn percent_range(field: InputField) -> Option<(f64, f64)> {
    match field {
        InputField::ChargebackIncidence => Some((0.0, 20.0)),
        InputField::ShareContested => Some((0.0, 100.0)),
        InputField::DisputeReduction => Some((50.0, 80.0)),
        InputField::ChargebackReduction => Some((60.0, 90.0)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputWarning {
    pub field: InputField,
    pub value: f64,
    pub message: String,
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

fn check_field(field: InputField, value: f64) -> Option<InputWarning> {
    let message = if value < 0.0 {
        Some("negative value".to_string())
    } else {
        percent_range(field)
            .filter(|(min, max)| value < *min || value > *max)
            .map(|(min, max)| format!("{value} is outside the usual {min}-{max}% range"))
    };

    message.map(|message| InputWarning {
        field,
        value,
        message,
    })
}

pub fn validate_inputs(inputs: &NormalizedInputs) -> Vec<InputWarning> {
    let warnings: Vec<_> = InputField::ALL
        .iter()
        .filter_map(|field| check_field(*field, inputs.get(*field)))
        .collect();

    for warning in &warnings {
        log::warn!("{warning}");
    }

    warnings
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigProblem {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Structural problems that make a config file unusable.
pub fn validate_config(config: &RoiConfig) -> Vec<ConfigProblem> {
    let mut problems = Vec::new();

    if let Some(output) = &config.output {
        if let Some(name) = &output.default_format {
            if OutputFormat::parse(name).is_none() {
                problems.push(ConfigProblem {
                    field: "output.default_format",
                    message: format!("unknown format `{name}`"),
                });
            }
        }
        if output.brand.as_deref().is_some_and(|b| b.trim().is_empty()) {
            problems.push(ConfigProblem {
                field: "output.brand",
                message: "brand must not be empty".to_string(),
            });
        }
    }

    problems
}
