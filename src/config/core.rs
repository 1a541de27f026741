use serde::{Deserialize, Serialize};

use crate::core::InputOverrides;
use crate::errors::RoiError;
use crate::io::output::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".pallet-roi.toml";
pub const DEFAULT_BRAND: &str = "vMeasure";

/// Root configuration structure, read from `.pallet-roi.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    /// Replacement benchmark values layered over the built-in form defaults
    #[serde(default)]
    pub defaults: Option<InputOverrides>,

    /// Report output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Email body configuration
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// terminal, json, csv, markdown or email
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
    /// Product name used in report titles
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    pub recipient_name: Option<String>,
    pub subject: Option<String>,
}

impl RoiConfig {
    pub fn input_defaults(&self) -> InputOverrides {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn brand(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.brand.as_deref())
            .unwrap_or(DEFAULT_BRAND)
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    /// The configured default report format, if any.
    pub fn default_format(&self) -> Result<Option<OutputFormat>, RoiError> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .map(|name| {
                OutputFormat::parse(name).ok_or_else(|| {
                    RoiError::config(
                        Some("output.default_format"),
                        format!("unknown format `{name}`"),
                    )
                })
            })
            .transpose()
    }

    pub fn email_subject(&self) -> String {
        self.email
            .as_ref()
            .and_then(|e| e.subject.clone())
            .unwrap_or_else(|| format!("Your {} ROI Calculator Results", self.brand()))
    }

    pub fn recipient_name(&self) -> Option<&str> {
        self.email.as_ref().and_then(|e| e.recipient_name.as_deref())
    }
}
