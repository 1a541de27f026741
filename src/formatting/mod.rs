use colored::*;
use std::env;
use std::io::IsTerminal;

/// Shown on screen where a payback period does not exist.
pub const PAYBACK_PLACEHOLDER: &str = "—";
/// Shown in exported documents where a payback period does not exist.
pub const PAYBACK_EXPORT_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// No colors at all.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn positive(&self, text: &str) -> String;
    fn negative(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn styled(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn positive(&self, text: &str) -> String {
        self.styled(text, |t| t.green())
    }

    fn negative(&self, text: &str) -> String {
        self.styled(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.styled(text, |t| t.yellow())
    }

    fn info(&self, text: &str) -> String {
        self.styled(text, |t| t.cyan())
    }

    fn header(&self, text: &str) -> String {
        self.styled(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.styled(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn positive(&self, text: &str) -> String {
        text.to_string()
    }

    fn negative(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn info(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.should_use_color() {
        Box::new(ColoredFormatter::new(config))
    } else {
        Box::new(PlainFormatter)
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Whole dollars with comma grouping: `192844.44` -> `$192,844`,
/// `-1234.5` -> `-$1,235`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Rounded whole number without currency sign, for machine-friendly cells.
pub fn format_whole(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}

/// One decimal place; a zero-month payback is still a real payback.
pub fn format_payback(payback_months: Option<f64>, placeholder: &str) -> String {
    payback_months
        .map(|months| format!("{months:.1}"))
        .unwrap_or_else(|| placeholder.to_string())
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut out, (i, c)| {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
            out
        })
}
