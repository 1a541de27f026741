use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::InputWarning;
use crate::core::{NormalizedInputs, RawInputs, RoiResult};
use crate::engine::Evaluation;
use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, EmailWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::narrative::Narrative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
    Csv,
    Markdown,
    Email,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "markdown" | "md" => Some(Self::Markdown),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "markdown",
            Self::Email => "email",
        }
    }
}

/// Everything a writer needs to render one calculation.
#[derive(Debug, Clone)]
pub struct Report {
    pub brand: String,
    pub generated_at: DateTime<Utc>,
    /// Inputs as entered, for echoing blank fields back as placeholders.
    pub raw_inputs: RawInputs,
    pub evaluation: Evaluation,
    pub warnings: Vec<InputWarning>,
}

impl Report {
    pub fn new(
        brand: impl Into<String>,
        raw_inputs: RawInputs,
        evaluation: Evaluation,
        warnings: Vec<InputWarning>,
    ) -> Self {
        Self {
            brand: brand.into(),
            generated_at: Utc::now(),
            raw_inputs,
            evaluation,
            warnings,
        }
    }

    pub fn at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn inputs(&self) -> &NormalizedInputs {
        &self.evaluation.inputs
    }

    pub fn result(&self) -> &RoiResult {
        &self.evaluation.result
    }

    pub fn narrative(&self) -> &Narrative {
        &self.evaluation.narrative
    }

    pub fn title(&self) -> String {
        format!("{} ROI Calculator Results", self.brand)
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

/// Per-invocation settings that only some writers use.
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    pub formatting: FormattingConfig,
    pub email_to: Option<String>,
    pub recipient_name: Option<String>,
    pub email_subject: Option<String>,
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: &WriterOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options.formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Email => {
            let mut email = EmailWriter::new(writer)
                .recipient(options.email_to.clone(), options.recipient_name.clone());
            if let Some(subject) = &options.email_subject {
                email = email.subject(subject.clone());
            }
            Box::new(email)
        }
    }
}
