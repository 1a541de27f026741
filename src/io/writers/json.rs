use crate::config::InputWarning;
use crate::core::{NormalizedInputs, RoiResult};
use crate::io::output::{OutputWriter, Report};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    tool: &'static str,
    version: &'static str,
    brand: &'a str,
    generated_at: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: Metadata<'a>,
    inputs: &'a NormalizedInputs,
    results: &'a RoiResult,
    narrative: &'a [String],
    warnings: &'a [InputWarning],
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a Report) -> Self {
        Self {
            metadata: Metadata {
                tool: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
                brand: &report.brand,
                generated_at: report.generated_at.to_rfc3339(),
            },
            inputs: report.inputs(),
            results: report.result(),
            narrative: report.narrative().statements(),
            warnings: &report.warnings,
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport::from_report(report))?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
