use crate::core::InputField;
use crate::formatting::{format_hours, format_payback, format_whole, PAYBACK_EXPORT_PLACEHOLDER};
use crate::io::output::{OutputWriter, Report};
use std::io::Write;

/// Every cell is quoted so commas and newlines inside values stay intact.
pub fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn results_rows(report: &Report) -> Vec<Vec<String>> {
    let result = report.result();
    [
        ("Annual Hours Saved", format_hours(result.annual_hours_saved)),
        ("FTE Equivalent Saved", format_hours(result.fte_saved)),
        ("Annual Labor Savings", format_whole(result.labor_savings)),
        ("Chargeback Savings", format_whole(result.chargeback_savings)),
        ("Dispute Savings", format_whole(result.dispute_savings)),
        ("Total Annual Savings", format_whole(result.total_annual_savings)),
        ("Year-1 Cost", format_whole(result.year1_cost)),
        ("Year-1 Net Savings", format_whole(result.year1_net)),
        ("Ongoing Net Savings", format_whole(result.ongoing_net)),
        (
            "Payback (Months)",
            format_payback(result.payback_months, PAYBACK_EXPORT_PLACEHOLDER),
        ),
    ]
    .into_iter()
    .map(|(metric, value)| vec![metric.to_string(), value])
    .collect()
}

fn input_rows(report: &Report) -> Vec<Vec<String>> {
    InputField::ALL
        .iter()
        .map(|field| {
            let value = report
                .raw_inputs
                .get(*field)
                .filter(|value| !value.is_blank())
                .map(ToString::to_string)
                .unwrap_or_else(|| field.blank_placeholder().to_string());
            vec![field.label().to_string(), value]
        })
        .collect()
}

fn analysis_text(report: &Report) -> String {
    if report.narrative().is_empty() {
        "No analysis available".to_string()
    } else {
        report.narrative().joined()
    }
}

/// Row layout of the exported spreadsheet.
pub fn report_rows(report: &Report) -> Vec<Vec<String>> {
    let single = |text: &str| vec![text.to_string()];
    let header = || vec!["Metric".to_string(), "Value".to_string()];

    let mut rows = vec![
        single(&report.title()),
        single(&format!("Generated: {}", report.timestamp())),
        single(""),
        single("Results Summary"),
        header(),
    ];
    rows.extend(results_rows(report));
    rows.extend([
        single(""),
        single("Analysis"),
        vec![analysis_text(report)],
        single(""),
        single("Input Parameters"),
        vec!["Parameter".to_string(), "Value".to_string()],
    ]);
    rows.extend(input_rows(report));
    rows
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let lines: Vec<String> = report_rows(report)
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| escape_cell(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        write!(self.writer, "{}", lines.join("\n"))?;
        writeln!(self.writer)?;
        Ok(())
    }
}
