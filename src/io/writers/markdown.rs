use crate::core::InputField;
use crate::formatting::{format_currency, format_hours, format_payback, PAYBACK_EXPORT_PLACEHOLDER};
use crate::io::output::{OutputWriter, Report};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_analysis(report)?;
        self.write_warnings(report)?;
        self.write_inputs(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", report.timestamp())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &Report) -> anyhow::Result<()> {
        let result = report.result();

        writeln!(self.writer, "## Results Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;

        let payback = format_payback(result.payback_months, PAYBACK_EXPORT_PLACEHOLDER);
        let rows = [
            ("Annual Hours Saved", format_hours(result.annual_hours_saved)),
            ("FTE Equivalent Saved", format_hours(result.fte_saved)),
            ("Annual Labor Savings", format_currency(result.labor_savings)),
            ("Chargeback Savings", format_currency(result.chargeback_savings)),
            ("Dispute Savings", format_currency(result.dispute_savings)),
            ("Total Annual Savings", format_currency(result.total_annual_savings)),
            ("Year-1 Cost", format_currency(result.year1_cost)),
            ("Year-1 Net Savings", format_currency(result.year1_net)),
            ("Ongoing Net Savings", format_currency(result.ongoing_net)),
            ("Payback (Months)", payback),
        ];
        for (metric, value) in rows {
            self.write_row(metric, &value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_analysis(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Analysis")?;
        writeln!(self.writer)?;
        for statement in report.narrative().statements() {
            writeln!(self.writer, "- {statement}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_warnings(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.warnings.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Input Warnings")?;
        writeln!(self.writer)?;
        for warning in &report.warnings {
            writeln!(self.writer, "- ⚠️ {warning}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Input Parameters")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;

        for field in InputField::ALL {
            let value = report
                .raw_inputs
                .get(field)
                .filter(|value| !value.is_blank())
                .map(ToString::to_string)
                .unwrap_or_else(|| field.blank_placeholder().to_string());
            self.write_row(field.label(), &value)?;
        }
        writeln!(
            self.writer,
            "\nDispute estimator: {}",
            if report.raw_inputs.use_incidence_estimator {
                "chargeback incidence"
            } else {
                "share of pallet volume"
            }
        )?;
        Ok(())
    }

    fn write_row(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {} | {} |", label, value.replace('|', "\\|"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::test_support::{report_for, scenario_a_inputs, scenario_a_report};
    use indoc::indoc;

    fn render(report: &Report) -> String {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_summary_table() {
        let markdown = render(&scenario_a_report());
        let expected = indoc! {"
            | Metric | Value |
            |--------|-------|
            | Annual Hours Saved | 2048.61 |
            | FTE Equivalent Saved | 0.98 |
            | Annual Labor Savings | $45,069 |
            | Chargeback Savings | $140,625 |
            | Dispute Savings | $7,150 |
            | Total Annual Savings | $192,844 |
            | Year-1 Cost | $20,000 |
            | Year-1 Net Savings | $172,844 |
            | Ongoing Net Savings | $187,844 |
            | Payback (Months) | 1.2 |
        "};
        assert!(markdown.starts_with("# vMeasure ROI Calculator Results\n"));
        assert!(markdown.contains(expected));
    }

    #[test]
    fn test_analysis_list_in_order() {
        let report = scenario_a_report();
        let markdown = render(&report);
        let bullets: Vec<&str> = markdown
            .lines()
            .skip_while(|line| *line != "## Analysis")
            .filter_map(|line| line.strip_prefix("- "))
            .take(4)
            .collect();
        let expected: Vec<&str> = report
            .narrative()
            .statements()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(bullets, expected);
    }

    #[test]
    fn test_warnings_section_only_when_needed() {
        assert!(!render(&scenario_a_report()).contains("## Input Warnings"));

        let raw = scenario_a_inputs().with(InputField::ShareContested, "120");
        let markdown = render(&report_for(raw));
        assert!(markdown.contains("## Input Warnings"));
        assert!(markdown.contains("- ⚠️ Share Contested (%)"));
    }

    #[test]
    fn test_input_table_uses_placeholders() {
        let markdown = render(&scenario_a_report());
        assert!(markdown.contains("| Disputes per Month | Auto-estimated |"));
        assert!(markdown.contains("Dispute estimator: share of pallet volume"));
    }

    #[test]
    fn test_pipe_in_raw_input_is_escaped() {
        let raw = scenario_a_inputs().with(InputField::LaborRate, "12|3");
        let markdown = render(&report_for(raw));
        assert!(markdown.contains("| Labor Rate ($/hour) | 12\\|3 |"));
    }
}
