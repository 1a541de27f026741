use crate::formatting::{
    format_currency, format_hours, format_payback, formatter_for, FormattingConfig,
    OutputFormatter, PAYBACK_PLACEHOLDER,
};
use crate::io::output::{OutputWriter, Report};
use std::io::Write;

pub const LIMITED_ROI_HINT: &str = "Results show limited ROI. Consider adjusting chargeback reduction percentage or reviewing Year-1 costs.";
pub const EMPTY_STATE_MESSAGE: &str = "Enter pallets/day and workdays/year to see results";

const RULE: &str = "───────────────────────────────────────────";
const LABEL_WIDTH: usize = 30;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
        }
    }

    fn line(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "  {label:<LABEL_WIDTH$} {value:>12}")?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.bold(title))?;
        writeln!(self.writer, "{RULE}")?;
        Ok(())
    }

    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(&report.title()))?;
        writeln!(self.writer, "{}", self.formatter.dim(&report.timestamp()))?;
        writeln!(self.writer)?;

        let result = report.result();
        self.line("Annual hours saved", &format_hours(result.annual_hours_saved))?;
        self.line("FTE equivalent saved", &format_hours(result.fte_saved))?;
        let payback = format_payback(result.payback_months, PAYBACK_PLACEHOLDER);
        self.line("Payback (months)", &payback)?;
        Ok(())
    }

    fn write_savings(&mut self, report: &Report) -> anyhow::Result<()> {
        let result = report.result();
        self.section("Savings Breakdown")?;
        self.line("Annual labor savings", &format_currency(result.labor_savings))?;
        self.line("Chargeback savings", &format_currency(result.chargeback_savings))?;
        self.line("Dispute savings", &format_currency(result.dispute_savings))?;
        let total = self
            .formatter
            .positive(&format_currency(result.total_annual_savings));
        self.line("Total annual savings (gross)", &total)?;
        Ok(())
    }

    fn write_financials(&mut self, report: &Report) -> anyhow::Result<()> {
        let result = report.result();
        let limited = result.is_limited_roi();
        let net = |formatter: &dyn OutputFormatter, value: f64| {
            if limited {
                formatter.dim(&format_currency(value))
            } else {
                formatter.positive(&format_currency(value))
            }
        };
        let year1_net = net(self.formatter.as_ref(), result.year1_net);
        let ongoing_net = net(self.formatter.as_ref(), result.ongoing_net);
        let year1_cost = self.formatter.negative(&format_currency(result.year1_cost));

        self.section("Financial Summary")?;
        self.line("Year-1 cost", &year1_cost)?;
        self.line("Year-1 net savings", &year1_net)?;
        self.line("Ongoing annual net savings", &ongoing_net)?;
        if let Some(months) = result.payback_months {
            let payback = self.formatter.info(&format!("{months:.1}"));
            self.line("Payback (months)", &payback)?;
        }
        Ok(())
    }

    fn write_analysis(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.narrative().is_empty() {
            return Ok(());
        }
        self.section("Analysis")?;
        for statement in report.narrative().statements() {
            writeln!(self.writer, "  {}", self.formatter.info(statement))?;
        }
        Ok(())
    }

    fn write_warnings(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.warnings.is_empty() {
            return Ok(());
        }
        self.section("Input Warnings")?;
        for warning in &report.warnings {
            let text = format!("⚠ {warning}");
            writeln!(self.writer, "  {}", self.formatter.warning(&text))?;
        }
        Ok(())
    }

    fn write_hint(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.result().is_limited_roi() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatter.warning(LIMITED_ROI_HINT))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_savings(report)?;
        self.write_financials(report)?;
        self.write_analysis(report)?;
        self.write_warnings(report)?;
        self.write_hint(report)?;
        Ok(())
    }
}
