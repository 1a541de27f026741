use crate::formatting::{format_currency, PAYBACK_EXPORT_PLACEHOLDER};
use crate::io::output::{OutputWriter, Report};
use std::io::Write;

/// Plain-text message body for sharing results by email.
pub fn email_body(report: &Report, recipient_name: Option<&str>) -> String {
    let result = report.result();
    let payback = result
        .payback_months
        .map(|months| format!("{months:.1} months"))
        .unwrap_or_else(|| PAYBACK_EXPORT_PLACEHOLDER.to_string());
    let analysis = if report.narrative().is_empty() {
        PAYBACK_EXPORT_PLACEHOLDER.to_string()
    } else {
        report.narrative().joined()
    };

    format!(
        "Hi {name},\n\
         \n\
         Here are your ROI calculation results:\n\
         \n\
         Total Annual Savings: {total}\n\
         Year-1 Net Savings: {year1_net}\n\
         Payback Period: {payback}\n\
         \n\
         Analysis:\n\
         {analysis}\n\
         \n\
         Thank you for using the {brand} ROI Calculator!",
        name = recipient_name.unwrap_or(""),
        total = format_currency(result.total_annual_savings),
        year1_net = format_currency(result.year1_net),
        brand = report.brand,
    )
}

pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(address),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub struct EmailWriter<W: Write> {
    writer: W,
    to: Option<String>,
    name: Option<String>,
    subject: Option<String>,
}

impl<W: Write> EmailWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            to: None,
            name: None,
            subject: None,
        }
    }

    pub fn recipient(mut self, to: Option<String>, name: Option<String>) -> Self {
        self.to = to;
        self.name = name;
        self
    }

    pub fn subject(mut self, subject: String) -> Self {
        self.subject = Some(subject);
        self
    }

    fn subject_for(&self, report: &Report) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| format!("Your {}", report.title()))
    }
}

impl<W: Write> OutputWriter for EmailWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let subject = self.subject_for(report);
        let body = email_body(report, self.name.as_deref());

        if let Some(to) = &self.to {
            writeln!(self.writer, "To: {to}")?;
        }
        writeln!(self.writer, "Subject: {subject}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{body}")?;

        if let Some(to) = &self.to {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", mailto_link(to, &subject, &body))?;
        }
        Ok(())
    }
}
