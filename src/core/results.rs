use serde::{Deserialize, Serialize};

/// Financial outcome of one calculation.
///
/// Every field is derived from the inputs; nothing is rounded. A
/// `payback_months` of `None` means payback is undefined because there are
/// no annual savings, which is distinct from a payback of zero months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub annual_hours_saved: f64,
    pub labor_savings: f64,
    pub chargeback_savings: f64,
    pub dispute_savings: f64,
    pub total_annual_savings: f64,
    pub year1_cost: f64,
    pub ongoing_cost: f64,
    pub payback_months: Option<f64>,
    pub year1_net: f64,
    pub ongoing_net: f64,
    pub fte_saved: f64,
    pub baseline_chargebacks: f64,
    pub disputes_per_month_used: f64,
}

impl RoiResult {
    /// No positive gross savings: reports grey out net figures and show a hint.
    pub fn is_limited_roi(&self) -> bool {
        self.total_annual_savings <= 0.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Savings: {:.0}/yr (labor {:.0}, chargebacks {:.0}, disputes {:.0}) | Payback: {} | FTE: {:.2}",
            self.total_annual_savings,
            self.labor_savings,
            self.chargeback_savings,
            self.dispute_savings,
            self.payback_months
                .map(|m| format!("{m:.1} months"))
                .unwrap_or_else(|| "undefined".to_string()),
            self.fte_saved
        )
    }
}
