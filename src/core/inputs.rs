//! Raw calculator inputs as entered by a user.
//!
//! Every numeric field is kept exactly as supplied: a number, a string that
//! may be blank or malformed, or nothing at all. Coercion to numbers happens
//! in [`crate::core::normalize`], never here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user-entered value before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Blank text counts as not entered.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Number(_) => false,
            RawValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// The full set of calculator fields in their raw form.
///
/// `Default` yields the initial form state: volume and cost fields blank,
/// benchmarks pre-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    pub pallets_per_day: Option<RawValue>,
    pub workdays_per_year: Option<RawValue>,
    pub manual_capture_time: Option<RawValue>,
    pub automated_capture_time: Option<RawValue>,
    pub labor_rate: Option<RawValue>,
    pub annual_chargebacks: Option<RawValue>,
    pub avg_chargeback_cost: Option<RawValue>,
    pub chargeback_incidence: Option<RawValue>,
    pub disputes_per_month: Option<RawValue>,
    pub use_incidence_estimator: bool,
    pub hours_per_dispute: Option<RawValue>,
    pub share_contested: Option<RawValue>,
    pub dispute_reduction: Option<RawValue>,
    pub chargeback_reduction: Option<RawValue>,
    pub year1_cost: Option<RawValue>,
    pub ongoing_cost: Option<RawValue>,
}

pub const DEFAULT_MANUAL_CAPTURE_SECONDS: f64 = 300.0;
pub const DEFAULT_AUTOMATED_CAPTURE_SECONDS: f64 = 5.0;
pub const DEFAULT_LABOR_RATE: f64 = 22.0;
pub const DEFAULT_AVG_CHARGEBACK_COST: f64 = 125.0;
pub const DEFAULT_CHARGEBACK_INCIDENCE_PCT: f64 = 6.0;
pub const DEFAULT_HOURS_PER_DISPUTE: f64 = 2.0;
pub const DEFAULT_SHARE_CONTESTED_PCT: f64 = 60.0;
pub const DEFAULT_DISPUTE_REDUCTION_PCT: f64 = 65.0;
pub const DEFAULT_CHARGEBACK_REDUCTION_PCT: f64 = 75.0;

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            pallets_per_day: None,
            workdays_per_year: None,
            manual_capture_time: Some(DEFAULT_MANUAL_CAPTURE_SECONDS.into()),
            automated_capture_time: Some(DEFAULT_AUTOMATED_CAPTURE_SECONDS.into()),
            labor_rate: Some(DEFAULT_LABOR_RATE.into()),
            annual_chargebacks: None,
            avg_chargeback_cost: Some(DEFAULT_AVG_CHARGEBACK_COST.into()),
            chargeback_incidence: Some(DEFAULT_CHARGEBACK_INCIDENCE_PCT.into()),
            disputes_per_month: None,
            use_incidence_estimator: false,
            hours_per_dispute: Some(DEFAULT_HOURS_PER_DISPUTE.into()),
            share_contested: Some(DEFAULT_SHARE_CONTESTED_PCT.into()),
            dispute_reduction: Some(DEFAULT_DISPUTE_REDUCTION_PCT.into()),
            chargeback_reduction: Some(DEFAULT_CHARGEBACK_REDUCTION_PCT.into()),
            year1_cost: None,
            ongoing_cost: None,
        }
    }
}

/// Identifies one numeric calculator field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    PalletsPerDay,
    WorkdaysPerYear,
    ManualCaptureTime,
    AutomatedCaptureTime,
    LaborRate,
    AnnualChargebacks,
    AvgChargebackCost,
    ChargebackIncidence,
    DisputesPerMonth,
    HoursPerDispute,
    ShareContested,
    DisputeReduction,
    ChargebackReduction,
    Year1Cost,
    OngoingCost,
}

impl InputField {
    pub const ALL: [InputField; 15] = [
        InputField::PalletsPerDay,
        InputField::WorkdaysPerYear,
        InputField::ManualCaptureTime,
        InputField::AutomatedCaptureTime,
        InputField::LaborRate,
        InputField::AnnualChargebacks,
        InputField::AvgChargebackCost,
        InputField::ChargebackIncidence,
        InputField::DisputesPerMonth,
        InputField::HoursPerDispute,
        InputField::ShareContested,
        InputField::DisputeReduction,
        InputField::ChargebackReduction,
        InputField::Year1Cost,
        InputField::OngoingCost,
    ];

    /// Human-readable label used by reports.
    pub fn label(self) -> &'static str {
        match self {
            InputField::PalletsPerDay => "Pallets per Day",
            InputField::WorkdaysPerYear => "Workdays per Year",
            InputField::ManualCaptureTime => "Manual Capture Time (sec)",
            InputField::AutomatedCaptureTime => "Automated Capture Time (sec)",
            InputField::LaborRate => "Labor Rate ($/hour)",
            InputField::AnnualChargebacks => "Annual Chargebacks ($)",
            InputField::AvgChargebackCost => "Avg Chargeback Cost ($)",
            InputField::ChargebackIncidence => "Chargeback Incidence (%)",
            InputField::DisputesPerMonth => "Disputes per Month",
            InputField::HoursPerDispute => "Hours per Dispute",
            InputField::ShareContested => "Share Contested (%)",
            InputField::DisputeReduction => "Dispute Reduction (%)",
            InputField::ChargebackReduction => "Chargeback Reduction (%)",
            InputField::Year1Cost => "Year-1 Cost ($)",
            InputField::OngoingCost => "Ongoing Cost ($)",
        }
    }

    /// Placeholder shown when the field was left blank.
    pub fn blank_placeholder(self) -> &'static str {
        match self {
            InputField::AnnualChargebacks => "Using estimator",
            InputField::DisputesPerMonth => "Auto-estimated",
            _ => "Not specified",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl RawInputs {
    pub fn get(&self, field: InputField) -> Option<&RawValue> {
        match field {
            InputField::PalletsPerDay => self.pallets_per_day.as_ref(),
            InputField::WorkdaysPerYear => self.workdays_per_year.as_ref(),
            InputField::ManualCaptureTime => self.manual_capture_time.as_ref(),
            InputField::AutomatedCaptureTime => self.automated_capture_time.as_ref(),
            InputField::LaborRate => self.labor_rate.as_ref(),
            InputField::AnnualChargebacks => self.annual_chargebacks.as_ref(),
            InputField::AvgChargebackCost => self.avg_chargeback_cost.as_ref(),
            InputField::ChargebackIncidence => self.chargeback_incidence.as_ref(),
            InputField::DisputesPerMonth => self.disputes_per_month.as_ref(),
            InputField::HoursPerDispute => self.hours_per_dispute.as_ref(),
            InputField::ShareContested => self.share_contested.as_ref(),
            InputField::DisputeReduction => self.dispute_reduction.as_ref(),
            InputField::ChargebackReduction => self.chargeback_reduction.as_ref(),
            InputField::Year1Cost => self.year1_cost.as_ref(),
            InputField::OngoingCost => self.ongoing_cost.as_ref(),
        }
    }

    pub fn set(&mut self, field: InputField, value: Option<RawValue>) {
        let slot = match field {
            InputField::PalletsPerDay => &mut self.pallets_per_day,
            InputField::WorkdaysPerYear => &mut self.workdays_per_year,
            InputField::ManualCaptureTime => &mut self.manual_capture_time,
            InputField::AutomatedCaptureTime => &mut self.automated_capture_time,
            InputField::LaborRate => &mut self.labor_rate,
            InputField::AnnualChargebacks => &mut self.annual_chargebacks,
            InputField::AvgChargebackCost => &mut self.avg_chargeback_cost,
            InputField::ChargebackIncidence => &mut self.chargeback_incidence,
            InputField::DisputesPerMonth => &mut self.disputes_per_month,
            InputField::HoursPerDispute => &mut self.hours_per_dispute,
            InputField::ShareContested => &mut self.share_contested,
            InputField::DisputeReduction => &mut self.dispute_reduction,
            InputField::ChargebackReduction => &mut self.chargeback_reduction,
            InputField::Year1Cost => &mut self.year1_cost,
            InputField::OngoingCost => &mut self.ongoing_cost,
        };
        *slot = value;
    }

    /// Builder-style setter, mostly for tests and scenario construction.
    pub fn with(mut self, field: InputField, value: impl Into<RawValue>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn is_blank(&self, field: InputField) -> bool {
        self.get(field).is_none_or(RawValue::is_blank)
    }
}

/// A partial set of inputs layered over another.
///
/// Used for config-file defaults, scenario files and command-line flags.
/// Field names accept both `snake_case` and the form's `camelCase`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputOverrides {
    #[serde(default, alias = "palletsPerDay")]
    pub pallets_per_day: Option<RawValue>,
    #[serde(default, alias = "workdaysPerYear")]
    pub workdays_per_year: Option<RawValue>,
    #[serde(default, alias = "manualCaptureTime")]
    pub manual_capture_time: Option<RawValue>,
    #[serde(default, alias = "automatedCaptureTime")]
    pub automated_capture_time: Option<RawValue>,
    #[serde(default, alias = "laborRate")]
    pub labor_rate: Option<RawValue>,
    #[serde(default, alias = "annualChargebacks")]
    pub annual_chargebacks: Option<RawValue>,
    #[serde(default, alias = "avgChargebackCost")]
    pub avg_chargeback_cost: Option<RawValue>,
    #[serde(default, alias = "chargebackIncidence")]
    pub chargeback_incidence: Option<RawValue>,
    #[serde(default, alias = "disputesPerMonth")]
    pub disputes_per_month: Option<RawValue>,
    #[serde(default, alias = "useIncidenceEstimator")]
    pub use_incidence_estimator: Option<bool>,
    #[serde(default, alias = "hoursPerDispute")]
    pub hours_per_dispute: Option<RawValue>,
    #[serde(default, alias = "shareContested")]
    pub share_contested: Option<RawValue>,
    #[serde(default, alias = "disputeReduction")]
    pub dispute_reduction: Option<RawValue>,
    #[serde(default, alias = "chargebackReduction")]
    pub chargeback_reduction: Option<RawValue>,
    #[serde(default, alias = "year1Cost")]
    pub year1_cost: Option<RawValue>,
    #[serde(default, alias = "ongoingCost")]
    pub ongoing_cost: Option<RawValue>,
}

impl InputOverrides {
    fn value(&self, field: InputField) -> Option<&RawValue> {
        match field {
            InputField::PalletsPerDay => self.pallets_per_day.as_ref(),
            InputField::WorkdaysPerYear => self.workdays_per_year.as_ref(),
            InputField::ManualCaptureTime => self.manual_capture_time.as_ref(),
            InputField::AutomatedCaptureTime => self.automated_capture_time.as_ref(),
            InputField::LaborRate => self.labor_rate.as_ref(),
            InputField::AnnualChargebacks => self.annual_chargebacks.as_ref(),
            InputField::AvgChargebackCost => self.avg_chargeback_cost.as_ref(),
            InputField::ChargebackIncidence => self.chargeback_incidence.as_ref(),
            InputField::DisputesPerMonth => self.disputes_per_month.as_ref(),
            InputField::HoursPerDispute => self.hours_per_dispute.as_ref(),
            InputField::ShareContested => self.share_contested.as_ref(),
            InputField::DisputeReduction => self.dispute_reduction.as_ref(),
            InputField::ChargebackReduction => self.chargeback_reduction.as_ref(),
            InputField::Year1Cost => self.year1_cost.as_ref(),
            InputField::OngoingCost => self.ongoing_cost.as_ref(),
        }
    }

    /// Overwrite every field of `inputs` that this layer specifies.
    pub fn apply_to(&self, inputs: &mut RawInputs) {
        InputField::ALL
            .iter()
            .filter_map(|field| self.value(*field).map(|value| (*field, value)))
            .for_each(|(field, value)| inputs.set(field, Some(value.clone())));

        if let Some(flag) = self.use_incidence_estimator {
            inputs.use_incidence_estimator = flag;
        }
    }

    /// Apply layers in order, later layers winning.
    pub fn layer<'a>(base: RawInputs, layers: impl IntoIterator<Item = &'a InputOverrides>) -> RawInputs {
        layers.into_iter().fold(base, |mut inputs, layer| {
            layer.apply_to(&mut inputs);
            inputs
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_leaves_volume_and_costs_blank() {
        let inputs = RawInputs::default();
        assert!(inputs.is_blank(InputField::PalletsPerDay));
        assert!(inputs.is_blank(InputField::WorkdaysPerYear));
        assert!(inputs.is_blank(InputField::AnnualChargebacks));
        assert!(inputs.is_blank(InputField::DisputesPerMonth));
        assert!(inputs.is_blank(InputField::Year1Cost));
        assert!(inputs.is_blank(InputField::OngoingCost));
        assert!(!inputs.use_incidence_estimator);
        assert_eq!(inputs.labor_rate, Some(RawValue::Number(22.0)));
        assert_eq!(inputs.manual_capture_time, Some(RawValue::Number(300.0)));
    }

    #[test]
    fn whitespace_text_is_blank() {
        let inputs = RawInputs::default().with(InputField::PalletsPerDay, "   ");
        assert!(inputs.is_blank(InputField::PalletsPerDay));
    }

    #[test]
    fn later_layers_win() {
        let config_defaults = InputOverrides {
            labor_rate: Some(24.0.into()),
            pallets_per_day: Some(50.0.into()),
            ..Default::default()
        };
        let flags = InputOverrides {
            pallets_per_day: Some("120".into()),
            use_incidence_estimator: Some(true),
            ..Default::default()
        };

        let inputs = InputOverrides::layer(RawInputs::default(), [&config_defaults, &flags]);

        assert_eq!(inputs.labor_rate, Some(RawValue::Number(24.0)));
        assert_eq!(inputs.pallets_per_day, Some(RawValue::Text("120".into())));
        assert!(inputs.use_incidence_estimator);
        assert_eq!(inputs.hours_per_dispute, Some(RawValue::Number(2.0)));
    }

    #[test]
    fn overrides_accept_camel_case_and_mixed_value_kinds() {
        let overrides: InputOverrides = toml::from_str(
            r#"
            palletsPerDay = "100"
            workdays_per_year = 250
            useIncidenceEstimator = true
            year1Cost = ""
            "#,
        )
        .unwrap();

        assert_eq!(overrides.pallets_per_day, Some(RawValue::Text("100".into())));
        assert_eq!(overrides.workdays_per_year, Some(RawValue::Number(250.0)));
        assert_eq!(overrides.use_incidence_estimator, Some(true));
        assert_eq!(overrides.year1_cost, Some(RawValue::Text(String::new())));
    }

    #[test]
    fn overrides_reject_unknown_fields() {
        let parsed = toml::from_str::<InputOverrides>("pallets_per_week = 3");
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_placeholders_follow_field_role() {
        assert_eq!(
            InputField::AnnualChargebacks.blank_placeholder(),
            "Using estimator"
        );
        assert_eq!(
            InputField::DisputesPerMonth.blank_placeholder(),
            "Auto-estimated"
        );
        assert_eq!(InputField::Year1Cost.blank_placeholder(), "Not specified");
    }
}
