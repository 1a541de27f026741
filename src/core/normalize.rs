//! Permissive coercion of raw inputs into numbers.
//!
//! Every numeric field goes through [`parse_or_zero`]: blank, absent or
//! unparseable values contribute `0` instead of failing. Documented form
//! defaults are not substituted here.

use super::inputs::{InputField, RawInputs, RawValue};
use serde::{Deserialize, Serialize};

/// Calculator inputs after coercion. All values are finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInputs {
    pub pallets_per_day: f64,
    pub workdays_per_year: f64,
    pub manual_capture_time: f64,
    pub automated_capture_time: f64,
    pub labor_rate: f64,
    pub annual_chargebacks: f64,
    pub avg_chargeback_cost: f64,
    pub chargeback_incidence: f64,
    pub disputes_per_month: f64,
    pub use_incidence_estimator: bool,
    pub hours_per_dispute: f64,
    pub share_contested: f64,
    pub dispute_reduction: f64,
    pub chargeback_reduction: f64,
    pub year1_cost: f64,
    pub ongoing_cost: f64,
}

impl NormalizedInputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::PalletsPerDay => self.pallets_per_day,
            InputField::WorkdaysPerYear => self.workdays_per_year,
            InputField::ManualCaptureTime => self.manual_capture_time,
            InputField::AutomatedCaptureTime => self.automated_capture_time,
            InputField::LaborRate => self.labor_rate,
            InputField::AnnualChargebacks => self.annual_chargebacks,
            InputField::AvgChargebackCost => self.avg_chargeback_cost,
            InputField::ChargebackIncidence => self.chargeback_incidence,
            InputField::DisputesPerMonth => self.disputes_per_month,
            InputField::HoursPerDispute => self.hours_per_dispute,
            InputField::ShareContested => self.share_contested,
            InputField::DisputeReduction => self.dispute_reduction,
            InputField::ChargebackReduction => self.chargeback_reduction,
            InputField::Year1Cost => self.year1_cost,
            InputField::OngoingCost => self.ongoing_cost,
        }
    }
}

/// Coerce every field of `raw` with the same parse-with-fallback rule.
pub fn normalize(raw: &RawInputs) -> NormalizedInputs {
    let num = |field: InputField| parse_or_zero(raw.get(field));

    NormalizedInputs {
        pallets_per_day: num(InputField::PalletsPerDay),
        workdays_per_year: num(InputField::WorkdaysPerYear),
        manual_capture_time: num(InputField::ManualCaptureTime),
        automated_capture_time: num(InputField::AutomatedCaptureTime),
        labor_rate: num(InputField::LaborRate),
        annual_chargebacks: num(InputField::AnnualChargebacks),
        avg_chargeback_cost: num(InputField::AvgChargebackCost),
        chargeback_incidence: num(InputField::ChargebackIncidence),
        disputes_per_month: num(InputField::DisputesPerMonth),
        use_incidence_estimator: raw.use_incidence_estimator,
        hours_per_dispute: num(InputField::HoursPerDispute),
        share_contested: num(InputField::ShareContested),
        dispute_reduction: num(InputField::DisputeReduction),
        chargeback_reduction: num(InputField::ChargebackReduction),
        year1_cost: num(InputField::Year1Cost),
        ongoing_cost: num(InputField::OngoingCost),
    }
}

/// Parse a raw value as a decimal number, falling back to `0`.
///
/// Non-finite numbers are treated as unparseable.
pub fn parse_or_zero(value: Option<&RawValue>) -> f64 {
    let parsed = match value {
        None => None,
        Some(RawValue::Number(n)) => Some(*n),
        Some(RawValue::Text(text)) => parse_leading_decimal(text),
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Parse the longest decimal literal at the start of `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so
/// `" 12.5 pallets"` yields `12.5`. Returns `None` when no digits lead.
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.trim_start().as_bytes();
    let mut literal = String::new();
    let mut pos = 0;

    if let Some(sign @ (b'+' | b'-')) = bytes.first() {
        literal.push(*sign as char);
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    push_ascii(&mut literal, &bytes[pos..pos + int_digits]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if frac_digits > 0 {
            if int_digits == 0 {
                literal.push('0');
            }
            literal.push('.');
            push_ascii(&mut literal, &bytes[pos + 1..pos + 1 + frac_digits]);
        }
        pos += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_start = pos + 1;
        let sign = match bytes.get(exp_start) {
            Some(sign @ (b'+' | b'-')) => {
                exp_start += 1;
                Some(*sign as char)
            }
            _ => None,
        };
        let exp_digits = count_digits(bytes.get(exp_start..).unwrap_or_default());
        if exp_digits > 0 {
            literal.push('e');
            literal.extend(sign);
            push_ascii(&mut literal, &bytes[exp_start..exp_start + exp_digits]);
        }
    }

    literal.parse::<f64>().ok()
}

fn push_ascii(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|b| *b as char));
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> Option<RawValue> {
        Some(RawValue::Text(s.to_string()))
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_or_zero(text("100").as_ref()), 100.0);
        assert_eq!(parse_or_zero(text("2.5").as_ref()), 2.5);
        assert_eq!(parse_or_zero(text("-4").as_ref()), -4.0);
        assert_eq!(parse_or_zero(text(".5").as_ref()), 0.5);
        assert_eq!(parse_or_zero(text("5.").as_ref()), 5.0);
        assert_eq!(parse_or_zero(text("1e3").as_ref()), 1000.0);
    }

    #[test]
    fn test_blank_and_absent_become_zero() {
        assert_eq!(parse_or_zero(None), 0.0);
        assert_eq!(parse_or_zero(text("").as_ref()), 0.0);
        assert_eq!(parse_or_zero(text("   ").as_ref()), 0.0);
    }

    #[test]
    fn test_malformed_text_becomes_zero() {
        assert_eq!(parse_or_zero(text("abc").as_ref()), 0.0);
        assert_eq!(parse_or_zero(text("-").as_ref()), 0.0);
        assert_eq!(parse_or_zero(text(".").as_ref()), 0.0);
        assert_eq!(parse_or_zero(text("NaN").as_ref()), 0.0);
        assert_eq!(parse_or_zero(text("Infinity").as_ref()), 0.0);
    }

    #[test]
    fn test_leading_number_wins_over_trailing_text() {
        assert_eq!(parse_or_zero(text("  12.5 pallets").as_ref()), 12.5);
        assert_eq!(parse_or_zero(text("250days").as_ref()), 250.0);
        assert_eq!(parse_or_zero(text("3e").as_ref()), 3.0);
        assert_eq!(parse_or_zero(text("3e+").as_ref()), 3.0);
        assert_eq!(parse_or_zero(text("1,000").as_ref()), 1.0);
    }

    #[test]
    fn test_non_finite_numbers_become_zero() {
        assert_eq!(parse_or_zero(Some(&RawValue::Number(f64::NAN))), 0.0);
        assert_eq!(parse_or_zero(Some(&RawValue::Number(f64::INFINITY))), 0.0);
        assert_eq!(parse_or_zero(text("1e400").as_ref()), 0.0);
    }

    #[test]
    fn test_normalize_uses_zero_not_form_defaults() {
        let raw = RawInputs {
            labor_rate: None,
            manual_capture_time: text("oops"),
            ..RawInputs::default()
        };
        let normalized = normalize(&raw);

        assert_eq!(normalized.labor_rate, 0.0);
        assert_eq!(normalized.manual_capture_time, 0.0);
        assert_eq!(normalized.automated_capture_time, 5.0);
        assert_eq!(normalized.pallets_per_day, 0.0);
        assert_eq!(normalized.year1_cost, 0.0);
    }

    proptest! {
        #[test]
        fn prop_normalized_values_are_always_finite(s in "\\PC{0,24}") {
            let n = parse_or_zero(text(&s).as_ref());
            prop_assert!(n.is_finite());
        }

        #[test]
        fn prop_formatted_numbers_round_trip(n in -1.0e9f64..1.0e9) {
            let rendered = n.to_string();
            prop_assert_eq!(parse_or_zero(text(&rendered).as_ref()), n);
        }
    }
}
