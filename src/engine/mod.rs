//! The ROI model.
//!
//! [`compute`] turns normalized inputs into an [`RoiResult`] in a fixed
//! sequence of steps: volume, time savings, chargeback baseline, dispute
//! workload, labor, totals, payback and net figures. It is pure, never
//! fails and never rounds.
//!
//! [`evaluate`] is the entry point for callers holding raw form state: it
//! applies the volume gate, normalizes, computes and classifies.

pub mod chargeback;
pub mod disputes;


use crate::core::{normalize, InputField, NormalizedInputs, RawInputs, RoiResult};
use crate::narrative::Narrative;
use serde::Serialize;

pub use chargeback::ChargebackBaseline;
pub use disputes::DisputeEstimate;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Standard annual work hours of one full-time employee.
pub const FTE_HOURS_PER_YEAR: f64 = 2080.0;

pub fn pallets_per_year(inputs: &NormalizedInputs) -> f64 {
    inputs.pallets_per_day * inputs.workdays_per_year
}

/// Capture time saved per pallet, in hours. Never negative.
pub fn hours_saved_per_pallet(inputs: &NormalizedInputs) -> f64 {
    ((inputs.manual_capture_time - inputs.automated_capture_time) / SECONDS_PER_HOUR).max(0.0)
}

/// `None` when there are no positive annual savings to pay the cost back.
pub fn payback_months(year1_cost: f64, total_annual_savings: f64) -> Option<f64> {
    if total_annual_savings > 0.0 {
        Some(year1_cost / (total_annual_savings / MONTHS_PER_YEAR))
    } else {
        None
    }
}

pub fn compute(inputs: &NormalizedInputs) -> RoiResult {
    let pallets_year = pallets_per_year(inputs);
    let annual_hours_saved = pallets_year * hours_saved_per_pallet(inputs);

    let baseline = ChargebackBaseline::select(inputs, pallets_year);
    let baseline_chargebacks = baseline.evaluate();
    let chargeback_savings =
        chargeback::chargeback_savings(baseline_chargebacks, inputs.chargeback_reduction);

    let dispute_estimate = DisputeEstimate::select(inputs, pallets_year);
    let disputes_per_month_used = dispute_estimate.per_month();
    let dispute_hours_year =
        disputes::dispute_hours_per_year(disputes_per_month_used, inputs.hours_per_dispute);
    let dispute_savings = disputes::dispute_savings(
        dispute_hours_year,
        inputs.labor_rate,
        inputs.dispute_reduction,
    );

    let labor_savings = annual_hours_saved * inputs.labor_rate;
    let fte_saved = annual_hours_saved / FTE_HOURS_PER_YEAR;

    let total_annual_savings = labor_savings + chargeback_savings + dispute_savings;

    log::debug!(
        "chargeback baseline {} ({:.2}), disputes {} ({:.3}/month)",
        if baseline.is_reported() { "reported" } else { "estimated" },
        baseline_chargebacks,
        dispute_estimate.name(),
        disputes_per_month_used
    );

    RoiResult {
        annual_hours_saved,
        labor_savings,
        chargeback_savings,
        dispute_savings,
        total_annual_savings,
        year1_cost: inputs.year1_cost,
        ongoing_cost: inputs.ongoing_cost,
        payback_months: payback_months(inputs.year1_cost, total_annual_savings),
        year1_net: total_annual_savings - inputs.year1_cost,
        ongoing_net: total_annual_savings - inputs.ongoing_cost,
        fte_saved,
        baseline_chargebacks,
        disputes_per_month_used,
    }
}

/// Whether both volume fields are present: each must parse to a non-zero number.
pub fn has_volume(raw: &RawInputs) -> bool {
    [InputField::PalletsPerDay, InputField::WorkdaysPerYear]
        .iter()
        .all(|field| crate::core::parse_or_zero(raw.get(*field)) != 0.0)
}

/// A complete calculation: what went in, what came out, and how it reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs: NormalizedInputs,
    pub result: RoiResult,
    pub narrative: Narrative,
}

/// Run the whole pipeline, or return `None` when the volume gate is closed.
pub fn evaluate(raw: &RawInputs) -> Option<Evaluation> {
    if !has_volume(raw) {
        log::debug!("pallets/day or workdays/year missing; no result");
        return None;
    }

    let inputs = normalize(raw);
    let result = compute(&inputs);
    let narrative = Narrative::from_result(&result);

    Some(Evaluation {
        inputs,
        result,
        narrative,
    })
}
