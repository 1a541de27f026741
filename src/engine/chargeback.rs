use crate::core::NormalizedInputs;

/// Where the annual chargeback baseline comes from.
///
/// A reported figure takes precedence over the incidence estimate
/// whenever it is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChargebackBaseline {
    /// Annual chargeback spend entered directly.
    Reported { annual: f64 },
    /// Derived from pallet volume, incidence rate and cost per incident.
    Estimated {
        pallets_year: f64,
        incidence_pct: f64,
        avg_cost: f64,
    },
}

impl ChargebackBaseline {
    pub fn select(inputs: &NormalizedInputs, pallets_year: f64) -> Self {
        if inputs.annual_chargebacks > 0.0 {
            ChargebackBaseline::Reported {
                annual: inputs.annual_chargebacks,
            }
        } else {
            ChargebackBaseline::Estimated {
                pallets_year,
                incidence_pct: inputs.chargeback_incidence,
                avg_cost: inputs.avg_chargeback_cost,
            }
        }
    }

    pub fn evaluate(&self) -> f64 {
        match *self {
            ChargebackBaseline::Reported { annual } => reported_baseline(annual),
            ChargebackBaseline::Estimated {
                pallets_year,
                incidence_pct,
                avg_cost,
            } => estimated_baseline(pallets_year, incidence_pct, avg_cost),
        }
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, ChargebackBaseline::Reported { .. })
    }
}

pub fn reported_baseline(annual: f64) -> f64 {
    annual
}

pub fn estimated_baseline(pallets_year: f64, incidence_pct: f64, avg_cost: f64) -> f64 {
    pallets_year * (incidence_pct / 100.0) * avg_cost
}

pub fn chargeback_savings(baseline: f64, reduction_pct: f64) -> f64 {
    baseline * (reduction_pct / 100.0)
}
