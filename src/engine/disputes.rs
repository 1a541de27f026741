use super::MONTHS_PER_YEAR;
use crate::core::NormalizedInputs;

/// Share of monthly pallets assumed to end in a dispute when nothing better is known.
pub const VOLUME_DISPUTE_RATE: f64 = 0.01;

/// How the monthly dispute count is obtained. First match wins:
/// a reported count, then the incidence estimator if enabled, then the
/// flat volume share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisputeEstimate {
    Reported {
        per_month: f64,
    },
    Incidence {
        pallets_year: f64,
        incidence_pct: f64,
        share_contested_pct: f64,
    },
    VolumeShare {
        pallets_year: f64,
    },
}

impl DisputeEstimate {
    pub fn select(inputs: &NormalizedInputs, pallets_year: f64) -> Self {
        if inputs.disputes_per_month > 0.0 {
            DisputeEstimate::Reported {
                per_month: inputs.disputes_per_month,
            }
        } else if inputs.use_incidence_estimator {
            DisputeEstimate::Incidence {
                pallets_year,
                incidence_pct: inputs.chargeback_incidence,
                share_contested_pct: inputs.share_contested,
            }
        } else {
            DisputeEstimate::VolumeShare { pallets_year }
        }
    }

    pub fn per_month(&self) -> f64 {
        match *self {
            DisputeEstimate::Reported { per_month } => per_month,
            DisputeEstimate::Incidence {
                pallets_year,
                incidence_pct,
                share_contested_pct,
            } => incidence_disputes_per_month(pallets_year, incidence_pct, share_contested_pct),
            DisputeEstimate::VolumeShare { pallets_year } => volume_disputes_per_month(pallets_year),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisputeEstimate::Reported { .. } => "reported",
            DisputeEstimate::Incidence { .. } => "incidence",
            DisputeEstimate::VolumeShare { .. } => "volume-share",
        }
    }
}

pub fn incidence_disputes_per_month(
    pallets_year: f64,
    incidence_pct: f64,
    share_contested_pct: f64,
) -> f64 {
    (pallets_year * (incidence_pct / 100.0) * (share_contested_pct / 100.0)) / MONTHS_PER_YEAR
}

pub fn volume_disputes_per_month(pallets_year: f64) -> f64 {
    (pallets_year / MONTHS_PER_YEAR) * VOLUME_DISPUTE_RATE
}

pub fn dispute_hours_per_year(disputes_per_month: f64, hours_per_dispute: f64) -> f64 {
    disputes_per_month * MONTHS_PER_YEAR * hours_per_dispute
}

pub fn dispute_savings(dispute_hours_year: f64, labor_rate: f64, reduction_pct: f64) -> f64 {
    dispute_hours_year * labor_rate * (reduction_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(disputes_per_month: f64, use_incidence_estimator: bool) -> NormalizedInputs {
        NormalizedInputs {
            disputes_per_month,
            use_incidence_estimator,
            chargeback_incidence: 6.0,
            share_contested: 60.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_reported_count_beats_both_estimators() {
        for flag in [false, true] {
            let estimate = DisputeEstimate::select(&inputs(40.0, flag), 25_000.0);
            assert_eq!(estimate, DisputeEstimate::Reported { per_month: 40.0 });
            assert_eq!(estimate.per_month(), 40.0);
        }
    }

    #[test]
    fn test_incidence_estimator_when_enabled() {
        let estimate = DisputeEstimate::select(&inputs(0.0, true), 25_000.0);
        assert_eq!(estimate.name(), "incidence");
        // 25000 * 0.06 * 0.6 / 12
        assert!((estimate.per_month() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_volume_share_is_the_fallback() {
        let estimate = DisputeEstimate::select(&inputs(0.0, false), 25_000.0);
        assert_eq!(estimate.name(), "volume-share");
        assert!((estimate.per_month() - 25_000.0 / 12.0 * 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_dispute_savings_chain() {
        let hours = dispute_hours_per_year(20.0, 2.0);
        assert_eq!(hours, 480.0);
        assert!((dispute_savings(hours, 22.0, 65.0) - 6_864.0).abs() < 1e-9);
    }
}
