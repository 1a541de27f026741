//! Threshold rules behind each narrative statement.
//!
//! Each rule maps one figure of the result onto a small enum; the enum
//! owns the wording. Rules never look at each other.

use crate::formatting::format_currency;

pub const FAST_PAYBACK_MONTHS: f64 = 3.0;
pub const MID_YEAR_PAYBACK_MONTHS: f64 = 6.0;
pub const FULL_FTE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaybackTier {
    /// Paid back within the first quarter.
    Fast,
    MidYear,
    Slow,
    /// No positive savings, so no payback period exists.
    Undefined,
}

impl PaybackTier {
    pub fn classify(payback_months: Option<f64>) -> Self {
        match payback_months {
            None => PaybackTier::Undefined,
            Some(m) if m <= FAST_PAYBACK_MONTHS => PaybackTier::Fast,
            Some(m) if m <= MID_YEAR_PAYBACK_MONTHS => PaybackTier::MidYear,
            Some(_) => PaybackTier::Slow,
        }
    }

    pub fn statement(self) -> String {
        match self {
            PaybackTier::Fast => "Payback ≤ 3 months—clears in Q1.",
            PaybackTier::MidYear => "Mid-year payback.",
            PaybackTier::Slow => "H2 payback—raise chargeback reduction or revisit Year-1 cost.",
            PaybackTier::Undefined => {
                "No payback period—projected savings do not cover costs; raise chargeback reduction or revisit Year-1 cost."
            }
        }
        .to_string()
    }
}

/// Sign of a net savings figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NetPosition {
    Positive(f64),
    NotPositive,
}

impl NetPosition {
    pub fn classify(net: f64) -> Self {
        if net > 0.0 {
            NetPosition::Positive(net)
        } else {
            NetPosition::NotPositive
        }
    }

    // Amounts are whole dollars via `format_currency`; cents are dropped.
    pub fn year1_statement(self) -> String {
        match self {
            NetPosition::Positive(net) => {
                format!("Year-1 net positive by {}.", format_currency(net))
            }
            NetPosition::NotPositive => {
                "Year-1 not net positive—tune average $ per chargeback and reduction.".to_string()
            }
        }
    }

    pub fn ongoing_statement(self) -> String {
        match self {
            NetPosition::Positive(net) => {
                format!("From Year-2, net savings ~{}/yr.", format_currency(net))
            }
            NetPosition::NotPositive => {
                "Near break-even—tighten dispute time or increase reduction.".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FteImpact {
    /// At least one full-time position freed.
    Whole(f64),
    Partial,
}

impl FteImpact {
    pub fn classify(fte_saved: f64) -> Self {
        if fte_saved >= FULL_FTE {
            FteImpact::Whole(fte_saved)
        } else {
            FteImpact::Partial
        }
    }

    pub fn statement(self) -> String {
        match self {
            FteImpact::Whole(fte) => format!("Saves about {fte:.2} FTE—reassign to value work."),
            FteImpact::Partial => "Partial FTE freed—pool across shifts.".to_string(),
        }
    }
}
