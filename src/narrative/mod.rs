//! Plain-language assessment of an ROI result.
//!
//! Four independent rules, always evaluated in the same order:
//! payback tier, year-1 net, ongoing net, FTE impact. The output therefore
//! always has four statements, and exporters may rely on their positions.

pub mod tiers;

use crate::core::RoiResult;
use serde::Serialize;

pub use tiers::{FteImpact, NetPosition, PaybackTier};

/// Ordered statements for one result.
pub fn classify(result: &RoiResult) -> Vec<String> {
    vec![
        PaybackTier::classify(result.payback_months).statement(),
        NetPosition::classify(result.year1_net).year1_statement(),
        NetPosition::classify(result.ongoing_net).ongoing_statement(),
        FteImpact::classify(result.fte_saved).statement(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Narrative {
    statements: Vec<String>,
}

impl Narrative {
    pub fn from_result(result: &RoiResult) -> Self {
        Self {
            statements: classify(result),
        }
    }

    /// The narrative shown when no result exists.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Single paragraph, statements separated by spaces.
    pub fn joined(&self) -> String {
        self.statements.join(" ")
    }
}
