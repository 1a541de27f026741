// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod narrative;

// Re-export commonly used types
pub use crate::core::{
    normalize, InputField, InputOverrides, NormalizedInputs, RawInputs, RawValue, RoiResult,
};
pub use crate::engine::{compute, evaluate, Evaluation};
pub use crate::errors::{ErrorCode, RoiError};
pub use crate::formatting::{format_currency, format_payback};
pub use crate::narrative::{classify, Narrative};
