//! Data model shared by the engine, the narrative classifier and the writers.

pub mod inputs;
pub mod normalize;
pub mod results;

pub use inputs::{InputField, InputOverrides, RawInputs, RawValue};
pub use normalize::{normalize, parse_or_zero, NormalizedInputs};
pub use results::RoiResult;
