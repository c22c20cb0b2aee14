pub mod types;
pub mod normalize;
pub mod detect;
pub mod patterns;
pub mod extract;
pub mod confidence;
pub mod report;
pub mod orchestrator;

pub use types::*;
pub use normalize::*;
pub use detect::*;
pub use extract::*;
pub use confidence::*;
pub use report::*;
pub use orchestrator::*;

use thiserror::Error;

/// Engine boundary errors. Field and category misses are ordinary data,
/// not errors; only structurally invalid input is rejected.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("token confidence out of range at index {index}: {value} (expected 0.0..=1.0)")]
    InvalidTokenConfidence { index: usize, value: f32 },
}
