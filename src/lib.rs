//! vitalparse turns unstructured text recovered from a medical report
//! (OCR output or a PDF text layer) into named numeric measurements
//! grouped by clinical category. The engine is a pure transformation:
//! no I/O, no state, safe to call from any number of threads.
//!
//! Image acquisition, OCR inference, PDF extraction and the HTTP surface
//! are upstream collaborators; this crate only consumes their finalized
//! text and optional per-token confidences.

pub mod pipeline;

pub use pipeline::orchestrator::parse_report;
pub use pipeline::types::{Category, FieldValues, ParsedReport, ReportInput, TextSource};
pub use pipeline::EngineError;
