use thiserror::Error;

/// Errors produced while resolving a date input.
///
/// Malformed input is a hard error here rather than an "Invalid Date"
/// placeholder string leaking into the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("invalid date input: {input:?}")]
    InvalidDate { input: String },
}
