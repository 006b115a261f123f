//! Relative date labels for the daily activity reporting screens.
//!
//! Maps a record's date to a short heading ("Today", "Yesterday",
//! "Saturday", "01-Feb", "20-Feb-2024") relative to an injectable
//! current date, in the host's local time zone.

pub mod datelike;
pub mod error;
pub mod labeler;

// Re-exports for convenience
pub use datelike::DateInput;
pub use error::LabelError;
pub use labeler::{
    DateLabel, LabelOptions, classify, classify_with, label, label_extended, label_legacy,
    label_with,
};
