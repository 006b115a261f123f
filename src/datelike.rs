use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::LabelError;

/// Date value as handed over by the host application.
///
/// Record dates arrive in whatever shape the caller has on hand: a plain
/// date string, an epoch timestamp, or an already-parsed chrono value.
/// Everything resolves to a calendar date in the host's local time zone;
/// no further normalization is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Text(String),
    EpochSeconds(i64),
    EpochMillis(i64),
    Date(NaiveDate),
    DateTime(DateTime<Local>),
}

impl DateInput {
    /// Resolve this input to a local calendar date.
    pub fn resolve(&self) -> Result<NaiveDate, LabelError> {
        match self {
            DateInput::Text(text) => parse_text(text),
            DateInput::EpochSeconds(secs) => DateTime::from_timestamp(*secs, 0)
                .map(|dt| dt.with_timezone(&Local).date_naive())
                .ok_or_else(|| invalid(&secs.to_string())),
            DateInput::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|dt| dt.with_timezone(&Local).date_naive())
                .ok_or_else(|| invalid(&millis.to_string())),
            DateInput::Date(date) => Ok(*date),
            DateInput::DateTime(datetime) => Ok(datetime.date_naive()),
        }
    }
}

fn invalid(input: &str) -> LabelError {
    LabelError::InvalidDate {
        input: input.to_string(),
    }
}

/// Try the date-string shapes the host application produces, most common
/// first. Timezone-aware strings (RFC 3339) are converted to local time
/// before the calendar date is taken.
fn parse_text(text: &str) -> Result<NaiveDate, LabelError> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.with_timezone(&Local).date_naive());
    }

    Err(invalid(trimmed))
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(secs: i64) -> Self {
        DateInput::EpochSeconds(secs)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(datetime: DateTime<Local>) -> Self {
        DateInput::DateTime(datetime)
    }
}
