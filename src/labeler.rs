use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::datelike::DateInput;
use crate::error::LabelError;

/// Which optional label branches are active.
///
/// The reporting app historically carried two copies of this logic: an
/// extended one used on the record lists (tomorrow, weekday window,
/// bare day-month for the current year) and a legacy one used on older
/// screens (only a "Last Month" special case on top of the shared
/// today/yesterday checks). Both are preserved as presets of one
/// function instead of two diverging implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub include_tomorrow: bool,
    pub include_weekday_window: bool,
    pub include_last_month: bool,
    pub include_year_only: bool,
}

impl LabelOptions {
    /// Extended behavior: today, yesterday, tomorrow, weekday names
    /// within six days either side, `dd-MMM` for the rest of the current
    /// year, `dd-MMM-yyyy` otherwise. No "Last Month" branch.
    pub const fn extended() -> Self {
        Self {
            include_tomorrow: true,
            include_weekday_window: true,
            include_last_month: false,
            include_year_only: true,
        }
    }

    /// Legacy behavior: today, yesterday, "Last Month" for the
    /// immediately preceding calendar month (December to January
    /// included), and the full `dd-MMM-yyyy` fallback for everything
    /// else.
    pub const fn legacy() -> Self {
        Self {
            include_tomorrow: false,
            include_weekday_window: false,
            include_last_month: true,
            include_year_only: false,
        }
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self::extended()
    }
}

/// Classification outcome. `Display` renders the user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLabel {
    Today,
    Yesterday,
    Tomorrow,
    LastMonth,
    Weekday(NaiveDate),
    MonthDay(NaiveDate),
    Full(NaiveDate),
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLabel::Today => f.write_str("Today"),
            DateLabel::Yesterday => f.write_str("Yesterday"),
            DateLabel::Tomorrow => f.write_str("Tomorrow"),
            DateLabel::LastMonth => f.write_str("Last Month"),
            DateLabel::Weekday(date) => write!(f, "{}", date.format("%A")),
            DateLabel::MonthDay(date) => write!(f, "{}", date.format("%d-%b")),
            DateLabel::Full(date) => write!(f, "{}", date.format("%d-%b-%Y")),
        }
    }
}

/// Classify `date` relative to an explicit current date.
///
/// Branch order matters and is not commutative: "Today" has to win over
/// "Last Month" at a month boundary, and "Yesterday" has to win over the
/// weekday window that also contains it.
pub fn classify_with(
    date: impl Into<DateInput>,
    now: NaiveDate,
    options: &LabelOptions,
) -> Result<DateLabel, LabelError> {
    let date = date.into().resolve()?;
    let days_from_now = (date - now).num_days();

    if days_from_now == 0 {
        return Ok(DateLabel::Today);
    }
    if days_from_now == -1 {
        return Ok(DateLabel::Yesterday);
    }
    if options.include_tomorrow && days_from_now == 1 {
        return Ok(DateLabel::Tomorrow);
    }
    if options.include_last_month && is_previous_month(date, now) {
        return Ok(DateLabel::LastMonth);
    }
    if options.include_weekday_window && days_from_now.abs() <= 6 {
        return Ok(DateLabel::Weekday(date));
    }
    if options.include_year_only && date.year() == now.year() {
        return Ok(DateLabel::MonthDay(date));
    }
    Ok(DateLabel::Full(date))
}

/// Classify `date` against the current local date.
pub fn classify(
    date: impl Into<DateInput>,
    options: &LabelOptions,
) -> Result<DateLabel, LabelError> {
    classify_with(date, Local::now().date_naive(), options)
}

/// Render the label for `date` relative to an explicit current date.
pub fn label_with(
    date: impl Into<DateInput>,
    now: NaiveDate,
    options: &LabelOptions,
) -> Result<String, LabelError> {
    classify_with(date, now, options).map(|label| label.to_string())
}

/// Render the label for `date` against the current local date.
pub fn label(date: impl Into<DateInput>, options: &LabelOptions) -> Result<String, LabelError> {
    label_with(date, Local::now().date_naive(), options)
}

/// Extended-variant label (record list screens).
pub fn label_extended(date: impl Into<DateInput>, now: NaiveDate) -> Result<String, LabelError> {
    label_with(date, now, &LabelOptions::extended())
}

/// Legacy-variant label (older screens).
pub fn label_legacy(date: impl Into<DateInput>, now: NaiveDate) -> Result<String, LabelError> {
    label_with(date, now, &LabelOptions::legacy())
}

/// True when `date` falls in the calendar month immediately before
/// `now`. December to January is the only case that crosses a year
/// boundary; any other cross-year pair is not "last month".
fn is_previous_month(date: NaiveDate, now: NaiveDate) -> bool {
    (now.year() == date.year() && now.month() == date.month() + 1)
        || (now.year() == date.year() + 1 && now.month() == 1 && date.month() == 12)
}
