//! Conversions between the date strings users type, the text we store, and
//! the strings we put back on screen.
//!
//! Storage is always an ISO 8601 calendar date (`YYYY-MM-DD`), so sorting
//! the stored text sorts the memos chronologically. Every other format only
//! exists at the edges.

use chrono::{NaiveDate, NaiveDateTime, ParseError};

pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// What the list view posts to `/_edit`, and what it expects back.
pub const EDIT_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the edit form shows the date it is editing.
pub const EDIT_DISPLAY_FORMAT: &str = "%m-%d-%Y";

const LONG_DISPLAY_FORMAT: &str = "%a %m/%d/%Y";

/// Tried in order. `%Y-%m-%d` comes from `<input type="date">`.
const USER_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y"];

pub fn to_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

pub fn parse_stored(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, STORAGE_FORMAT)
}

/// Parse whatever a form gave us. `None` if no known format fits, or if the
/// date does not exist on the calendar.
pub fn parse_user_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    USER_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, EDIT_INPUT_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

pub fn to_edit_input(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.format(EDIT_INPUT_FORMAT).to_string())
        .unwrap_or_else(|| to_storage(date))
}

/// `2026-10-16 00:00:00` -> `10-16-2026`
pub fn edit_display(value: &str) -> Result<String, ParseError> {
    let date = NaiveDateTime::parse_from_str(value.trim(), EDIT_INPUT_FORMAT)?
        .date();
    Ok(date.format(EDIT_DISPLAY_FORMAT).to_string())
}

pub fn long_display(date: NaiveDate) -> String {
    date.format(LONG_DISPLAY_FORMAT).to_string()
}
