use super::dates;
use chrono::{Local, NaiveDate};

/// The server's local calendar date. Users type dates in server-local time,
/// so that is what "today" means here.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "Today", "Tomorrow", "Yesterday", "5 days from now", "3 days ago".
pub fn humanize(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        let days = (date - today).num_days();
        if days > 0 {
            format!("{days} days from now")
        } else {
            format!("{} days ago", days.abs())
        }
    }
}

/// Like [`humanize`], but for text that came from somewhere we don't
/// control. If it won't parse, the original value is shown as-is.
pub fn humanize_raw(value: &str, today: NaiveDate) -> String {
    match dates::parse_user_date(value) {
        Some(date) => humanize(date, today),
        None => value.to_string(),
    }
}
