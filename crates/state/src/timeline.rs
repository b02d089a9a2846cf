//! Date-annotated message timeline.
//!
//! Messages are grouped by local calendar day, not by instant: two messages
//! two minutes apart can still sit on opposite sides of a midnight boundary,
//! and that is the intended behavior.

use {
    chrono::{DateTime, Local, NaiveDate, Utc},
    harbor_protocol::Message,
};

/// A display-ready message plus its date-separator flag.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub message: Message,
    /// Render a date marker before this message.
    pub starts_new_day: bool,
}

/// Annotate an ordered message sequence with date boundaries.
///
/// Works for either display order (oldest-first or newest-first): only
/// adjacent pairs are compared. The first message, if any, always starts a
/// day; an empty input yields an empty output.
#[must_use]
pub fn assemble(messages: Vec<Message>) -> Vec<TimelineEntry> {
    let mut previous: Option<NaiveDate> = None;
    messages
        .into_iter()
        .map(|message| {
            let day = local_day(&message.created_at);
            let starts_new_day = previous != Some(day);
            previous = Some(day);
            TimelineEntry {
                message,
                starts_new_day,
            }
        })
        .collect()
}

/// The calendar day an instant falls on in the rendering host's time zone.
#[must_use]
pub fn local_day(instant: &DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Human label for a date marker: "Today", "Yesterday", or the calendar date.
#[must_use]
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".into()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".into()
    } else {
        day.format("%B %-d, %Y").to_string()
    }
}

/// Marker label for a message, relative to the current local day.
#[must_use]
pub fn marker_label(message: &Message) -> String {
    day_label(local_day(&message.created_at), Local::now().date_naive())
}
