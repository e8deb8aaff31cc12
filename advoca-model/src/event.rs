//! Event and workshop listings.

use std::fmt;

use chrono::NaiveDate;

use crate::filter::Labeled;

/// Whether an event still lies ahead or has already happened.
///
/// This is an explicit content tag, not derived from the wall clock, so the
/// listing renders identically regardless of when it is viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventPhase {
    /// Scheduled and open for registration.
    Upcoming,
    /// Already held; kept for the archive tab.
    Past,
}

impl EventPhase {
    /// Every phase, in tab order.
    pub fn all() -> &'static [EventPhase] {
        &[EventPhase::Upcoming, EventPhase::Past]
    }
}

impl Labeled for EventPhase {
    fn label(&self) -> &'static str {
        match self {
            EventPhase::Upcoming => "Upcoming",
            EventPhase::Past => "Past",
        }
    }
}

impl fmt::Display for EventPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry in the events listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Event title.
    pub title: &'static str,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Display time range, e.g. "9:00 AM - 5:00 PM".
    pub time: &'static str,
    /// Venue or "Virtual Event".
    pub location: &'static str,
    /// Short description shown on the card.
    pub description: &'static str,
    /// Listing tab this event belongs to.
    pub phase: EventPhase,
    /// Asset-relative card image path.
    pub image: &'static str,
    /// Registration link, present only for events that accept signups.
    pub registration: Option<&'static str>,
}

impl Event {
    /// Date formatted the way the listing renders it, e.g. "April 15, 2024".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let event = Event {
            title: "t",
            date,
            time: "",
            location: "",
            description: "",
            phase: EventPhase::Past,
            image: "",
            registration: None,
        };
        assert_eq!(event.date_label(), "March 5, 2024");
    }
}
