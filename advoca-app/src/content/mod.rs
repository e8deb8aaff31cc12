//! Hardcoded site content.
//!
//! Every sequence here is supplied once at startup and never mutated;
//! insertion order is display and rotation order.

pub mod about;
pub mod blog;
pub mod carousel;
pub mod events;
pub mod mission;
pub mod resources;
pub mod resume;
pub mod site;
pub mod testimonials;

use advoca_model::chrono::NaiveDate;

// Content dates are fixed editorial data; a bad literal is a content bug
// caught by the first test run, not a runtime condition.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
