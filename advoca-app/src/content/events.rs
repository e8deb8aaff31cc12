//! Events and workshops listing.

use advoca_model::{Event, EventPhase};
use once_cell::sync::Lazy;

use super::date;

pub static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        Event {
            title: "Health Equity Summit 2024",
            date: date(2024, 4, 15),
            time: "9:00 AM - 5:00 PM",
            location: "Virtual Event",
            description: "Join us for a day of discussions on advancing \
                          health equity through community engagement and \
                          policy change.",
            phase: EventPhase::Upcoming,
            image: "event-1.jpg",
            registration: Some("#"),
        },
        Event {
            title: "Living Donor Awareness Workshop",
            date: date(2024, 4, 20),
            time: "2:00 PM - 4:00 PM",
            location: "Community Center, Bronx",
            description: "Learn about the importance of living kidney \
                          donation and how you can make a difference.",
            phase: EventPhase::Upcoming,
            image: "event-2.jpg",
            registration: Some("#"),
        },
        Event {
            title: "Cultural Humility in Healthcare",
            date: date(2024, 3, 10),
            time: "6:00 PM - 8:00 PM",
            location: "Virtual Event",
            description: "A workshop on understanding and implementing \
                          cultural humility in healthcare settings.",
            phase: EventPhase::Past,
            image: "event-3.jpg",
            registration: None,
        },
    ]
});

pub const CALENDAR_TITLE: &str = "Add to Calendar";
pub const CALENDAR_BODY: &str = "Subscribe to our calendar to stay updated \
                                 with all upcoming events and workshops.";
