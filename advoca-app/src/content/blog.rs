//! Blog excerpt listing.

use advoca_model::{BlogCategory, BlogPost};
use once_cell::sync::Lazy;

use super::date;

pub static POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        BlogPost {
            title: "Advancing Health Equity Through Community Engagement",
            excerpt: "Exploring the critical role of community engagement in \
                      addressing healthcare disparities and promoting health \
                      equity...",
            category: BlogCategory::HealthEquity,
            date: date(2024, 3, 15),
            read_minutes: 5,
            image: "blog-1.jpg",
        },
        BlogPost {
            title: "The Impact of Living Kidney Donation Programs",
            excerpt: "A deep dive into how living kidney donation programs \
                      are transforming lives and communities...",
            category: BlogCategory::KidneyHealth,
            date: date(2024, 3, 10),
            read_minutes: 7,
            image: "blog-2.jpg",
        },
        BlogPost {
            title: "Cultural Humility in Healthcare: A Personal Journey",
            excerpt: "Reflections on the importance of cultural humility in \
                      healthcare delivery and patient advocacy...",
            category: BlogCategory::Healthcare,
            date: date(2024, 3, 5),
            read_minutes: 6,
            image: "blog-3.jpg",
        },
    ]
});

pub const NEWSLETTER_TITLE: &str = "Stay Updated";
pub const NEWSLETTER_BODY: &str = "Subscribe to receive the latest insights \
                                   on health equity, kidney health, and \
                                   advocacy.";
