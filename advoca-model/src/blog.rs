//! Blog post excerpts and their category labels.

use std::fmt;

use chrono::NaiveDate;

use crate::filter::Labeled;

/// Topic a post is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlogCategory {
    HealthEquity,
    KidneyHealth,
    Healthcare,
    Advocacy,
}

impl BlogCategory {
    /// Every category, in the order the filter row renders them.
    pub fn all() -> &'static [BlogCategory] {
        use BlogCategory::*;
        &[HealthEquity, KidneyHealth, Healthcare, Advocacy]
    }
}

impl Labeled for BlogCategory {
    fn label(&self) -> &'static str {
        match self {
            BlogCategory::HealthEquity => "Health Equity",
            BlogCategory::KidneyHealth => "Kidney Health",
            BlogCategory::Healthcare => "Healthcare",
            BlogCategory::Advocacy => "Advocacy",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One blog excerpt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlogPost {
    /// Post title.
    pub title: &'static str,
    /// Teaser paragraph shown on the card.
    pub excerpt: &'static str,
    /// Category badge and filter label.
    pub category: BlogCategory,
    /// Publication date.
    pub date: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_minutes: u8,
    /// Asset-relative card image path.
    pub image: &'static str,
}

impl BlogPost {
    /// Date formatted for the card meta row, e.g. "March 15, 2024".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Reading-time badge, e.g. "5 min read".
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}
