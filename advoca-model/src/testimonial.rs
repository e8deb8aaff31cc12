//! Testimonial records for the auto-advancing rotator.

/// One testimonial shown by the rotating quote display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    /// Name of the person quoted.
    pub name: &'static str,
    /// Their role, e.g. "Medical Director".
    pub role: &'static str,
    /// The organization they belong to.
    pub organization: &'static str,
    /// The quote body, without surrounding quotation marks.
    pub quote: &'static str,
    /// Asset-relative portrait image path.
    pub portrait: &'static str,
}

impl Testimonial {
    /// Attribution line rendered under the quote.
    pub fn attribution(&self) -> String {
        format!("{} at {}", self.role, self.organization)
    }
}
