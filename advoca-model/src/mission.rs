//! Mission essays and advocacy pillar cards.

/// One long-form mission statement card.
///
/// `body` holds the full essay; paragraphs are separated by blank lines and
/// split by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionStatement {
    /// Emoji icon shown next to the title.
    pub icon: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Essay body with blank-line paragraph breaks.
    pub body: &'static str,
}

impl MissionStatement {
    /// Paragraphs of the essay, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.body.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
    }
}

/// One of the short advocacy principle cards in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    /// Emoji icon on the card front.
    pub icon: &'static str,
    /// Principle title.
    pub title: &'static str,
    /// One-sentence explanation.
    pub summary: &'static str,
}
