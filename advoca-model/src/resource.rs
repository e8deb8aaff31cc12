//! Downloadable resource records and their two filter dimensions.

use std::fmt;

use crate::filter::Labeled;

/// Subject area a resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceCategory {
    Education,
    Process,
    Advocacy,
}

impl ResourceCategory {
    /// Every category, in filter-row order.
    pub fn all() -> &'static [ResourceCategory] {
        use ResourceCategory::*;
        &[Education, Process, Advocacy]
    }
}

impl Labeled for ResourceCategory {
    fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Education => "Education",
            ResourceCategory::Process => "Process",
            ResourceCategory::Advocacy => "Advocacy",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Media format of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Pdf,
    Video,
    Article,
}

impl ResourceKind {
    /// Every kind, in filter-row order.
    pub fn all() -> &'static [ResourceKind] {
        use ResourceKind::*;
        &[Pdf, Video, Article]
    }

    /// Uppercase badge text shown on resource cards.
    pub fn badge(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Video => "VIDEO",
            ResourceKind::Article => "ARTICLE",
        }
    }
}

impl Labeled for ResourceKind {
    fn label(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Video => "Video",
            ResourceKind::Article => "Article",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry in the resource library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// Resource title.
    pub title: &'static str,
    /// Short description shown on the card.
    pub description: &'static str,
    /// Subject-area filter dimension.
    pub category: ResourceCategory,
    /// Media-format filter dimension.
    pub kind: ResourceKind,
    /// Asset-relative path of the downloadable file.
    pub file: &'static str,
    /// Asset-relative thumbnail path.
    pub thumbnail: &'static str,
    /// Display month, e.g. "March 2024".
    pub date: &'static str,
}
