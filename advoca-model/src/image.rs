//! Carousel image records.

/// One image in a manually navigated carousel.
///
/// `path` is relative to the application's configured asset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselImage {
    /// Asset-relative image path.
    pub path: &'static str,
    /// Caption rendered over the image.
    pub caption: &'static str,
}
