//! Core content data model shared across Advoca crates.
//!
//! Every type here is inert configuration data: the application constructs
//! its content sequences once, at startup, and never mutates them. Behavior
//! (selection, rotation, filtering) lives in the application crate.
#![allow(missing_docs)]

pub use ::chrono;

pub mod blog;
pub mod event;
pub mod filter;
pub mod image;
pub mod mission;
pub mod resource;
pub mod resume;
pub mod testimonial;

// Intentionally curated re-exports for downstream consumers.
pub use blog::{BlogCategory, BlogPost};
pub use event::{Event, EventPhase};
pub use filter::{Filter, Labeled};
pub use image::CarouselImage;
pub use mission::{MissionStatement, Pillar};
pub use resource::{Resource, ResourceCategory, ResourceKind};
pub use resume::{Education, Experience, ResumeProfile};
pub use testimonial::Testimonial;
