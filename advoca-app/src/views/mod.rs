//! Per-section view functions (the Presentation Adapter).
//!
//! Each function is a pure mapping from state and content to markup; all
//! behavior flows back through messages.

pub mod about;
pub mod blog;
pub mod contact;
pub mod events;
pub mod footer;
pub mod header;
pub mod hero;
pub mod home;
pub mod mission;
pub mod resources;
pub mod resume;
pub mod testimonials;
pub mod widgets;
