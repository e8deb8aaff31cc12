//! Application messages, fanned out to per-section handlers.

use advoca_model::{
    BlogCategory, EventPhase, Filter, ResourceCategory, ResourceKind,
};

use crate::state::Section;

/// Top-level message enum dispatched by `update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the visible section.
    Navigate(Section),
    /// Open or close the compact navigation menu.
    ToggleMenu,
    /// Landing CTA: jump the home page past the hero.
    StartJourney,
    About(CarouselMessage),
    Testimonials(RotatorMessage),
    Events(EventsMessage),
    Blog(BlogMessage),
    Resources(ResourcesMessage),
    Contact(ContactMessage),
}

/// Manual navigation over the about-image carousel.
#[derive(Debug, Clone, Copy)]
pub enum CarouselMessage {
    Previous,
    Next,
    Select(usize),
}

/// Testimonial rotator controls plus the autoplay tick.
#[derive(Debug, Clone, Copy)]
pub enum RotatorMessage {
    Previous,
    Next,
    Select(usize),
    /// Timer-driven advance; never emitted by user interaction.
    AutoplayTick,
}

/// Event-listing tab switches.
#[derive(Debug, Clone, Copy)]
pub enum EventsMessage {
    SetPhase(EventPhase),
}

/// Blog category filter changes.
#[derive(Debug, Clone, Copy)]
pub enum BlogMessage {
    SetCategory(Filter<BlogCategory>),
}

/// Resource-library filter and search changes.
#[derive(Debug, Clone)]
pub enum ResourcesMessage {
    SetCategory(Filter<ResourceCategory>),
    SetKind(Filter<ResourceKind>),
    SearchChanged(String),
}

/// Contact form edits and submission.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    BodyChanged(String),
    Submit,
    DismissNotice,
}
