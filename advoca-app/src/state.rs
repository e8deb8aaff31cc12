//! Application state: the active section plus one selection state per
//! section. Each section owns its state exclusively; nothing is shared.

use std::fmt;

use advoca_model::{
    BlogCategory, EventPhase, Filter, ResourceCategory, ResourceKind,
};

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::content;
use crate::selection::RotatingSelector;

/// Top-level page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Events,
    Blog,
    Resources,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in navigation order.
    pub fn all() -> &'static [Section] {
        use Section::*;
        &[Home, Events, Blog, Resources, Testimonials, Contact]
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Events => "Events",
            Section::Blog => "Blog",
            Section::Resources => "Resources",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// About-section state: the manually navigated image carousel.
#[derive(Debug, Clone)]
pub struct AboutState {
    pub carousel: RotatingSelector,
}

impl Default for AboutState {
    fn default() -> Self {
        Self {
            carousel: RotatingSelector::carousel(
                content::carousel::IMAGES.len(),
            ),
        }
    }
}

/// Testimonial-section state: the auto-advancing quote rotator.
#[derive(Debug, Clone)]
pub struct TestimonialsState {
    pub rotator: RotatingSelector,
}

impl Default for TestimonialsState {
    fn default() -> Self {
        Self {
            rotator: RotatingSelector::rotator(
                content::testimonials::TESTIMONIALS.len(),
            ),
        }
    }
}

/// Events-section state: phase tabs over the listing grid.
#[derive(Debug, Clone)]
pub struct EventsState {
    pub selector: RotatingSelector<EventPhase, ()>,
}

impl Default for EventsState {
    fn default() -> Self {
        let labels = content::events::EVENTS
            .iter()
            .map(|event| (Some(event.phase), None))
            .collect();
        let mut selector = RotatingSelector::filtered(labels);
        // The tab row has no "All" tab; the listing opens on upcoming events.
        selector.set_category_filter(Filter::Only(EventPhase::Upcoming));
        Self { selector }
    }
}

/// Blog-section state: category pills over the excerpt grid.
#[derive(Debug, Clone)]
pub struct BlogState {
    pub selector: RotatingSelector<BlogCategory, ()>,
}

impl Default for BlogState {
    fn default() -> Self {
        let labels = content::blog::POSTS
            .iter()
            .map(|post| (Some(post.category), None))
            .collect();
        Self {
            selector: RotatingSelector::filtered(labels),
        }
    }
}

/// Resource-library state: category and kind filters plus a free-text
/// search refinement.
#[derive(Debug, Clone)]
pub struct ResourcesState {
    pub selector: RotatingSelector<ResourceCategory, ResourceKind>,
    pub query: String,
}

impl Default for ResourcesState {
    fn default() -> Self {
        let labels = content::resources::RESOURCES
            .iter()
            .map(|resource| (Some(resource.category), Some(resource.kind)))
            .collect();
        Self {
            selector: RotatingSelector::filtered(labels),
            query: String::new(),
        }
    }
}

impl ResourcesState {
    /// Indices of the resources that pass both filters and the search
    /// query, in original order.
    pub fn visible(&self) -> Vec<usize> {
        let query = self.query.trim().to_lowercase();
        self.selector
            .view()
            .iter()
            .copied()
            .filter(|&index| {
                if query.is_empty() {
                    return true;
                }
                let resource = &content::resources::RESOURCES[index];
                resource.title.to_lowercase().contains(&query)
                    || resource.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Whole-application state.
#[derive(Debug)]
pub struct State {
    pub config: SiteConfig,
    pub section: Section,
    pub menu_open: bool,
    pub about: AboutState,
    pub testimonials: TestimonialsState,
    pub events: EventsState,
    pub blog: BlogState,
    pub resources: ResourcesState,
    pub contact: ContactForm,
}

impl State {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            section: Section::Home,
            menu_open: false,
            about: AboutState::default(),
            testimonials: TestimonialsState::default(),
            events: EventsState::default(),
            blog: BlogState::default(),
            resources: ResourcesState::default(),
            contact: ContactForm::default(),
        }
    }

    /// Rebuild a section's state from scratch.
    ///
    /// Leaving a section is its unmount: the next visit observes a fresh
    /// selection state (cursor 0, autoplay running, filters at their
    /// initial values).
    pub(crate) fn reset_section(&mut self, section: Section) {
        match section {
            Section::Home => self.about = AboutState::default(),
            Section::Events => self.events = EventsState::default(),
            Section::Blog => self.blog = BlogState::default(),
            Section::Resources => self.resources = ResourcesState::default(),
            Section::Testimonials => {
                self.testimonials = TestimonialsState::default();
            }
            Section::Contact => self.contact = ContactForm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_open_on_the_upcoming_tab() {
        let events = EventsState::default();
        assert_eq!(
            events.selector.category_filter(),
            Filter::Only(EventPhase::Upcoming)
        );
        for &index in events.selector.view() {
            assert_eq!(
                content::events::EVENTS[index].phase,
                EventPhase::Upcoming
            );
        }
    }

    #[test]
    fn resource_search_refines_the_filtered_view() {
        let mut resources = ResourcesState::default();
        resources.query = "kidney".into();
        assert_eq!(resources.visible(), vec![0]);

        resources.query = "guide".into();
        assert_eq!(resources.visible(), vec![0, 1]);

        resources.query = "no such thing".into();
        assert!(resources.visible().is_empty());
    }

    #[test]
    fn resource_search_composes_with_filters() {
        let mut resources = ResourcesState::default();
        resources
            .selector
            .set_kind_filter(Filter::Only(ResourceKind::Pdf));
        resources.query = "guide".into();
        assert_eq!(resources.visible(), vec![0, 1]);

        resources
            .selector
            .set_category_filter(Filter::Only(ResourceCategory::Process));
        assert_eq!(resources.visible(), vec![1]);
    }
}
