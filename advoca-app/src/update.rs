//! Root-level update dispatch.
//!
//! Every state transition happens here, on the single update loop, in the
//! order messages are dispatched. Handlers mutate the owning section's
//! state and return control tasks only for programmatic scrolling.

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use advoca_model::Filter;

use crate::message::{
    BlogMessage, CarouselMessage, ContactMessage, EventsMessage, Message,
    ResourcesMessage, RotatorMessage,
};
use crate::state::{Section, State};
use crate::view::PAGE_SCROLL_ID;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(target) => navigate(state, target),
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Task::none()
        }
        Message::StartJourney => {
            // Mirrors the landing CTA: scroll the home page past the hero.
            scrollable::scroll_to(
                scrollable::Id::new(PAGE_SCROLL_ID),
                AbsoluteOffset {
                    x: 0.0,
                    y: state.config.window_height,
                },
            )
        }
        Message::About(message) => update_about(state, message),
        Message::Testimonials(message) => update_testimonials(state, message),
        Message::Events(message) => update_events(state, message),
        Message::Blog(message) => update_blog(state, message),
        Message::Resources(message) => update_resources(state, message),
        Message::Contact(message) => update_contact(state, message),
    }
}

fn navigate(state: &mut State, target: Section) -> Task<Message> {
    state.menu_open = false;
    if state.section == target {
        return Task::none();
    }
    let departed = state.section;
    state.section = target;
    state.reset_section(departed);
    log::debug!("navigated from {departed} to {target}");

    scrollable::scroll_to(
        scrollable::Id::new(PAGE_SCROLL_ID),
        AbsoluteOffset::default(),
    )
}

fn update_about(state: &mut State, message: CarouselMessage) -> Task<Message> {
    let carousel = &mut state.about.carousel;
    match message {
        CarouselMessage::Previous => carousel.previous(),
        CarouselMessage::Next => carousel.next(),
        CarouselMessage::Select(index) => carousel.select(index),
    }
    Task::none()
}

fn update_testimonials(
    state: &mut State,
    message: RotatorMessage,
) -> Task<Message> {
    let rotator = &mut state.testimonials.rotator;
    match message {
        RotatorMessage::Previous => rotator.previous(),
        RotatorMessage::Next => rotator.next(),
        RotatorMessage::Select(index) => rotator.select(index),
        RotatorMessage::AutoplayTick => rotator.advance_auto(),
    }
    Task::none()
}

fn update_events(state: &mut State, message: EventsMessage) -> Task<Message> {
    match message {
        EventsMessage::SetPhase(phase) => {
            state
                .events
                .selector
                .set_category_filter(Filter::Only(phase));
        }
    }
    Task::none()
}

fn update_blog(state: &mut State, message: BlogMessage) -> Task<Message> {
    match message {
        BlogMessage::SetCategory(filter) => {
            state.blog.selector.set_category_filter(filter);
        }
    }
    Task::none()
}

fn update_resources(
    state: &mut State,
    message: ResourcesMessage,
) -> Task<Message> {
    let resources = &mut state.resources;
    match message {
        ResourcesMessage::SetCategory(filter) => {
            resources.selector.set_category_filter(filter);
        }
        ResourcesMessage::SetKind(filter) => {
            resources.selector.set_kind_filter(filter);
        }
        ResourcesMessage::SearchChanged(query) => {
            resources.query = query;
        }
    }
    Task::none()
}

fn update_contact(state: &mut State, message: ContactMessage) -> Task<Message> {
    let form = &mut state.contact;
    match message {
        ContactMessage::NameChanged(value) => {
            form.name = value;
            form.clear_rejection();
        }
        ContactMessage::EmailChanged(value) => {
            form.email = value;
            form.clear_rejection();
        }
        ContactMessage::SubjectChanged(value) => {
            form.subject = value;
            form.clear_rejection();
        }
        ContactMessage::BodyChanged(value) => {
            form.body = value;
            form.clear_rejection();
        }
        ContactMessage::Submit => form.submit(),
        ContactMessage::DismissNotice => form.notice = None,
    }
    Task::none()
}
