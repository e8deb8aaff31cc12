//! Message-driven flows exercised through the public update surface.

use advoca_app::config::SiteConfig;
use advoca_app::contact::{FormError, Notice};
use advoca_app::message::{
    BlogMessage, CarouselMessage, ContactMessage, EventsMessage, Message,
    ResourcesMessage, RotatorMessage,
};
use advoca_app::selection::AutoplayState;
use advoca_app::state::{Section, State};
use advoca_app::update::update;
use advoca_model::{BlogCategory, EventPhase, Filter, ResourceKind};

fn new_state() -> State {
    State::new(SiteConfig::default())
}

fn send(state: &mut State, message: Message) {
    let _task = update(state, message);
}

#[test]
fn carousel_previous_from_start_wraps_to_last() {
    let mut state = new_state();
    assert_eq!(state.about.carousel.len(), 12);

    send(&mut state, Message::About(CarouselMessage::Previous));
    assert_eq!(state.about.carousel.current_index(), Some(11));

    send(&mut state, Message::About(CarouselMessage::Next));
    assert_eq!(state.about.carousel.current_index(), Some(0));
}

#[test]
fn carousel_dots_jump_and_ignore_bad_targets() {
    let mut state = new_state();
    send(&mut state, Message::About(CarouselMessage::Select(5)));
    assert_eq!(state.about.carousel.current_index(), Some(5));

    send(&mut state, Message::About(CarouselMessage::Select(99)));
    assert_eq!(state.about.carousel.current_index(), Some(5));
}

#[test]
fn autoplay_ticks_advance_until_the_user_interrupts() {
    let mut state = new_state();
    send(&mut state, Message::Navigate(Section::Testimonials));

    send(&mut state, Message::Testimonials(RotatorMessage::AutoplayTick));
    send(&mut state, Message::Testimonials(RotatorMessage::AutoplayTick));
    assert_eq!(state.testimonials.rotator.current_index(), Some(2));
    assert!(state.testimonials.rotator.is_autoplaying());

    // Manual navigation pauses the rotation for good.
    send(&mut state, Message::Testimonials(RotatorMessage::Next));
    assert_eq!(state.testimonials.rotator.current_index(), Some(0));
    assert_eq!(state.testimonials.rotator.autoplay(), AutoplayState::Paused);

    send(&mut state, Message::Testimonials(RotatorMessage::AutoplayTick));
    assert_eq!(state.testimonials.rotator.current_index(), Some(0));
}

#[test]
fn leaving_a_section_resets_its_selection_state() {
    let mut state = new_state();
    send(&mut state, Message::Navigate(Section::Testimonials));
    send(&mut state, Message::Testimonials(RotatorMessage::Next));
    assert_eq!(state.testimonials.rotator.autoplay(), AutoplayState::Paused);

    send(&mut state, Message::Navigate(Section::Home));
    send(&mut state, Message::Navigate(Section::Testimonials));
    assert_eq!(state.testimonials.rotator.current_index(), Some(0));
    assert!(state.testimonials.rotator.is_autoplaying());
}

#[test]
fn event_tabs_swap_the_filtered_listing() {
    let mut state = new_state();
    let upcoming: Vec<usize> = state.events.selector.view().to_vec();
    assert_eq!(upcoming, vec![0, 1]);

    send(
        &mut state,
        Message::Events(EventsMessage::SetPhase(EventPhase::Past)),
    );
    assert_eq!(state.events.selector.view(), &[2]);
    assert_eq!(state.events.selector.cursor(), 0);
    assert_eq!(
        state.events.selector.category_filter(),
        Filter::Only(EventPhase::Past)
    );
}

#[test]
fn blog_filters_narrow_and_widen_the_grid() {
    let mut state = new_state();
    assert_eq!(state.blog.selector.len(), 3);

    send(
        &mut state,
        Message::Blog(BlogMessage::SetCategory(Filter::Only(
            BlogCategory::KidneyHealth,
        ))),
    );
    assert_eq!(state.blog.selector.view(), &[1]);

    // A category with no posts is a valid, empty view.
    send(
        &mut state,
        Message::Blog(BlogMessage::SetCategory(Filter::Only(
            BlogCategory::Advocacy,
        ))),
    );
    assert!(state.blog.selector.is_empty());

    send(
        &mut state,
        Message::Blog(BlogMessage::SetCategory(Filter::All)),
    );
    assert_eq!(state.blog.selector.view(), &[0, 1, 2]);
}

#[test]
fn resource_filters_and_search_compose() {
    let mut state = new_state();
    send(
        &mut state,
        Message::Resources(ResourcesMessage::SetKind(Filter::Only(
            ResourceKind::Pdf,
        ))),
    );
    assert_eq!(state.resources.selector.view(), &[0, 1]);

    send(
        &mut state,
        Message::Resources(ResourcesMessage::SearchChanged(
            "donation".to_string(),
        )),
    );
    assert_eq!(state.resources.visible(), vec![1]);
}

#[test]
fn contact_form_validates_before_accepting() {
    let mut state = new_state();
    send(&mut state, Message::Contact(ContactMessage::Submit));
    assert_eq!(
        state.contact.notice,
        Some(Notice::Rejected(FormError::MissingFields))
    );

    for (field, value) in [
        (ContactMessage::NameChanged as fn(String) -> ContactMessage, "Ada"),
        (ContactMessage::EmailChanged, "not-an-email"),
        (ContactMessage::SubjectChanged, "Hello"),
        (ContactMessage::BodyChanged, "A message."),
    ] {
        send(&mut state, Message::Contact(field(value.to_string())));
    }
    // Editing dismissed the earlier rejection banner.
    assert_eq!(state.contact.notice, None);

    send(&mut state, Message::Contact(ContactMessage::Submit));
    assert_eq!(
        state.contact.notice,
        Some(Notice::Rejected(FormError::InvalidEmail))
    );

    send(
        &mut state,
        Message::Contact(ContactMessage::EmailChanged(
            "ada@example.org".to_string(),
        )),
    );
    send(&mut state, Message::Contact(ContactMessage::Submit));
    assert_eq!(state.contact.notice, Some(Notice::Sent));
    assert!(state.contact.name.is_empty());

    send(&mut state, Message::Contact(ContactMessage::DismissNotice));
    assert_eq!(state.contact.notice, None);
}

#[test]
fn navigation_closes_the_compact_menu() {
    let mut state = new_state();
    send(&mut state, Message::ToggleMenu);
    assert!(state.menu_open);

    send(&mut state, Message::Navigate(Section::Blog));
    assert!(!state.menu_open);
    assert_eq!(state.section, Section::Blog);
}
