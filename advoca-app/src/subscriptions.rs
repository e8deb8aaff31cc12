//! Root-level subscription composition.

use iced::Subscription;

use crate::message::{Message, RotatorMessage};
use crate::state::{Section, State};

/// Composes all recurring subscriptions into a single batch.
///
/// The autoplay timer exists only while the testimonial section is mounted
/// and still autoplaying; as soon as either stops being true this function
/// stops returning it and the runtime cancels the pending timer.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if state.section == Section::Testimonials
        && state.testimonials.rotator.is_autoplaying()
    {
        subscriptions.push(
            iced::time::every(state.config.autoplay_interval())
                .map(|_| Message::Testimonials(RotatorMessage::AutoplayTick)),
        );
    }

    Subscription::batch(subscriptions)
}
