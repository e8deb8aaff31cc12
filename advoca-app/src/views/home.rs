//! Home page: hero, about, mission, and resume stacked as one long page.

use iced::Element;
use iced::widget::column;

use crate::message::Message;
use crate::state::State;
use crate::views::{about, hero, mission, resume};

pub fn view(state: &State) -> Element<'_, Message> {
    column![
        hero::view(state),
        about::view(state),
        mission::view(),
        resume::view(),
    ]
    .into()
}
