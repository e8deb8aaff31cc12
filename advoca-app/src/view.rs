//! Root-level view composition.

use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{Section, State};
use crate::theme;
use crate::views;

/// Identifier of the page scrollable, used for programmatic scrolling.
pub(crate) const PAGE_SCROLL_ID: &str = "advoca-page";

pub fn view(state: &State) -> Element<'_, Message> {
    let body = match state.section {
        Section::Home => views::home::view(state),
        Section::Events => views::events::view(state),
        Section::Blog => views::blog::view(state),
        Section::Resources => views::resources::view(state),
        Section::Testimonials => views::testimonials::view(state),
        Section::Contact => views::contact::view(state),
    };

    let page = scrollable(column![body, views::footer::view()])
        .id(scrollable::Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    container(column![views::header::view(state), page])
        .style(theme::Container::Page.style())
        .into()
}
