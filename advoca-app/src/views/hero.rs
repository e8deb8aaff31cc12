//! Landing hero: portrait, title, and the journey CTA.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::content::site;
use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views::widgets;

pub fn view(state: &State) -> Element<'_, Message> {
    let portrait = container(widgets::asset_image(
        &state.config,
        site::HERO_PORTRAIT,
        520.0,
    ))
    .width(Length::FillPortion(1));

    let copy = column![
        text(site::CREDENTIALS)
            .size(24)
            .font(theme::FONT_LIGHT)
            .color(theme::SiteTheme::TEXT_LIGHT),
        text(site::HEADLINE)
            .size(44)
            .font(theme::FONT_LIGHT)
            .color(theme::SiteTheme::TEXT_LIGHT),
        button(text(site::HERO_CTA).size(18))
            .padding([14.0, 28.0])
            .style(theme::Button::Primary.style())
            .on_press(Message::StartJourney),
    ]
    .spacing(28)
    .max_width(560.0);

    container(
        row![
            portrait,
            container(copy)
                .width(Length::FillPortion(1))
                .center_y(Length::Fixed(520.0))
        ]
        .spacing(48),
    )
    .width(Length::Fill)
    .padding([48.0, 32.0])
    .style(theme::Container::Hero.style())
    .into()
}
