//! Testimonial section: the auto-advancing quote rotator.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::content::testimonials;
use crate::message::{Message, RotatorMessage};
use crate::state::State;
use crate::theme;
use crate::views::widgets;

pub fn view(state: &State) -> Element<'_, Message> {
    let rotator = &state.testimonials.rotator;

    let quote: Element<'_, Message> = match rotator.current_index() {
        Some(index) => quote_card(state, index),
        None => widgets::empty_state("No testimonials to show yet."),
    };

    let controls = container(
        row![
            widgets::arrow(
                "\u{2039}",
                rotator
                    .has_multiple()
                    .then_some(Message::Testimonials(RotatorMessage::Previous)),
            ),
            widgets::dot_row(rotator.len(), rotator.cursor(), |position| {
                Message::Testimonials(RotatorMessage::Select(position))
            }),
            widgets::arrow(
                "\u{203A}",
                rotator
                    .has_multiple()
                    .then_some(Message::Testimonials(RotatorMessage::Next)),
            ),
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .center_x(Length::Fill);

    container(
        column![
            widgets::section_heading("What People Say"),
            container(quote).center_x(Length::Fill),
            controls,
            share_block(),
        ]
        .spacing(40),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .into()
}

fn quote_card(state: &State, index: usize) -> Element<'_, Message> {
    let testimonial = &testimonials::TESTIMONIALS[index];

    let portrait = container(widgets::asset_image(
        &state.config,
        testimonial.portrait,
        180.0,
    ))
    .width(Length::Fixed(180.0));

    let words = column![
        text("\u{201C}").size(40).color(theme::SiteTheme::PRIMARY),
        text(testimonial.quote).size(18),
        column![
            text(testimonial.name).size(18).font(theme::FONT_BOLD),
            text(testimonial.attribution())
                .size(15)
                .color(theme::SiteTheme::TEXT_MUTED),
        ]
        .spacing(2),
    ]
    .spacing(16);

    container(
        row![portrait, words]
            .spacing(32)
            .align_y(Alignment::Center),
    )
    .padding(40.0)
    .max_width(880.0)
    .style(theme::Container::Tinted.style())
    .into()
}

fn share_block() -> Element<'static, Message> {
    container(
        column![
            text(testimonials::SHARE_TITLE)
                .size(24)
                .font(theme::FONT_BOLD),
            text(testimonials::SHARE_BODY)
                .size(15)
                .color(theme::SiteTheme::TEXT_MUTED),
            button(text(testimonials::SHARE_CTA).size(15))
                .padding([12.0, 32.0])
                .style(theme::Button::Primary.style()),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32.0)
    .width(Length::Fill)
    .into()
}
