//! About section: image carousel, biography, and advocacy pillars.

use iced::alignment::Vertical;
use iced::widget::{
    column, container, horizontal_space, row, stack, text,
};
use iced::{Alignment, Element, Length};

use crate::content::{about, carousel};
use crate::message::{CarouselMessage, Message};
use crate::state::State;
use crate::theme;
use crate::views::widgets;

const FRAME_HEIGHT: f32 = 480.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let mut section = column![widgets::section_heading("About Me")]
        .spacing(32)
        .padding([64.0, 32.0])
        .align_x(Alignment::Center);

    section = section.push(carousel_frame(state));

    let mut prose = column![
        container(
            text(about::HEADLINE)
                .size(28)
                .font(theme::FONT_LIGHT)
                .color(theme::SiteTheme::PRIMARY)
        )
        .center_x(Length::Fill),
    ]
    .spacing(24)
    .max_width(880.0);

    for paragraph in about::LEAD_PARAGRAPHS {
        prose = prose.push(paragraph_text(paragraph));
    }
    prose = prose.push(pillar_grid());
    for paragraph in about::CLOSING_PARAGRAPHS {
        prose = prose.push(paragraph_text(paragraph));
    }

    section.push(prose).width(Length::Fill).into()
}

fn paragraph_text(paragraph: &'static str) -> Element<'static, Message> {
    text(paragraph)
        .size(17)
        .color(theme::SiteTheme::INK)
        .into()
}

// Single displayed image with overlaid caption and prev/next controls,
// followed by one selectable dot per image.
fn carousel_frame(state: &State) -> Element<'_, Message> {
    let selector = &state.about.carousel;

    let Some(index) = selector.current_index() else {
        return widgets::empty_state("No photos to show yet.");
    };
    let image = &carousel::IMAGES[index];

    let caption = container(
        container(text(image.caption).size(18))
            .center_x(Length::Fill)
            .padding(12.0)
            .style(theme::Container::CaptionBar.style()),
    )
    .align_y(Vertical::Bottom)
    .height(Length::Fixed(FRAME_HEIGHT))
    .width(Length::Fill);

    let controls = container(
        row![
            widgets::arrow(
                "\u{2039}",
                selector
                    .has_multiple()
                    .then_some(Message::About(CarouselMessage::Previous)),
            ),
            horizontal_space(),
            widgets::arrow(
                "\u{203A}",
                selector
                    .has_multiple()
                    .then_some(Message::About(CarouselMessage::Next)),
            ),
        ]
        .align_y(Alignment::Center),
    )
    .center_y(Length::Fixed(FRAME_HEIGHT))
    .width(Length::Fill)
    .padding([0.0, 12.0]);

    let frame = stack![
        widgets::asset_image(&state.config, image.path, FRAME_HEIGHT),
        caption,
        controls,
    ];

    column![
        container(frame).max_width(760.0),
        widgets::dot_row(selector.len(), selector.cursor(), |position| {
            Message::About(CarouselMessage::Select(position))
        }),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

// Two-by-two grid of advocacy principle cards.
fn pillar_grid() -> Element<'static, Message> {
    let mut grid = column![].spacing(24);
    for pair in about::PILLARS.chunks(2) {
        let mut cards = row![].spacing(24);
        for pillar in pair {
            cards = cards.push(
                container(
                    column![
                        text(pillar.icon).size(32),
                        text(pillar.title)
                            .size(20)
                            .font(theme::FONT_LIGHT)
                            .color(theme::SiteTheme::TEXT_LIGHT),
                        text(pillar.summary)
                            .size(15)
                            .color(theme::SiteTheme::TEXT_LIGHT),
                    ]
                    .spacing(12)
                    .align_x(Alignment::Center),
                )
                .padding(28.0)
                .width(Length::FillPortion(1))
                .style(theme::Container::Accent.style()),
            );
        }
        grid = grid.push(cards);
    }
    grid.into()
}
