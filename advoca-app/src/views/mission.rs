//! Mission section: intro statement and three long-form essays.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::content::mission;
use crate::message::Message;
use crate::theme;

pub fn view() -> Element<'static, Message> {
    let heading = container(
        text("Mission")
            .size(40)
            .font(theme::FONT_LIGHT)
            .color(theme::SiteTheme::TEXT_LIGHT),
    )
    .center_x(Length::Fill);

    let intro = container(
        text(mission::INTRO)
            .size(24)
            .font(theme::FONT_LIGHT)
            .color(theme::SiteTheme::TEXT_LIGHT),
    )
    .center_x(Length::Fill)
    .max_width(760.0);

    let mut cards = column![].spacing(40).max_width(960.0);
    for statement in mission::STATEMENTS {
        let mut body = column![
            row![
                text(statement.icon).size(32),
                text(statement.title)
                    .size(30)
                    .font(theme::FONT_LIGHT)
                    .color(theme::SiteTheme::TEXT_LIGHT),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ]
        .spacing(20);
        for paragraph in statement.paragraphs() {
            body = body.push(
                text(paragraph).size(17).color(theme::SiteTheme::TEXT_LIGHT),
            );
        }
        cards = cards.push(
            container(body)
                .padding(40.0)
                .width(Length::Fill)
                .style(theme::Container::Glass.style()),
        );
    }

    container(
        column![heading, intro, cards]
            .spacing(48)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .style(theme::Container::Mission.style())
    .into()
}
