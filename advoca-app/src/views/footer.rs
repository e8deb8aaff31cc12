//! Dark site footer: identity, quick links, and contact handles.

use advoca_model::chrono::{Datelike, Local};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use crate::content::site;
use crate::message::Message;
use crate::state::Section;
use crate::theme;

pub fn view() -> Element<'static, Message> {
    let identity = column![
        text(site::NAME).size(18).font(theme::FONT_LIGHT),
        text(site::FOOTER_TAGLINE)
            .size(13)
            .color(theme::SiteTheme::TEXT_FAINT),
    ]
    .spacing(8);

    let mut quick_links = column![text("Quick Links").size(16)].spacing(6);
    for &section in Section::all() {
        quick_links = quick_links.push(
            button(text(section.label()).size(13))
                .padding(0.0)
                .style(theme::Button::FooterLink.style())
                .on_press(Message::Navigate(section)),
        );
    }

    let connect = column![
        text("Connect").size(16),
        text(site::LINKEDIN_URL)
            .size(13)
            .color(theme::SiteTheme::TEXT_FAINT),
        text(site::EMAIL).size(13).color(theme::SiteTheme::TEXT_FAINT),
    ]
    .spacing(6);

    let copyright = container(
        text(format!(
            "\u{00A9} {} {}. All rights reserved.",
            Local::now().year(),
            site::COPYRIGHT_HOLDER
        ))
        .size(13)
        .color(theme::SiteTheme::TEXT_FAINT),
    )
    .center_x(Length::Fill);

    container(
        column![
            row![
                container(identity).width(Length::FillPortion(1)),
                container(quick_links).width(Length::FillPortion(1)),
                container(connect).width(Length::FillPortion(1)),
            ]
            .spacing(32),
            copyright,
        ]
        .spacing(24),
    )
    .width(Length::Fill)
    .padding([40.0, 32.0])
    .style(theme::Container::Footer.style())
    .into()
}
