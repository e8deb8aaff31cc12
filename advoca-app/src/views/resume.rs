//! Resume section rendered as the three printed pages of the source resume.

use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use advoca_model::Experience;

use crate::content::resume;
use crate::message::Message;
use crate::theme;
use crate::views::widgets;

pub fn view() -> Element<'static, Message> {
    let pages = column![page_one(), page_two(), page_three()]
        .spacing(40)
        .max_width(880.0);

    container(
        column![widgets::section_heading("Full Resume"), pages]
            .spacing(40)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .style(theme::Container::Tinted.style())
    .into()
}

fn page(content: iced::widget::Column<'static, Message>) -> Element<'static, Message> {
    container(content.spacing(20))
        .padding(40.0)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
}

fn heading(label: &'static str) -> Element<'static, Message> {
    text(label)
        .size(18)
        .font(theme::FONT_BOLD)
        .color(theme::SiteTheme::PRIMARY)
        .into()
}

fn bullet_list(items: &'static [&'static str]) -> Element<'static, Message> {
    let mut list = column![].spacing(4);
    for item in items {
        list = list.push(
            row![
                text("\u{2022}").size(14).color(theme::SiteTheme::TEXT_MUTED),
                text(*item).size(14).color(theme::SiteTheme::TEXT_MUTED),
            ]
            .spacing(8),
        );
    }
    list.into()
}

fn experience(entry: &'static Experience) -> Element<'static, Message> {
    column![
        row![
            column![
                text(entry.role).size(15).font(theme::FONT_BOLD),
                text(entry.organization)
                    .size(14)
                    .font(theme::FONT_ITALIC)
                    .color(theme::SiteTheme::TEXT_MUTED),
            ]
            .spacing(2),
            horizontal_space(),
            column![
                text(entry.location)
                    .size(13)
                    .color(theme::SiteTheme::TEXT_MUTED),
                text(entry.span).size(13).color(theme::SiteTheme::TEXT_MUTED),
            ]
            .spacing(2)
            .align_x(Alignment::End),
        ],
        bullet_list(entry.bullets),
    ]
    .spacing(10)
    .into()
}

fn page_one() -> Element<'static, Message> {
    let profile = &resume::PROFILE;
    let identity = column![
        text(profile.name).size(26).font(theme::FONT_BOLD),
        text(profile.headline.to_uppercase())
            .size(13)
            .color(theme::SiteTheme::TEXT_MUTED),
        text(format!(
            "{} | {} | {}",
            profile.phone, profile.email, profile.locality
        ))
        .size(13)
        .color(theme::SiteTheme::TEXT_MUTED),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let summary = text(profile.summary)
        .size(14)
        .font(theme::FONT_ITALIC)
        .color(theme::SiteTheme::TEXT_MUTED);

    let skills = row![
        bullet_list(resume::SKILLS_LEFT),
        bullet_list(resume::SKILLS_RIGHT),
    ]
    .spacing(32);

    page(column![
        container(identity).center_x(Length::Fill),
        summary,
        skills,
        heading("EXPERIENCE"),
        experience(&resume::EXPERIENCES[0]),
        experience(&resume::EXPERIENCES[1]),
    ])
}

fn page_two() -> Element<'static, Message> {
    page(column![
        heading("EXPERIENCE (CONTINUED)"),
        experience(&resume::EXPERIENCES[2]),
        experience(&resume::EXPERIENCES[3]),
        experience(&resume::EXPERIENCES[4]),
    ])
}

fn page_three() -> Element<'static, Message> {
    let mut education = column![].spacing(12);
    for entry in resume::EDUCATION {
        education = education.push(
            column![
                text(entry.degree).size(14).font(theme::FONT_BOLD),
                text(entry.school)
                    .size(14)
                    .font(theme::FONT_ITALIC)
                    .color(theme::SiteTheme::TEXT_MUTED),
            ]
            .spacing(2),
        );
    }

    page(column![
        experience(&resume::EXPERIENCES[5]),
        heading("EDUCATION"),
        education,
        heading("CERTIFICATIONS"),
        bullet_list(resume::CERTIFICATIONS),
        heading("COURSEWORK"),
        text(resume::COURSEWORK).size(14).color(theme::SiteTheme::TEXT_MUTED),
        heading("REFERENCES"),
        text(resume::REFERENCES).size(14).color(theme::SiteTheme::TEXT_MUTED),
        heading("LANGUAGES"),
        text(resume::LANGUAGES).size(14).color(theme::SiteTheme::TEXT_MUTED),
    ])
}
