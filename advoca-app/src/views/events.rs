//! Events section: phase tabs over a card grid, plus the calendar block.

use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Element, Length};

use advoca_model::{EventPhase, Filter, Labeled};

use crate::content::events;
use crate::message::{EventsMessage, Message};
use crate::state::State;
use crate::theme;
use crate::views::widgets;

pub fn view(state: &State) -> Element<'_, Message> {
    let selector = &state.events.selector;

    let mut tabs = row![].spacing(16);
    for &phase in EventPhase::all() {
        tabs = tabs.push(widgets::pill(
            format!("{} Events", phase.label()),
            selector.category_filter() == Filter::Only(phase),
            Message::Events(EventsMessage::SetPhase(phase)),
        ));
    }

    let listing: Element<'_, Message> = if selector.is_empty() {
        widgets::empty_state("No events in this tab right now.")
    } else {
        let mut grid = column![].spacing(24);
        for chunk in selector.view().chunks(3) {
            let mut cards = row![].spacing(24);
            for &index in chunk {
                cards = cards.push(event_card(state, index));
            }
            grid = grid.push(cards);
        }
        grid.into()
    };

    container(
        column![
            widgets::section_heading("Events & Workshops"),
            container(tabs).center_x(Length::Fill),
            listing,
            calendar_block(),
        ]
        .spacing(40),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .style(theme::Container::Tinted.style())
    .into()
}

fn event_card(state: &State, index: usize) -> Element<'_, Message> {
    let event = &events::EVENTS[index];

    let banner = stack![
        widgets::asset_image(&state.config, event.image, 180.0),
        container(
            container(
                column![
                    text(event.date_label()).size(13),
                    text(event.title).size(18).font(theme::FONT_BOLD),
                ]
                .spacing(4)
            )
            .padding(12.0)
            .width(Length::Fill)
            .style(theme::Container::CaptionBar.style()),
        )
        .align_y(Vertical::Bottom)
        .height(Length::Fixed(180.0))
        .width(Length::Fill),
    ];

    let meta = row![
        text(event.time).size(13).color(theme::SiteTheme::TEXT_MUTED),
        text(event.location)
            .size(13)
            .color(theme::SiteTheme::TEXT_MUTED),
    ]
    .spacing(16);

    let mut details = column![
        meta,
        text(event.description)
            .size(15)
            .color(theme::SiteTheme::TEXT_MUTED),
    ]
    .spacing(12);

    // Past events carry no registration link, so the control is absent
    // rather than disabled.
    if event.registration.is_some() {
        details = details.push(
            button(text("Register Now").size(15))
                .padding([10.0, 24.0])
                .style(theme::Button::Primary.style()),
        );
    }

    container(column![banner, container(details).padding(20.0)])
        .width(Length::FillPortion(1))
        .style(theme::Container::Card.style())
        .into()
}

fn calendar_block() -> Element<'static, Message> {
    let actions = row![
        button(text("Google Calendar").size(15))
            .padding([10.0, 24.0])
            .style(theme::Button::Primary.style()),
        button(text("iCal").size(15))
            .padding([10.0, 24.0])
            .style(theme::Button::Primary.style()),
    ]
    .spacing(16);

    container(
        column![
            text(events::CALENDAR_TITLE).size(24).font(theme::FONT_BOLD),
            text(events::CALENDAR_BODY)
                .size(15)
                .color(theme::SiteTheme::TEXT_MUTED),
            actions,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32.0)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}
