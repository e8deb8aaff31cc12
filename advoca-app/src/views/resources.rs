//! Resource library: search, two filter dimensions, and the download grid.

use iced::widget::{
    button, column, container, row, stack, text, text_input,
};
use iced::{Alignment, Element, Length};

use advoca_model::{Filter, Labeled, ResourceCategory, ResourceKind};

use crate::content::resources;
use crate::message::{Message, ResourcesMessage};
use crate::state::State;
use crate::theme;
use crate::views::widgets;

pub fn view(state: &State) -> Element<'_, Message> {
    let selector = &state.resources.selector;

    let search = container(
        text_input("Search resources...", &state.resources.query)
            .on_input(|query| {
                Message::Resources(ResourcesMessage::SearchChanged(query))
            })
            .padding(12.0)
            .size(16)
            .style(theme::form_input()),
    )
    .max_width(560.0);

    let active_category = selector.category_filter();
    let mut category_pills = row![].spacing(8);
    category_pills = category_pills.push(widgets::pill(
        "All",
        active_category.is_all(),
        Message::Resources(ResourcesMessage::SetCategory(Filter::All)),
    ));
    for &category in ResourceCategory::all() {
        category_pills = category_pills.push(widgets::pill(
            category.label(),
            active_category == Filter::Only(category),
            Message::Resources(ResourcesMessage::SetCategory(Filter::Only(
                category,
            ))),
        ));
    }

    let active_kind = selector.kind_filter();
    let mut kind_pills = row![].spacing(8);
    kind_pills = kind_pills.push(widgets::pill(
        "All",
        active_kind.is_all(),
        Message::Resources(ResourcesMessage::SetKind(Filter::All)),
    ));
    for &kind in ResourceKind::all() {
        kind_pills = kind_pills.push(widgets::pill(
            kind.label(),
            active_kind == Filter::Only(kind),
            Message::Resources(ResourcesMessage::SetKind(Filter::Only(kind))),
        ));
    }

    let visible = state.resources.visible();
    let listing: Element<'_, Message> = if visible.is_empty() {
        widgets::empty_state("No resources match the current filters.")
    } else {
        let mut grid = column![].spacing(24);
        for chunk in visible.chunks(3) {
            let mut cards = row![].spacing(24);
            for &index in chunk {
                cards = cards.push(resource_card(state, index));
            }
            grid = grid.push(cards);
        }
        grid.into()
    };

    container(
        column![
            widgets::section_heading("Resource Library"),
            container(search).center_x(Length::Fill),
            container(
                row![category_pills, kind_pills]
                    .spacing(24)
                    .align_y(Alignment::Center)
            )
            .center_x(Length::Fill),
            listing,
            request_block(),
        ]
        .spacing(32),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .style(theme::Container::Tinted.style())
    .into()
}

fn resource_card(state: &State, index: usize) -> Element<'_, Message> {
    let resource = &resources::RESOURCES[index];

    let banner = stack![
        widgets::asset_image(&state.config, resource.thumbnail, 180.0),
        container(
            container(text(resource.kind.badge()).size(13))
                .padding([4.0, 12.0])
                .style(theme::Container::Badge.style()),
        )
        .padding(12.0)
        .align_x(iced::alignment::Horizontal::Right)
        .width(Length::Fill),
    ];

    let meta = row![
        text(resource.category.label())
            .size(13)
            .color(theme::SiteTheme::TEXT_MUTED),
        text("\u{2022}").size(13).color(theme::SiteTheme::TEXT_MUTED),
        text(resource.date).size(13).color(theme::SiteTheme::TEXT_MUTED),
    ]
    .spacing(8);

    let details = column![
        meta,
        text(resource.title).size(18).font(theme::FONT_BOLD),
        text(resource.description)
            .size(15)
            .color(theme::SiteTheme::TEXT_MUTED),
        button(text("Download").size(15))
            .padding([10.0, 24.0])
            .style(theme::Button::Primary.style()),
    ]
    .spacing(12);

    container(column![banner, container(details).padding(20.0)])
        .width(Length::FillPortion(1))
        .style(theme::Container::Card.style())
        .into()
}

fn request_block() -> Element<'static, Message> {
    container(
        column![
            text(resources::REQUEST_TITLE).size(24).font(theme::FONT_BOLD),
            text(resources::REQUEST_BODY)
                .size(15)
                .color(theme::SiteTheme::TEXT_MUTED),
            button(text(resources::REQUEST_CTA).size(15))
                .padding([12.0, 32.0])
                .style(theme::Button::Primary.style()),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32.0)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}
