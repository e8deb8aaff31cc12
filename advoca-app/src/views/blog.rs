//! Blog section: category pills over the excerpt grid, plus the
//! newsletter block.

use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, row, stack, text, text_input,
};
use iced::{Alignment, Element, Length};

use advoca_model::{BlogCategory, Filter, Labeled};

use crate::content::blog;
use crate::message::{BlogMessage, Message};
use crate::state::State;
use crate::theme;
use crate::views::widgets;

pub fn view(state: &State) -> Element<'_, Message> {
    let selector = &state.blog.selector;
    let active = selector.category_filter();

    let mut pills = row![].spacing(12);
    pills = pills.push(widgets::pill(
        "All",
        active.is_all(),
        Message::Blog(BlogMessage::SetCategory(Filter::All)),
    ));
    for &category in BlogCategory::all() {
        pills = pills.push(widgets::pill(
            category.label(),
            active == Filter::Only(category),
            Message::Blog(BlogMessage::SetCategory(Filter::Only(category))),
        ));
    }

    let listing: Element<'_, Message> = if selector.is_empty() {
        widgets::empty_state("No posts in this category yet.")
    } else {
        let mut grid = column![].spacing(24);
        for chunk in selector.view().chunks(3) {
            let mut cards = row![].spacing(24);
            for &index in chunk {
                cards = cards.push(post_card(state, index));
            }
            grid = grid.push(cards);
        }
        grid.into()
    };

    container(
        column![
            widgets::section_heading("Latest Insights"),
            container(pills).center_x(Length::Fill),
            listing,
            newsletter_block(),
        ]
        .spacing(40),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .into()
}

fn post_card(state: &State, index: usize) -> Element<'_, Message> {
    let post = &blog::POSTS[index];

    let banner = stack![
        widgets::asset_image(&state.config, post.image, 180.0),
        container(
            container(text(post.category.label()).size(13))
                .padding([4.0, 12.0])
                .style(theme::Container::Badge.style()),
        )
        .padding(12.0)
        .align_y(Vertical::Top)
        .height(Length::Fixed(180.0))
        .width(Length::Fill),
    ];

    let meta = row![
        text(post.date_label())
            .size(13)
            .color(theme::SiteTheme::TEXT_MUTED),
        text("\u{2022}").size(13).color(theme::SiteTheme::TEXT_MUTED),
        text(post.read_time_label())
            .size(13)
            .color(theme::SiteTheme::TEXT_MUTED),
    ]
    .spacing(8);

    let details = column![
        meta,
        text(post.title).size(18).font(theme::FONT_BOLD),
        text(post.excerpt)
            .size(15)
            .color(theme::SiteTheme::TEXT_MUTED),
        button(
            text("Read More \u{2192}")
                .size(15)
                .color(theme::SiteTheme::PRIMARY)
        )
        .padding(0.0)
        .style(theme::Button::NavLinkActive.style()),
    ]
    .spacing(12);

    container(column![banner, container(details).padding(20.0)])
        .width(Length::FillPortion(1))
        .style(theme::Container::Card.style())
        .into()
}

fn newsletter_block() -> Element<'static, Message> {
    // Decorative: there is no subscription backend.
    let form = row![
        text_input("Enter your email", "")
            .padding(12.0)
            .size(15)
            .style(theme::form_input()),
        button(text("Subscribe").size(15))
            .padding([12.0, 24.0])
            .style(theme::Button::Primary.style()),
    ]
    .spacing(12)
    .width(Length::Fixed(420.0));

    container(
        column![
            text(blog::NEWSLETTER_TITLE).size(24).font(theme::FONT_BOLD),
            text(blog::NEWSLETTER_BODY)
                .size(15)
                .color(theme::SiteTheme::TEXT_MUTED),
            form,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32.0)
    .width(Length::Fill)
    .style(theme::Container::Tinted.style())
    .into()
}
