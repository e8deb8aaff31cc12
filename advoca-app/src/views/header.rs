//! Fixed navigation bar with a collapsible quick-link menu.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::content::site;
use crate::message::Message;
use crate::state::{Section, State};
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let brand = text(site::NAME)
        .size(20)
        .font(theme::FONT_LIGHT)
        .color(theme::SiteTheme::TEXT_LIGHT);

    let mut links = row![].spacing(28).align_y(Alignment::Center);
    for &section in Section::all() {
        links = links.push(nav_link(section, state.section == section));
    }

    let menu_toggle = button(text("\u{2630}").size(20))
        .padding([4.0, 8.0])
        .style(theme::Button::NavLink.style())
        .on_press(Message::ToggleMenu);

    let bar = row![brand, horizontal_space(), links, menu_toggle]
        .spacing(24)
        .align_y(Alignment::Center);

    let mut header = column![
        container(bar)
            .padding([16.0, 32.0])
            .width(Length::Fill)
            .style(theme::Container::Header.style()),
    ];

    if state.menu_open {
        let mut menu = column![].spacing(4).padding([8.0, 32.0]);
        for &section in Section::all() {
            menu = menu.push(nav_link(section, state.section == section));
        }
        header = header.push(
            container(menu)
                .width(Length::Fill)
                .style(theme::Container::Header.style()),
        );
    }

    header.into()
}

fn nav_link(section: Section, active: bool) -> Element<'static, Message> {
    let style = if active {
        theme::Button::NavLinkActive
    } else {
        theme::Button::NavLink
    };
    button(text(section.label()).size(16))
        .padding([4.0, 4.0])
        .style(style.style())
        .on_press(Message::Navigate(section))
        .into()
}
