//! Small view helpers shared across sections.

use iced::widget::text::IntoFragment;
use iced::widget::{Space, button, container, image, row, text};
use iced::{ContentFit, Element, Length};

use crate::config::SiteConfig;
use crate::message::Message;
use crate::theme;

/// Large centered section heading.
pub fn section_heading(title: &'static str) -> Element<'static, Message> {
    container(
        text(title)
            .size(40)
            .font(theme::FONT_LIGHT)
            .color(theme::SiteTheme::PRIMARY),
    )
    .center_x(Length::Fill)
    .into()
}

/// Rounded filter chip; the active chip is filled with the accent color.
pub fn pill<'a>(
    label: impl IntoFragment<'a>,
    active: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let style = if active {
        theme::Button::PillActive
    } else {
        theme::Button::Pill
    };
    button(text(label).size(15))
        .on_press(on_press)
        .padding([8.0, 20.0])
        .style(style.style())
        .into()
}

/// Round prev/next control. Without a message the control renders in its
/// disabled state and accepts no input.
pub fn arrow(
    glyph: &'static str,
    on_press: Option<Message>,
) -> Element<'static, Message> {
    let mut control = button(
        container(text(glyph).size(20).color(theme::SiteTheme::PRIMARY))
            .center_x(Length::Fixed(24.0)),
    )
    .padding(6.0)
    .style(theme::Button::Arrow.style());
    if let Some(message) = on_press {
        control = control.on_press(message);
    }
    control.into()
}

/// Row of position dots; pressing a dot jumps to that position.
pub fn dot_row(
    count: usize,
    active: usize,
    to_message: fn(usize) -> Message,
) -> Element<'static, Message> {
    let mut dots = row![].spacing(8);
    for index in 0..count {
        let style = if index == active {
            theme::Button::DotActive
        } else {
            theme::Button::Dot
        };
        dots = dots.push(
            button(Space::new(Length::Fixed(10.0), Length::Fixed(10.0)))
                .padding(0.0)
                .style(style.style())
                .on_press(to_message(index)),
        );
    }
    dots.into()
}

/// Centered muted message for views whose filtered content is empty.
pub fn empty_state(message: &'static str) -> Element<'static, Message> {
    container(text(message).size(18).color(theme::SiteTheme::TEXT_MUTED))
        .center_x(Length::Fill)
        .padding(48.0)
        .into()
}

/// Image loaded from the configured asset directory, cropped to fill.
pub fn asset_image(
    config: &SiteConfig,
    path: &str,
    height: f32,
) -> Element<'static, Message> {
    image(image::Handle::from_path(config.asset(path)))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover)
        .into()
}
