//! Application assembly: settings, window, and the iced run loop.

use iced::{Font, Settings, Size, Task};

use crate::config::SiteConfig;
use crate::state::State;
use crate::{subscriptions, theme, update, view};

/// Build and run the application with the provided configuration.
pub fn run(config: SiteConfig) -> iced::Result {
    let window = iced::window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(480.0, 360.0)),
        resizable: true,
        decorations: true,
        ..Default::default()
    };

    iced::application(
        "Robert A. Sanchez | Patient Advocate",
        update::update,
        view::view,
    )
    .settings(default_settings())
    .subscription(subscriptions::subscription)
    .theme(|_state| theme::SiteTheme::theme())
    .window(window)
    .run_with(move || (State::new(config.clone()), Task::none()))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("advoca".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}
