//! Site palette and widget styles.
//!
//! A steel-blue accent over a light page, with a near-black hero and
//! footer.

use iced::{
    Background, Border, Color, Font, Shadow, Theme, Vector, font, theme,
    widget::{button, container, text_input},
};

/// Default face at bold weight, for headings and resume roles.
pub const FONT_BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Default face at light weight, for display headings.
pub const FONT_LIGHT: Font = Font {
    weight: font::Weight::Light,
    ..Font::DEFAULT
};

/// Italic face for resume organizations and the summary line.
pub const FONT_ITALIC: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

/// Light theme with steel-blue accents.
#[derive(Debug, Clone, Copy)]
pub struct SiteTheme;

impl SiteTheme {
    // Core colors
    pub const PRIMARY: Color = Color::from_rgb(0.176, 0.435, 0.671); // #2D6FAB
    pub const PRIMARY_HOVER: Color = Color::from_rgb(0.118, 0.306, 0.478); // #1E4E7A
    pub const SKY: Color = Color::from_rgb(0.569, 0.722, 0.863); // #91B8DC
    pub const SKY_DEEP: Color = Color::from_rgb(0.482, 0.639, 0.788); // #7BA3C9

    // Surfaces
    pub const PAGE: Color = Color::WHITE;
    pub const MIST: Color = Color::from_rgb(0.914, 0.914, 0.929); // #E9E9ED
    pub const HERO: Color = Color::from_rgb(0.102, 0.102, 0.180); // #1A1A2E
    pub const FOOTER: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827

    // Text colors
    pub const INK: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563
    pub const TEXT_FAINT: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF
    pub const TEXT_LIGHT: Color = Color::WHITE;

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.086, 0.639, 0.290); // #16A34A
    pub const ERROR: Color = Color::from_rgb(0.863, 0.149, 0.149); // #DC2626

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::PAGE;
        palette.text = Self::INK;
        palette.primary = Self::PRIMARY;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Advoca Light".to_string(), palette)
    }
}

// Container styles using closures
#[derive(Debug)]
pub enum Container {
    /// Plain page surface.
    Page,
    /// Near-black hero and testimonial-quote backdrop.
    Hero,
    /// White card with a soft shadow.
    Card,
    /// Light gray panel (form background, alternate sections).
    Tinted,
    /// Steel-blue panel (mission cards, pillar cards).
    Accent,
    /// Translucent black strip over carousel images.
    CaptionBar,
    /// Small rounded label on cards.
    Badge,
    /// Sky-blue navigation bar.
    Header,
    /// Deep blue mission-section backdrop.
    Mission,
    /// Translucent card over the mission backdrop.
    Glass,
    /// Dark site footer.
    Footer,
    ErrorBox,
    SuccessBox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                text_color: Some(SiteTheme::INK),
                background: Some(Background::Color(SiteTheme::PAGE)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Hero => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::HERO)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Card => |_| container::Style {
                text_color: Some(SiteTheme::INK),
                background: Some(Background::Color(SiteTheme::PAGE)),
                border: Border {
                    color: SiteTheme::MIST,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.176, 0.435, 0.671, 0.25),
                    offset: Vector::new(0.0, 8.0),
                    blur_radius: 32.0,
                },
            },
            Container::Tinted => |_| container::Style {
                text_color: Some(SiteTheme::INK),
                background: Some(Background::Color(SiteTheme::MIST)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Accent => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::SKY_DEEP)),
                border: Border {
                    color: Color::from_rgba(0.176, 0.435, 0.671, 0.2),
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.176, 0.435, 0.671, 0.4),
                    offset: Vector::new(0.0, 10.0),
                    blur_radius: 40.0,
                },
            },
            Container::CaptionBar => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(Color::from_rgba(
                    0.0, 0.0, 0.0, 0.5,
                ))),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Badge => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::PRIMARY)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Header => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::SKY)),
                border: Border::default(),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 10.0,
                },
            },
            Container::Mission => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::PRIMARY_HOVER)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Glass => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(Color::from_rgba(
                    1.0, 1.0, 1.0, 0.08,
                ))),
                border: Border {
                    color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                    offset: Vector::new(0.0, 10.0),
                    blur_radius: 25.0,
                },
            },
            Container::Footer => |_| container::Style {
                text_color: Some(SiteTheme::TEXT_LIGHT),
                background: Some(Background::Color(SiteTheme::FOOTER)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(SiteTheme::ERROR),
                background: Some(Background::Color(Color::from_rgba(
                    0.863, 0.149, 0.149, 0.08,
                ))),
                border: Border {
                    color: SiteTheme::ERROR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::SuccessBox => |_| container::Style {
                text_color: Some(SiteTheme::SUCCESS),
                background: Some(Background::Color(Color::from_rgba(
                    0.086, 0.639, 0.290, 0.08,
                ))),
                border: Border {
                    color: SiteTheme::SUCCESS,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles using closures
#[derive(Debug)]
pub enum Button {
    /// Solid steel-blue call to action.
    Primary,
    /// Inactive filter chip.
    Pill,
    /// Selected filter chip.
    PillActive,
    /// Header navigation link.
    NavLink,
    /// Header navigation link for the visible section.
    NavLinkActive,
    /// Round prev/next control over a carousel.
    Arrow,
    /// Inactive position dot under a carousel.
    Dot,
    /// Position dot for the displayed item.
    DotActive,
    /// Footer quick link.
    FooterLink,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SiteTheme::PRIMARY_HOVER
                    }
                    button::Status::Disabled => SiteTheme::SKY,
                    button::Status::Active => SiteTheme::PRIMARY,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: SiteTheme::TEXT_LIGHT,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Pill => |_, status| {
                let hovered = matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                );
                button::Style {
                    background: Some(Background::Color(if hovered {
                        SiteTheme::PRIMARY
                    } else {
                        SiteTheme::PAGE
                    })),
                    text_color: if hovered {
                        SiteTheme::TEXT_LIGHT
                    } else {
                        SiteTheme::TEXT_MUTED
                    },
                    border: Border {
                        color: SiteTheme::MIST,
                        width: 1.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::PillActive => |_, _| button::Style {
                background: Some(Background::Color(SiteTheme::PRIMARY)),
                text_color: SiteTheme::TEXT_LIGHT,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
            },
            Button::NavLink => |_, status| button::Style {
                background: None,
                text_color: match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SiteTheme::PRIMARY
                    }
                    _ => SiteTheme::TEXT_LIGHT,
                },
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Button::NavLinkActive => |_, _| button::Style {
                background: None,
                text_color: SiteTheme::PRIMARY,
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Button::Arrow => |_, status| button::Style {
                background: Some(Background::Color(match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::WHITE
                    }
                    button::Status::Disabled => {
                        Color::from_rgba(1.0, 1.0, 1.0, 0.4)
                    }
                    button::Status::Active => {
                        Color::from_rgba(1.0, 1.0, 1.0, 0.8)
                    }
                })),
                text_color: SiteTheme::PRIMARY,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
            },
            Button::Dot => |_, _| button::Style {
                background: Some(Background::Color(SiteTheme::TEXT_FAINT)),
                text_color: Color::TRANSPARENT,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
            },
            Button::DotActive => |_, _| button::Style {
                background: Some(Background::Color(SiteTheme::PRIMARY)),
                text_color: Color::TRANSPARENT,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
            },
            Button::FooterLink => |_, status| button::Style {
                background: None,
                text_color: match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        SiteTheme::TEXT_LIGHT
                    }
                    _ => SiteTheme::TEXT_FAINT,
                },
                border: Border::default(),
                shadow: Shadow::default(),
            },
        }
    }
}

/// Style for form and search inputs.
pub fn form_input() -> fn(&Theme, text_input::Status) -> text_input::Style {
    |_, status| {
        let border_color = match status {
            text_input::Status::Focused => SiteTheme::PRIMARY,
            text_input::Status::Hovered => SiteTheme::SKY_DEEP,
            _ => SiteTheme::MIST,
        };
        text_input::Style {
            background: Background::Color(SiteTheme::PAGE),
            border: Border {
                color: border_color,
                width: if matches!(status, text_input::Status::Focused) {
                    2.0
                } else {
                    1.0
                },
                radius: 6.0.into(),
            },
            icon: SiteTheme::TEXT_FAINT,
            placeholder: SiteTheme::TEXT_FAINT,
            value: SiteTheme::INK,
            selection: SiteTheme::SKY,
        }
    }
}
