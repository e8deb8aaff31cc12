//! Contact section: validated message form with outcome banners.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::contact::Notice;
use crate::message::{ContactMessage, Message};
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let form = &state.contact;

    let mut fields = column![
        field("Name", "Your name", &form.name, ContactMessage::NameChanged),
        field(
            "Email",
            "you@example.org",
            &form.email,
            ContactMessage::EmailChanged
        ),
        field(
            "Subject",
            "What is this about?",
            &form.subject,
            ContactMessage::SubjectChanged
        ),
        field(
            "Message",
            "How can we work together?",
            &form.body,
            ContactMessage::BodyChanged
        ),
    ]
    .spacing(20);

    if let Some(notice) = form.notice {
        fields = fields.push(notice_banner(notice));
    }

    fields = fields.push(
        button(
            container(text("Send Message").size(16)).center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(14.0)
        .style(theme::Button::Primary.style())
        .on_press(Message::Contact(ContactMessage::Submit)),
    );

    container(
        column![
            container(
                text("Let's Connect")
                    .size(32)
                    .font(theme::FONT_LIGHT)
            )
            .center_x(Length::Fill),
            container(
                text("Interested in collaboration or advocacy? Reach out today.")
                    .size(17)
                    .color(theme::SiteTheme::TEXT_MUTED)
            )
            .center_x(Length::Fill),
            container(
                container(fields)
                    .padding(32.0)
                    .max_width(640.0)
                    .style(theme::Container::Tinted.style())
            )
            .center_x(Length::Fill),
        ]
        .spacing(24),
    )
    .width(Length::Fill)
    .padding([64.0, 32.0])
    .into()
}

fn field<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    to_message: fn(String) -> ContactMessage,
) -> Element<'a, Message> {
    column![
        text(label).size(15).color(theme::SiteTheme::TEXT_MUTED),
        text_input(placeholder, value)
            .on_input(move |value| Message::Contact(to_message(value)))
            .padding(12.0)
            .size(16)
            .style(theme::form_input()),
    ]
    .spacing(6)
    .into()
}

fn notice_banner(notice: Notice) -> Element<'static, Message> {
    let (style, message) = match notice {
        Notice::Sent => (
            theme::Container::SuccessBox,
            "Thank you! Your message has been sent.".to_string(),
        ),
        Notice::Rejected(error) => {
            (theme::Container::ErrorBox, error.to_string())
        }
    };

    container(
        row![
            text(message).size(15),
            button(text("Dismiss").size(13))
                .padding([2.0, 8.0])
                .style(theme::Button::NavLinkActive.style())
                .on_press(Message::Contact(ContactMessage::DismissNotice)),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(12.0)
    .width(Length::Fill)
    .style(style.style())
    .into()
}
