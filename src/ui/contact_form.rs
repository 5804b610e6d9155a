// SPDX-License-Identifier: MPL-2.0
//! Contact form with client-side validation.
//!
//! Name, email, and message are required; the subject is optional. The email
//! address has to look like `user@host.tld`. There is no backend behind the
//! form: a valid submission clears the fields and shows a thank-you note.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Required fields the form can complain about by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Message,
}

impl Field {
    fn label_key(self) -> &'static str {
        match self {
            Self::Name => "contact-field-name",
            Self::Message => "contact-field-message",
        }
    }
}

/// A reason the form refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required(Field),
    InvalidEmail,
}

impl ValidationError {
    /// Localized, field-naming error text.
    pub fn message(self, i18n: &I18n) -> String {
        match self {
            Self::Required(field) => {
                let field_name = i18n.tr(field.label_key());
                i18n.tr_with_args("contact-error-required", &[("field", &field_name)])
            }
            Self::InvalidEmail => i18n.tr("contact-error-email"),
        }
    }
}

/// Outcome of the last submit attempt, shown inline under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Error(ValidationError),
    Success,
}

/// Form state owned by the application.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub feedback: Option<Feedback>,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Submitted,
}

impl State {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required(Field::Name));
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::Required(Field::Message));
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

/// Process a form message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            dismiss_error(state);
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            dismiss_error(state);
            Event::None
        }
        Message::SubjectChanged(value) => {
            state.subject = value;
            dismiss_error(state);
            Event::None
        }
        Message::MessageChanged(value) => {
            state.message = value;
            dismiss_error(state);
            Event::None
        }
        Message::Submit => match state.validate() {
            Ok(()) => {
                state.clear();
                state.feedback = Some(Feedback::Success);
                Event::Submitted
            }
            Err(error) => {
                state.feedback = Some(Feedback::Error(error));
                Event::None
            }
        },
    }
}

// Typing into any field retracts a stale error; the success note stays
// until the next submit.
fn dismiss_error(state: &mut State) {
    if matches!(state.feedback, Some(Feedback::Error(_))) {
        state.feedback = None;
    }
}

/// Render the contact screen.
pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let email_invalid = matches!(
        state.feedback,
        Some(Feedback::Error(ValidationError::InvalidEmail))
    );

    let mut form = Column::new()
        .spacing(spacing::SM)
        .max_width(560.0)
        .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(labeled_input(
            i18n.tr("contact-name-label"),
            &state.name,
            Message::NameChanged,
            matches!(
                state.feedback,
                Some(Feedback::Error(ValidationError::Required(Field::Name)))
            ),
        ))
        .push(labeled_input(
            i18n.tr("contact-email-label"),
            &state.email,
            Message::EmailChanged,
            email_invalid,
        ))
        .push(labeled_input(
            i18n.tr("contact-subject-label"),
            &state.subject,
            Message::SubjectChanged,
            false,
        ))
        .push(labeled_input(
            i18n.tr("contact-message-label"),
            &state.message,
            Message::MessageChanged,
            matches!(
                state.feedback,
                Some(Feedback::Error(ValidationError::Required(Field::Message)))
            ),
        ));

    match state.feedback {
        Some(Feedback::Error(error)) => {
            form = form.push(
                Container::new(Text::new(error.message(i18n)).size(typography::BODY))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::form_error),
            );
        }
        Some(Feedback::Success) => {
            form = form.push(
                Container::new(Text::new(i18n.tr("contact-success")).size(typography::BODY))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(styles::container::form_success),
            );
        }
        None => {}
    }

    form = form.push(
        button(Text::new(i18n.tr("contact-submit")))
            .on_press(Message::Submit)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
    );

    Container::new(form)
        .width(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .into()
}

fn labeled_input<'a>(
    label: String,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    invalid: bool,
) -> Element<'a, Message> {
    let mut input = text_input("", value).on_input(on_input).padding(spacing::XS);
    input = if invalid {
        input.style(styles::text_input::invalid)
    } else {
        input.style(styles::text_input::form)
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}
