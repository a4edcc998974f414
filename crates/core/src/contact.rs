//! Contact form validation and message formatting.

use serde::{Deserialize, Serialize};

use crate::message::MessageBuilder;
use crate::types::{Email, Phone};

/// Validation failures for the contact form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Nome é obrigatório (mínimo 3 caracteres)")]
    NameTooShort,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Telefone inválido")]
    InvalidPhone,
    #[error("Assunto é obrigatório")]
    SubjectTooShort,
    #[error("Mensagem é obrigatória (mínimo 10 caracteres)")]
    MessageTooShort,
}

impl ContactFormError {
    /// The form field that should receive focus.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::SubjectTooShort => "subject",
            Self::MessageTooShort => "message",
        }
    }
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate the contact form.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the view can focus it.
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactFormError> {
        let name = name.trim();
        if name.chars().count() < 3 {
            return Err(ContactFormError::NameTooShort);
        }

        let email = Email::parse(email).map_err(|_| ContactFormError::InvalidEmail)?;
        let phone = Phone::parse(phone).map_err(|_| ContactFormError::InvalidPhone)?;

        let subject = subject.trim();
        if subject.chars().count() < 3 {
            return Err(ContactFormError::SubjectTooShort);
        }

        let message = message.trim();
        if message.chars().count() < 10 {
            return Err(ContactFormError::MessageTooShort);
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            phone,
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Render a contact submission into the outbound WhatsApp message.
#[must_use]
pub fn contact_message(form: &ContactForm) -> String {
    MessageBuilder::new("Contato - KOLIBRA SOLUTIONS")
        .field("Nome", &form.name)
        .field("Email", form.email.as_str())
        .field("Telefone", form.phone.as_str())
        .field("Assunto", &form.subject)
        .blank()
        .section("Mensagem")
        .line(&form.message)
        .finish()
}
