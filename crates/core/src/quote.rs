//! Quote request validation and message formatting.
//!
//! A quote request is the cart-page contact form plus a snapshot of the
//! cart at submit time. It is never persisted: once the message is built
//! and handed off, the request is discarded and the cart is cleared.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::message::MessageBuilder;

/// Validation failures for the quote contact form.
///
/// Only name and phone are required, and only presence is checked - the
/// quote form is deliberately the lowest-friction entry point on the site.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFormError {
    /// The name field is empty after trimming.
    #[error("Por favor, informe seu nome.")]
    MissingName,
    /// The phone field is empty after trimming.
    #[error("Por favor, informe seu telefone.")]
    MissingPhone,
}

impl QuoteFormError {
    /// The form field that should receive focus.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingPhone => "phone",
        }
    }
}

/// Contact details accompanying a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteContact {
    /// Customer name, trimmed, non-empty.
    pub name: String,
    /// Customer phone, trimmed, non-empty, otherwise unchecked.
    pub phone: String,
    /// Optional email, trimmed; `None` when blank.
    pub email: Option<String>,
    /// Optional free-text observations, trimmed; `None` when blank.
    pub notes: Option<String>,
}

impl QuoteContact {
    /// Validate the quote contact form.
    ///
    /// All fields are trimmed. Name and phone must be non-empty; the
    /// optional fields collapse to `None` when blank.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the view can focus it.
    pub fn parse(
        name: &str,
        phone: &str,
        email: &str,
        notes: &str,
    ) -> Result<Self, QuoteFormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuoteFormError::MissingName);
        }

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(QuoteFormError::MissingPhone);
        }

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: non_blank(email),
            notes: non_blank(notes),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// Render a quote request into the outbound WhatsApp message.
///
/// Cart items appear in display order as `- {title} ({quantity} unidades)`
/// followed by the aggregate `*Total:* {n} itens` line.
#[must_use]
pub fn quote_message(contact: &QuoteContact, cart: &Cart) -> String {
    let mut builder = MessageBuilder::new("Orçamento - Kolibra Solutions")
        .field("Cliente", &contact.name)
        .field("Telefone", &contact.phone)
        .optional_field("E-mail", contact.email.as_deref())
        .blank()
        .section("Produtos");

    for item in cart.items() {
        builder = builder.bullet(&format!("{} ({} unidades)", item.title, item.quantity));
    }

    builder = builder
        .blank()
        .field("Total", &format!("{} itens", cart.total_quantity()));

    if let Some(notes) = contact.notes.as_deref() {
        builder = builder.blank().section("Observações").line(notes);
    }

    builder.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cart_with_logo() -> Cart {
        let mut cart = Cart::new();
        cart.add_or_merge("Logo", "/static/images/services/logo.svg", 1);
        cart
    }

    #[test]
    fn test_parse_requires_name() {
        let err = QuoteContact::parse("   ", "35999999999", "", "").unwrap_err();
        assert_eq!(err, QuoteFormError::MissingName);
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_parse_requires_phone() {
        let err = QuoteContact::parse("Maria", " ", "", "").unwrap_err();
        assert_eq!(err, QuoteFormError::MissingPhone);
        assert_eq!(err.field(), "phone");
    }

    #[test]
    fn test_parse_trims_and_drops_blank_optionals() {
        let contact = QuoteContact::parse(" Maria ", " 35999999999 ", "  ", " obs ").unwrap();
        assert_eq!(contact.name, "Maria");
        assert_eq!(contact.phone, "35999999999");
        assert_eq!(contact.email, None);
        assert_eq!(contact.notes, Some("obs".to_owned()));
    }

    #[test]
    fn test_message_field_order() {
        let contact = QuoteContact::parse("Maria", "35999999999", "", "").unwrap();
        let message = quote_message(&contact, &cart_with_logo());

        let name = message.find("Maria").unwrap();
        let phone = message.find("35999999999").unwrap();
        let product = message.find("Logo (1 unidades)").unwrap();
        assert!(name < phone && phone < product);
    }

    #[test]
    fn test_message_total_and_optionals() {
        let mut cart = cart_with_logo();
        cart.add_or_merge("Site Básico", "/img/site.svg", 2);

        let contact =
            QuoteContact::parse("Maria", "35999999999", "maria@example.com", "Urgente").unwrap();
        let message = quote_message(&contact, &cart);

        assert!(message.contains("*E-mail:* maria@example.com"));
        assert!(message.contains("*Total:* 3 itens"));
        assert!(message.contains("*Observações:*\nUrgente"));
    }

    #[test]
    fn test_message_empty_email_omitted() {
        let contact = QuoteContact::parse("Maria", "35999999999", "", "").unwrap();
        let message = quote_message(&contact, &cart_with_logo());
        assert!(!message.contains("E-mail"));
        assert!(!message.contains("Observações"));
    }
}
