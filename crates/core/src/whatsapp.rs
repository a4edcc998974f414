//! WhatsApp deep-link construction.
//!
//! The site's only output channel: a `https://wa.me/<number>?text=<message>`
//! URL that opens a chat with the business with the message pre-filled.
//! Delivery cannot be confirmed or retried; success is defined as the link
//! being opened.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Practical URL length ceiling for common browsers and messaging apps.
///
/// Links longer than this risk being rejected or truncated by the OS
/// handler, so the message text is trimmed to fit instead.
pub const MAX_LINK_LENGTH: usize = 2000;

/// Errors that can occur when parsing a [`WhatsAppNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WhatsAppNumberError {
    /// The input string is empty.
    #[error("whatsapp number cannot be empty")]
    Empty,
    /// The input contains a non-digit character.
    #[error("whatsapp number must be digits only (E.164 without the plus): {0:?}")]
    InvalidCharacter(char),
    /// The input is outside the E.164 length range.
    #[error("whatsapp number must have between 8 and 15 digits")]
    InvalidLength,
}

/// A destination number for `wa.me` links: E.164 digits without the plus,
/// e.g. `5535999796570`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WhatsAppNumber(String);

impl WhatsAppNumber {
    /// Parse a `WhatsAppNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or is
    /// outside the E.164 length range of 8 to 15 digits.
    pub fn parse(s: &str) -> Result<Self, WhatsAppNumberError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(WhatsAppNumberError::Empty);
        }

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(WhatsAppNumberError::InvalidCharacter(bad));
        }

        if !(8..=15).contains(&s.len()) {
            return Err(WhatsAppNumberError::InvalidLength);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WhatsAppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WhatsAppNumber {
    type Err = WhatsAppNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Build a `wa.me` chat link with `text` pre-filled.
///
/// The message is inserted percent-encoded as a whole. If the resulting URL
/// would exceed [`MAX_LINK_LENGTH`], the text is cut on a character boundary
/// and an ellipsis is appended, so the link always stays openable.
#[must_use]
pub fn chat_link(number: &WhatsAppNumber, text: &str) -> String {
    let base = format!("https://wa.me/{}?text=", number.as_str());

    let encoded = urlencoding::encode(text);
    if base.len() + encoded.len() <= MAX_LINK_LENGTH {
        return base + &encoded;
    }

    // Over budget: re-encode character by character until the ellipsis no
    // longer fits.
    const ELLIPSIS: &str = "%E2%80%A6";
    let budget = MAX_LINK_LENGTH.saturating_sub(base.len() + ELLIPSIS.len());

    let mut out = base;
    let mut used = 0;
    let mut scratch = [0u8; 4];
    for ch in text.chars() {
        let piece = urlencoding::encode(ch.encode_utf8(&mut scratch));
        if used + piece.len() > budget {
            break;
        }
        used += piece.len();
        out.push_str(&piece);
    }
    out.push_str(ELLIPSIS);
    out
}
