//! Contact phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character that is not a digit or common
    /// punctuation.
    #[error("phone number contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    /// The input has fewer digits than a Brazilian number with area code.
    #[error("phone number must have at least {min} digits")]
    TooShort {
        /// Minimum number of digits.
        min: usize,
    },
}

/// A contact phone number as typed by a visitor.
///
/// Kept verbatim apart from trimming; validation only requires enough
/// digits for a Brazilian number with area code, allowing the usual
/// punctuation: `(35) 99979-6570`, `+55 35 99979 6570`, `3599796570`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits (area code + number).
    pub const MIN_DIGITS: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits and `+ - . ( )` or spaces, or has fewer than
    /// [`Self::MIN_DIGITS`] digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if let Some(bad) = s
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, '+' | '-' | '.' | '(' | ')' | ' '))
        {
            return Err(PhoneError::InvalidCharacter(bad));
        }

        let digits = s.chars().filter(char::is_ascii_digit).count();
        if digits < Self::MIN_DIGITS {
            return Err(PhoneError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as typed (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
