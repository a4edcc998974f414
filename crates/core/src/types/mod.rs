//! Newtype wrappers for validated domain values.

mod email;
mod phone;
mod price;

pub use email::{Email, EmailError};
pub use phone::{Phone, PhoneError};
pub use price::Price;
