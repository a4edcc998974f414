//! Session-related types.
//!
//! All per-visitor state on the site lives in the session: pages are
//! heterogeneous and a visitor may enter any funnel first, so every key is
//! independent and optional.

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for the serialized quote cart (JSON array of line items).
    pub const CART: &str = "cart";

    /// Key for the package-builder selection.
    pub const PACKAGE_SELECTION: &str = "package_selection";

    /// Key for the diagnostic wizard draft.
    pub const DIAGNOSTIC_DRAFT: &str = "diagnostic_draft";
}
