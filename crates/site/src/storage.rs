//! Write-through persistence of per-visitor state.
//!
//! The session is used as a plain key-value store: each piece of state is
//! serialized to a JSON string and written under a fixed key after every
//! mutation. Hydration is best-effort - a missing key yields the empty
//! default, and a malformed value is logged and reset rather than surfaced.
//! Corrupt state must never break a page; the visitor just starts over.
//!
//! There is no versioning scheme: changing a stored shape resets whatever
//! visitors had in flight, which is acceptable for a quote funnel.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use kolibra_core::cart::{Cart, LineItem};

use crate::models::session_keys;

// =============================================================================
// Cart
// =============================================================================

/// Serialize the cart's line items for storage.
#[must_use]
pub fn encode_cart(cart: &Cart) -> String {
    serde_json::to_string(cart.items()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to serialize cart");
        "[]".to_owned()
    })
}

/// Deserialize stored line items back into a cart.
///
/// Malformed data resets to an empty cart; valid data is re-sanitized
/// through [`Cart::hydrate`] so the cart invariants hold even if the stored
/// shape predates them.
#[must_use]
pub fn decode_cart(raw: &str) -> Cart {
    match serde_json::from_str::<Vec<LineItem>>(raw) {
        Ok(items) => Cart::hydrate(items),
        Err(e) => {
            tracing::warn!(error = %e, "Stored cart is corrupt, resetting to empty");
            Cart::new()
        }
    }
}

/// Load the visitor's cart from the session.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<String>(session_keys::CART).await {
        Ok(Some(raw)) => decode_cart(&raw),
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read cart from session");
            Cart::new()
        }
    }
}

/// Persist the visitor's cart to the session (write-through, best-effort).
pub async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART, encode_cart(cart)).await {
        tracing::error!(error = %e, "Failed to persist cart to session");
    }
}

// =============================================================================
// Generic JSON state (builder selection, diagnostic draft)
// =============================================================================

/// Load a JSON-encoded value from the session, falling back to its default
/// when missing or malformed.
pub async fn load_json<T>(session: &Session, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match session.get::<String>(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read session state");
            return T::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Stored session state is corrupt, resetting");
        T::default()
    })
}

/// Persist a JSON-encoded value to the session (best-effort).
pub async fn save_json<T>(session: &Session, key: &str, value: &T)
where
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to serialize session state");
            return;
        }
    };

    if let Err(e) = session.insert(key, raw).await {
        tracing::error!(key, error = %e, "Failed to persist session state");
    }
}

/// Remove a key from the session (best-effort).
pub async fn clear_key(session: &Session, key: &str) {
    if let Err(e) = session.remove::<String>(key).await {
        tracing::error!(key, error = %e, "Failed to clear session state");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_or_merge("Logo", "/static/images/services/logo.svg", 2);
        cart.add_or_merge("Landing Page", "/static/images/services/landing-page.svg", 1);
        cart
    }

    #[test]
    fn test_cart_roundtrip() {
        let cart = sample_cart();
        let restored = decode_cart(&encode_cart(&cart));
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_decode_corrupt_cart_resets_to_empty() {
        assert!(decode_cart("not json at all").is_empty());
        assert!(decode_cart("{\"wrong\": \"shape\"}").is_empty());
        assert!(decode_cart("").is_empty());
    }

    #[test]
    fn test_decode_sanitizes_stale_shapes() {
        // A zero quantity persisted by an older build is dropped on load
        let raw = r#"[{"image":"/i.svg","title":"Logo","quantity":0},
                      {"image":"/i.svg","title":"Site","quantity":2}]"#;
        let cart = decode_cart(raw);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_encode_empty_cart() {
        assert_eq!(encode_cart(&Cart::new()), "[]");
    }
}
