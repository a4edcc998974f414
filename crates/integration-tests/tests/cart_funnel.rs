//! Integration tests for the quote cart funnel: model, persistence layout,
//! formatter, and handoff link, exercised together the way the cart page
//! uses them.

use kolibra_core::cart::{Cart, CartOp};
use kolibra_core::quote::{QuoteContact, QuoteFormError, quote_message};
use kolibra_core::whatsapp::{MAX_LINK_LENGTH, WhatsAppNumber, chat_link};
use kolibra_site::storage::{decode_cart, encode_cart};

fn business_number() -> WhatsAppNumber {
    WhatsAppNumber::parse(kolibra_site::config::DEFAULT_WHATSAPP_NUMBER).expect("valid number")
}

// =============================================================================
// Cart Model Properties
// =============================================================================

#[test]
fn test_distinct_adds_accumulate() {
    let mut cart = Cart::new();
    let titles = ["Logo", "Site Básico", "Landing Page", "Loja Virtual"];

    for (i, title) in titles.iter().enumerate() {
        assert_eq!(
            cart.add_or_merge(title, "/img.svg", (i + 1) as u32),
            CartOp::Added
        );
    }

    assert_eq!(cart.len(), titles.len());
    assert_eq!(cart.total_quantity(), 1 + 2 + 3 + 4);
}

#[test]
fn test_merge_is_additive_on_quantity() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/img.svg", 2);
    cart.add_or_merge("Logo", "/img.svg", 3);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items().first().map(|i| i.quantity), Some(5));
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut cart = Cart::new();
    for title in ["a", "b", "c", "d"] {
        cart.add_or_merge(title, "/img.svg", 1);
    }

    assert_eq!(cart.remove(1), CartOp::Removed);
    assert_eq!(cart.remove(10), CartOp::OutOfRange);

    let titles: Vec<&str> = cart.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["a", "c", "d"]);
}

#[test]
fn test_invalid_quantity_updates_leave_cart_unchanged() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/img.svg", 4);
    let before = cart.clone();

    assert_eq!(cart.set_quantity(0, 0), CartOp::InvalidQuantity);
    assert_eq!(cart.set_quantity(5, 2), CartOp::OutOfRange);
    assert_eq!(cart, before);

    assert_eq!(cart.set_quantity(0, 7), CartOp::Updated);
    assert_eq!(cart.items().first().map(|i| i.quantity), Some(7));
}

#[test]
fn test_end_to_end_totals_and_clear() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/img.svg", 2);
    cart.add_or_merge("Site Básico", "/img.svg", 1);
    assert_eq!(cart.total_quantity(), 3);

    cart.clear();
    assert_eq!(cart.total_quantity(), 0);
    assert_eq!(encode_cart(&cart), "[]");
}

// =============================================================================
// Persistence Layout
// =============================================================================

#[test]
fn test_persisted_layout_roundtrip() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/static/images/services/logo.svg", 2);
    cart.add_or_merge("Landing Page", "/static/images/services/landing-page.svg", 1);

    let raw = encode_cart(&cart);
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    // The stored layout is a plain array of {image, title, quantity} records
    let records = value.as_array().expect("array layout");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["title"], "Logo");
    assert_eq!(records[0]["quantity"], 2);
    assert!(records[0]["image"].is_string());

    assert_eq!(decode_cart(&raw), cart);
}

#[test]
fn test_corrupt_persisted_cart_resets_to_empty() {
    for raw in ["{broken", "42", "\"string\"", "[{\"quantity\":\"two\"}]"] {
        assert!(decode_cart(raw).is_empty(), "raw {raw:?} should reset");
    }
}

// =============================================================================
// Formatter and Handoff
// =============================================================================

#[test]
fn test_quote_message_contains_fields_in_order() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/img.svg", 1);

    let contact = QuoteContact::parse("Maria", "35999999999", "", "").expect("valid contact");
    let message = quote_message(&contact, &cart);

    let name = message.find("Maria").expect("name present");
    let phone = message.find("35999999999").expect("phone present");
    let product = message.find("Logo (1 unidades)").expect("product present");
    assert!(name < phone);
    assert!(phone < product);
}

#[test]
fn test_blank_name_never_reaches_the_formatter() {
    // The handler only formats after parse succeeds, so an Err here means
    // no message is built and no link is opened.
    let result = QuoteContact::parse("   ", "35999999999", "", "");
    assert_eq!(result.unwrap_err(), QuoteFormError::MissingName);
}

#[test]
fn test_handoff_link_shape() {
    let mut cart = Cart::new();
    cart.add_or_merge("Logo", "/img.svg", 1);

    let contact = QuoteContact::parse("Maria", "35999999999", "", "").expect("valid contact");
    let link = chat_link(&business_number(), &quote_message(&contact, &cart));

    assert!(link.starts_with("https://wa.me/5535999796570?text="));
    // Percent-encoded as a whole: no raw spaces or newlines survive
    assert!(!link.contains(' '));
    assert!(!link.contains('\n'));
}

#[test]
fn test_handoff_link_is_capped_for_huge_carts() {
    let mut cart = Cart::new();
    for i in 0..200 {
        cart.add_or_merge(&format!("Serviço número {i} com nome comprido"), "/img.svg", 3);
    }

    let contact = QuoteContact::parse("Maria", "35999999999", "", "").expect("valid contact");
    let link = chat_link(&business_number(), &quote_message(&contact, &cart));

    assert!(link.len() <= MAX_LINK_LENGTH);
}
