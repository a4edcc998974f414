//! Cart route handlers.
//!
//! Cart mutations use HTMX: every change re-renders the whole item-list
//! fragment and fires a `cart-updated` event so the header badge refreshes.
//! The cart itself lives in the visitor session (write-through via
//! [`crate::storage`]); a stale index from an outdated fragment is logged
//! and ignored, never an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use kolibra_core::cart::{Cart, CartOp};
use kolibra_core::quote::{QuoteContact, quote_message};
use kolibra_core::whatsapp::chat_link;

use crate::filters;
use crate::state::AppState;
use crate::storage;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub image: String,
    pub title: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Aggregate label, e.g. `3 itens` / `1 item`.
    pub total_label: String,
    pub count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let count = cart.total_quantity();
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    image: item.image.clone(),
                    title: item.title.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            total_label: format!("{count} {}", if count == 1 { "item" } else { "itens" }),
            count,
        }
    }
}

/// Quote form display data: entered values plus the validation outcome.
#[derive(Clone, Default)]
pub struct QuoteFormView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    /// Validation notice shown above the form.
    pub error: Option<String>,
    /// Field that should receive focus; empty when none.
    pub focus: String,
}

// =============================================================================
// Form Data
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub title: String,
    pub image: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Quote submission form data.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub quote: QuoteFormView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Add-to-cart response: count badge plus an out-of-band notification.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub count: u32,
    pub notice: String,
    pub kind: &'static str,
}

/// Remove-from-cart response: items fragment plus an out-of-band
/// notification.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items_removed.html")]
pub struct CartRemovedTemplate {
    pub cart: CartView,
    pub notice: String,
    pub kind: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page with the quote form.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = storage::load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
        quote: QuoteFormView::default(),
    }
}

/// Add an item to the cart, merging quantities on repeated titles (HTMX).
#[instrument(skip(session), fields(title = %form.title))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Response {
    let mut cart = storage::load_cart(&session).await;

    let title = form.title.trim();
    let quantity = form.quantity.unwrap_or(1);
    let op = cart.add_or_merge(title, form.image.trim(), quantity);

    if op.changed() {
        storage::save_cart(&session, &cart).await;
        (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartAddedTemplate {
                count: cart.total_quantity(),
                notice: format!("{title} adicionado ao orçamento!"),
                kind: "success",
            },
        )
            .into_response()
    } else {
        tracing::warn!(quantity, outcome = ?op, "Ignored add-to-cart");
        CartAddedTemplate {
            count: cart.total_quantity(),
            notice: "Quantidade inválida.".to_owned(),
            kind: "error",
        }
        .into_response()
    }
}

/// Set a cart item's quantity (HTMX).
///
/// The decrement control never posts a quantity below 1; anything invalid
/// that arrives anyway is logged and ignored.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = storage::load_cart(&session).await;

    let op = cart.set_quantity(form.index, form.quantity);
    if op.changed() {
        storage::save_cart(&session, &cart).await;
    } else {
        tracing::warn!(
            index = form.index,
            quantity = form.quantity,
            outcome = ?op,
            "Ignored cart update"
        );
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Remove a cart item (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = storage::load_cart(&session).await;

    let removed_title = cart.items().get(form.index).map(|item| item.title.clone());
    let op = cart.remove(form.index);

    match (op, removed_title) {
        (CartOp::Removed, Some(title)) => {
            storage::save_cart(&session, &cart).await;
            (
                AppendHeaders([("HX-Trigger", "cart-updated")]),
                CartRemovedTemplate {
                    cart: CartView::from(&cart),
                    notice: format!("{title} removido do orçamento."),
                    kind: "info",
                },
            )
                .into_response()
        }
        _ => {
            tracing::warn!(index = form.index, outcome = ?op, "Ignored cart removal");
            CartItemsTemplate {
                cart: CartView::from(&cart),
            }
            .into_response()
        }
    }
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = storage::load_cart(&session).await;

    CartCountTemplate {
        count: cart.total_quantity(),
    }
}

/// Submit the quote form: validate, format, and hand off to WhatsApp.
///
/// On success the cart is cleared and the response redirects into the
/// `wa.me` deep link. On validation failure the page re-renders with the
/// notice and the offending field focused; the formatter is never invoked.
#[instrument(skip(state, session, form))]
pub async fn send_quote(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<QuoteForm>,
) -> Response {
    let cart = storage::load_cart(&session).await;

    match QuoteContact::parse(&form.name, &form.phone, &form.email, &form.message) {
        Ok(contact) => {
            let message = quote_message(&contact, &cart);
            let link = chat_link(state.whatsapp(), &message);

            let mut cleared = cart;
            cleared.clear();
            storage::save_cart(&session, &cleared).await;

            tracing::info!("Quote handed off to WhatsApp");
            Redirect::to(&link).into_response()
        }
        Err(err) => CartShowTemplate {
            cart: CartView::from(&cart),
            quote: QuoteFormView {
                name: form.name,
                phone: form.phone,
                email: form.email,
                message: form.message,
                error: Some(err.to_string()),
                focus: err.field().to_owned(),
            },
        }
        .into_response(),
    }
}
