//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /servicos               - Service catalog (add-to-quote cards)
//! GET  /portfolio              - Portfolio page
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page with the quote form
//! POST /cart/add               - Add/merge item (returns count fragment)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/quote             - Validate and hand off to WhatsApp
//!
//! # Package builder (PRG)
//! GET  /construtor             - Builder page
//! POST /construtor/plan        - Select base plan
//! POST /construtor/toggle      - Toggle add-on service
//! POST /construtor/send        - Validate and hand off to WhatsApp
//!
//! # Diagnostic wizard
//! GET  /diagnostico            - Wizard page (?step=1..3)
//! POST /diagnostico/identity   - Step 1 submit
//! POST /diagnostico/presence   - Step 2 submit
//! POST /diagnostico/send       - Accept terms and hand off to WhatsApp
//!
//! # Contact
//! GET  /contato                - Contact page
//! POST /contato/send           - Validate and hand off to WhatsApp
//! ```

pub mod builder;
pub mod cart;
pub mod contact;
pub mod diagnostic;
pub mod home;
pub mod portfolio;
pub mod services;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/quote", post(cart::send_quote))
}

/// Create the package builder routes router.
pub fn builder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(builder::show))
        .route("/plan", post(builder::select_plan))
        .route("/toggle", post(builder::toggle_service))
        .route("/send", post(builder::send))
}

/// Create the diagnostic wizard routes router.
pub fn diagnostic_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnostic::show))
        .route("/identity", post(diagnostic::identity))
        .route("/presence", post(diagnostic::presence))
        .route("/send", post(diagnostic::send))
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::show))
        .route("/send", post(contact::send))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/servicos", get(services::index))
        .route("/portfolio", get(portfolio::index))
        .nest("/cart", cart_routes())
        .nest("/construtor", builder_routes())
        .nest("/diagnostico", diagnostic_routes())
        .nest("/contato", contact_routes())
        .fallback(not_found)
}

/// Fallback for unknown paths; pages are heterogeneous and old marketing
/// URLs may still be linked from elsewhere.
async fn not_found() -> AppError {
    AppError::NotFound("página não encontrada".to_owned())
}
