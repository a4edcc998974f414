//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::services::ServiceCardView;
use crate::state::AppState;

/// Number of services highlighted on the home page.
const FEATURED_SERVICES: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// A short selection of services linking into the catalog.
    pub featured: Vec<ServiceCardView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state
        .catalog()
        .services()
        .iter()
        .take(FEATURED_SERVICES)
        .map(ServiceCardView::from)
        .collect();

    HomeTemplate { featured }
}
