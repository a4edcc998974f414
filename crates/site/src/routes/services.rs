//! Service catalog route handler.
//!
//! Each card carries an add-to-quote form posting into the cart via HTMX.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::ServiceItem;
use crate::filters;
use crate::state::AppState;

/// Service display data for templates.
#[derive(Clone)]
pub struct ServiceCardView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl From<&ServiceItem> for ServiceCardView {
    fn from(item: &ServiceItem) -> Self {
        Self {
            slug: item.slug.to_owned(),
            title: item.title.to_owned(),
            description: item.description.to_owned(),
            image: item.image.to_owned(),
            category: item.category.label().to_owned(),
        }
    }
}

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: Vec<ServiceCardView>,
}

/// Display the service catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let services = state
        .catalog()
        .services()
        .iter()
        .map(ServiceCardView::from)
        .collect();

    ServicesTemplate { services }
}
