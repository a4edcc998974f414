//! Contact form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use kolibra_core::contact::{ContactForm, contact_message};
use kolibra_core::whatsapp::chat_link;

use crate::filters;
use crate::state::AppState;

/// Contact form display data: entered values plus the validation outcome.
#[derive(Clone, Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub error: Option<String>,
    pub focus: String,
}

/// Contact submission form data.
#[derive(Debug, Deserialize)]
pub struct ContactSendForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/show.html")]
pub struct ContactTemplate {
    pub form: ContactFormView,
    /// Digits of the business WhatsApp number, for the direct-chat link.
    pub whatsapp: String,
}

/// Display the contact page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    ContactTemplate {
        form: ContactFormView::default(),
        whatsapp: state.whatsapp().as_str().to_owned(),
    }
}

/// Submit the contact form: validate, format, and hand off to WhatsApp.
#[instrument(skip(state, form))]
pub async fn send(State(state): State<AppState>, Form(form): Form<ContactSendForm>) -> Response {
    match ContactForm::parse(
        &form.name,
        &form.email,
        &form.phone,
        &form.subject,
        &form.message,
    ) {
        Ok(contact) => {
            let message = contact_message(&contact);
            let link = chat_link(state.whatsapp(), &message);

            tracing::info!("Contact message handed off to WhatsApp");
            Redirect::to(&link).into_response()
        }
        Err(err) => ContactTemplate {
            form: ContactFormView {
                name: form.name,
                email: form.email,
                phone: form.phone,
                subject: form.subject,
                message: form.message,
                error: Some(err.to_string()),
                focus: err.field().to_owned(),
            },
            whatsapp: state.whatsapp().as_str().to_owned(),
        }
        .into_response(),
    }
}
