//! Diagnostic wizard route handlers.
//!
//! A three-step form: identity, digital presence, review + terms. Each step
//! posts its own fields; validated steps merge into the session-stored
//! draft and redirect to the next step (PRG), so back/forward never loses
//! input. The final submit re-validates the whole draft and redirects into
//! WhatsApp.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use kolibra_core::diagnostic::{
    BudgetRange, BusinessAge, DiagnosticDraft, IdentityStep, PresenceStep, diagnostic_message,
};
use kolibra_core::whatsapp::chat_link;

use crate::filters;
use crate::models::session_keys;
use crate::routes::builder::ChoiceView;
use crate::state::AppState;
use crate::storage;

/// Number of wizard steps.
const TOTAL_STEPS: u8 = 3;

// =============================================================================
// Views
// =============================================================================

/// Wizard field values for the template, from the draft or a rejected
/// submission.
#[derive(Clone, Default)]
pub struct DraftView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub segment: String,
    /// Wire id of the checked business-age radio; empty when none.
    pub business_age: String,
    pub has_website: bool,
    pub has_social_media: bool,
    pub has_logo: bool,
    pub main_challenge: String,
    /// Wire id of the checked budget radio; empty when none.
    pub budget: String,
    /// Labels for the step-3 review block; empty when the step is missing.
    pub business_age_label: String,
    pub budget_label: String,
}

impl From<&DiagnosticDraft> for DraftView {
    fn from(draft: &DiagnosticDraft) -> Self {
        let mut view = Self::default();

        if let Some(identity) = &draft.identity {
            view.name = identity.name.clone();
            view.email = identity.email.as_str().to_owned();
            view.phone = identity.phone.as_str().to_owned();
            view.company = identity.company.clone();
            view.segment = identity.segment.clone();
        }

        if let Some(presence) = &draft.presence {
            view.business_age = presence.business_age.as_str().to_owned();
            view.business_age_label = presence.business_age.label().to_owned();
            view.has_website = presence.has_website;
            view.has_social_media = presence.has_social_media;
            view.has_logo = presence.has_logo;
            view.main_challenge = presence.main_challenge.clone();
            view.budget = presence.budget.as_str().to_owned();
            view.budget_label = presence.budget.label().to_owned();
        }

        view
    }
}

// =============================================================================
// Form Data
// =============================================================================

/// Step selector for the wizard page.
#[derive(Debug, Deserialize)]
pub struct StepQuery {
    pub step: Option<u8>,
}

/// Step 1 form data.
#[derive(Debug, Deserialize)]
pub struct IdentityForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub segment: String,
}

/// Step 2 form data. Checkboxes arrive only when checked.
#[derive(Debug, Deserialize)]
pub struct PresenceForm {
    #[serde(default)]
    pub business_age: Option<String>,
    #[serde(default)]
    pub has_website: Option<String>,
    #[serde(default)]
    pub has_social_media: Option<String>,
    #[serde(default)]
    pub has_logo: Option<String>,
    #[serde(default)]
    pub main_challenge: String,
    #[serde(default)]
    pub budget: Option<String>,
}

/// Final submission form data.
#[derive(Debug, Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub accept_terms: Option<String>,
}

// =============================================================================
// Template
// =============================================================================

/// Diagnostic wizard page template.
#[derive(Template, WebTemplate)]
#[template(path = "diagnostic/show.html")]
pub struct DiagnosticTemplate {
    pub step: u8,
    pub total_steps: u8,
    pub draft: DraftView,
    pub ages: Vec<ChoiceView>,
    pub budgets: Vec<ChoiceView>,
    pub error: Option<String>,
    pub focus: String,
}

fn wizard_template(step: u8, draft: DraftView, error: Option<String>, focus: String) -> DiagnosticTemplate {
    DiagnosticTemplate {
        step,
        total_steps: TOTAL_STEPS,
        draft,
        ages: BusinessAge::ALL
            .iter()
            .map(|age| ChoiceView {
                id: age.as_str(),
                label: age.label(),
            })
            .collect(),
        budgets: BudgetRange::ALL
            .iter()
            .map(|budget| ChoiceView {
                id: budget.as_str(),
                label: budget.label(),
            })
            .collect(),
        error,
        focus,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the wizard at the requested step (clamped to `1..=3`),
/// pre-filled from the draft.
#[instrument(skip(session))]
pub async fn show(session: Session, Query(query): Query<StepQuery>) -> impl IntoResponse {
    let draft: DiagnosticDraft = storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;
    let step = query.step.unwrap_or(1).clamp(1, TOTAL_STEPS);

    wizard_template(step, DraftView::from(&draft), None, String::new())
}

/// Submit step 1 (identity) and advance to step 2.
#[instrument(skip(session, form))]
pub async fn identity(session: Session, Form(form): Form<IdentityForm>) -> Response {
    match IdentityStep::parse(
        &form.name,
        &form.email,
        &form.phone,
        &form.company,
        &form.segment,
    ) {
        Ok(step) => {
            let mut draft: DiagnosticDraft =
                storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;
            draft.identity = Some(step);
            storage::save_json(&session, session_keys::DIAGNOSTIC_DRAFT, &draft).await;

            Redirect::to("/diagnostico?step=2").into_response()
        }
        Err(err) => {
            let draft: DiagnosticDraft =
                storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;
            let mut view = DraftView::from(&draft);
            view.name = form.name;
            view.email = form.email;
            view.phone = form.phone;
            view.company = form.company;
            view.segment = form.segment;

            wizard_template(1, view, Some(err.to_string()), err.field().to_owned())
                .into_response()
        }
    }
}

/// Submit step 2 (digital presence) and advance to step 3.
#[instrument(skip(session, form))]
pub async fn presence(session: Session, Form(form): Form<PresenceForm>) -> Response {
    match PresenceStep::parse(
        form.business_age.as_deref(),
        form.has_website.is_some(),
        form.has_social_media.is_some(),
        form.has_logo.is_some(),
        &form.main_challenge,
        form.budget.as_deref(),
    ) {
        Ok(step) => {
            let mut draft: DiagnosticDraft =
                storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;
            draft.presence = Some(step);
            storage::save_json(&session, session_keys::DIAGNOSTIC_DRAFT, &draft).await;

            Redirect::to("/diagnostico?step=3").into_response()
        }
        Err(err) => {
            let draft: DiagnosticDraft =
                storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;
            let mut view = DraftView::from(&draft);
            view.business_age = form.business_age.unwrap_or_default();
            view.has_website = form.has_website.is_some();
            view.has_social_media = form.has_social_media.is_some();
            view.has_logo = form.has_logo.is_some();
            view.main_challenge = form.main_challenge;
            view.budget = form.budget.unwrap_or_default();

            wizard_template(2, view, Some(err.to_string()), err.field().to_owned())
                .into_response()
        }
    }
}

/// Final submit: accept terms, validate the whole draft, and hand off to
/// WhatsApp. On success the draft is cleared.
#[instrument(skip(state, session, form))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SendForm>,
) -> Response {
    let draft: DiagnosticDraft = storage::load_json(&session, session_keys::DIAGNOSTIC_DRAFT).await;

    match draft.complete(form.accept_terms.is_some()) {
        Ok(profile) => {
            let message = diagnostic_message(&profile);
            let link = chat_link(state.whatsapp(), &message);

            storage::clear_key(&session, session_keys::DIAGNOSTIC_DRAFT).await;

            tracing::info!("Diagnostic handed off to WhatsApp");
            Redirect::to(&link).into_response()
        }
        Err(err) => {
            wizard_template(
                TOTAL_STEPS,
                DraftView::from(&draft),
                Some(err.to_string()),
                err.field().to_owned(),
            )
            .into_response()
        }
    }
}
