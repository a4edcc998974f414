//! Package builder route handlers.
//!
//! Plan and add-on clicks follow POST-redirect-GET: the selection lives in
//! the visitor session, each click mutates it and redirects back to the
//! page, and the summary column is re-rendered from the stored state. The
//! final submit validates the contact form and redirects into WhatsApp.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use kolibra_core::builder::{
    BuilderContact, PackageSelection, PaymentMethod, SupportPeriod, builder_message,
};
use kolibra_core::whatsapp::chat_link;

use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;
use crate::storage;

// =============================================================================
// Views
// =============================================================================

/// Plan card display data.
#[derive(Clone)]
pub struct PlanCardView {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub features: Vec<String>,
    pub selected: bool,
}

/// Add-on card display data.
#[derive(Clone)]
pub struct AddonCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub support: bool,
    pub selected: bool,
}

/// One selected service in the summary column.
#[derive(Clone)]
pub struct SelectedServiceView {
    pub id: String,
    pub name: String,
    pub price_label: String,
}

/// Summary column display data.
#[derive(Clone)]
pub struct SummaryView {
    /// Selected plan name, or `None` when no plan is picked yet.
    pub plan_name: Option<String>,
    pub plan_price_label: String,
    pub services: Vec<SelectedServiceView>,
    pub total_label: String,
    pub needs_support_period: bool,
}

impl From<&PackageSelection> for SummaryView {
    fn from(selection: &PackageSelection) -> Self {
        let plan_price_label = selection.plan.as_ref().map_or_else(String::new, |plan| {
            if plan.price.is_zero() {
                "Personalizado".to_owned()
            } else {
                plan.price.to_string()
            }
        });

        Self {
            plan_name: selection.plan.as_ref().map(|plan| plan.name.clone()),
            plan_price_label,
            services: selection
                .services
                .iter()
                .map(|service| SelectedServiceView {
                    id: service.id.clone(),
                    name: service.name.clone(),
                    price_label: service.price.to_string(),
                })
                .collect(),
            total_label: selection.total().to_string(),
            needs_support_period: selection.needs_support_period(),
        }
    }
}

/// Contact form display data: entered values plus the validation outcome.
#[derive(Clone)]
pub struct BuilderFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    /// Wire id of the checked payment method.
    pub payment_method: String,
    /// Wire id of the checked support period.
    pub support_period: String,
    pub error: Option<String>,
    pub focus: String,
}

impl Default for BuilderFormView {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            message: String::new(),
            payment_method: PaymentMethod::default().as_str().to_owned(),
            support_period: SupportPeriod::default().as_str().to_owned(),
            error: None,
            focus: String::new(),
        }
    }
}

/// A radio choice for the template.
#[derive(Clone)]
pub struct ChoiceView {
    pub id: &'static str,
    pub label: &'static str,
}

// =============================================================================
// Form Data
// =============================================================================

/// Plan selection form data.
#[derive(Debug, Deserialize)]
pub struct PlanForm {
    pub plan: String,
}

/// Add-on toggle form data.
#[derive(Debug, Deserialize)]
pub struct ServiceForm {
    pub service: String,
}

/// Final builder submission form data.
#[derive(Debug, Deserialize)]
pub struct BuilderSendForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub support_period: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Builder page template.
#[derive(Template, WebTemplate)]
#[template(path = "builder/show.html")]
pub struct BuilderTemplate {
    pub plans: Vec<PlanCardView>,
    pub addons: Vec<AddonCardView>,
    pub summary: SummaryView,
    pub form: BuilderFormView,
    pub payment_choices: Vec<ChoiceView>,
    pub period_choices: Vec<ChoiceView>,
}

fn builder_template(
    state: &AppState,
    selection: &PackageSelection,
    form: BuilderFormView,
) -> BuilderTemplate {
    let plans = state
        .catalog()
        .plans()
        .iter()
        .map(|card| PlanCardView {
            id: card.plan.id.clone(),
            name: card.plan.name.clone(),
            tagline: card.tagline.to_owned(),
            features: card.features.iter().map(|&f| f.to_owned()).collect(),
            selected: selection.plan.as_ref().is_some_and(|p| p.id == card.plan.id),
        })
        .collect();

    let addons = state
        .catalog()
        .addons()
        .iter()
        .map(|card| AddonCardView {
            id: card.addon.id.clone(),
            name: card.addon.name.clone(),
            description: card.description.to_owned(),
            price_label: if card.addon.support {
                format!("{}/mês", card.addon.price)
            } else {
                card.addon.price.to_string()
            },
            support: card.addon.support,
            selected: selection.has_service(&card.addon.id),
        })
        .collect();

    BuilderTemplate {
        plans,
        addons,
        summary: SummaryView::from(selection),
        form,
        payment_choices: PaymentMethod::ALL
            .iter()
            .map(|method| ChoiceView {
                id: method.as_str(),
                label: method.label(),
            })
            .collect(),
        period_choices: SupportPeriod::ALL
            .iter()
            .map(|period| ChoiceView {
                id: period.as_str(),
                label: period.label(),
            })
            .collect(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the builder page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let selection: PackageSelection =
        storage::load_json(&session, session_keys::PACKAGE_SELECTION).await;

    builder_template(&state, &selection, BuilderFormView::default())
}

/// Select the base plan (PRG).
///
/// An unknown plan id is logged and ignored; the page simply re-renders
/// with the previous selection.
#[instrument(skip(state, session), fields(plan = %form.plan))]
pub async fn select_plan(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PlanForm>,
) -> Redirect {
    let mut selection: PackageSelection =
        storage::load_json(&session, session_keys::PACKAGE_SELECTION).await;

    match state.catalog().plan(&form.plan) {
        Some(plan) => {
            selection.select_plan(plan.clone());
            storage::save_json(&session, session_keys::PACKAGE_SELECTION, &selection).await;
        }
        None => tracing::warn!("Ignored unknown plan id"),
    }

    Redirect::to("/construtor")
}

/// Toggle an add-on service (PRG).
#[instrument(skip(state, session), fields(service = %form.service))]
pub async fn toggle_service(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ServiceForm>,
) -> Redirect {
    let mut selection: PackageSelection =
        storage::load_json(&session, session_keys::PACKAGE_SELECTION).await;

    match state.catalog().addon(&form.service) {
        Some(addon) => {
            let selected = selection.toggle_service(addon.clone());
            tracing::debug!(selected, "Toggled add-on service");
            storage::save_json(&session, session_keys::PACKAGE_SELECTION, &selection).await;
        }
        None => tracing::warn!("Ignored unknown service id"),
    }

    Redirect::to("/construtor")
}

/// Submit the builder: validate, format, and hand off to WhatsApp.
///
/// On success the stored selection is cleared and the response redirects
/// into the `wa.me` deep link.
#[instrument(skip(state, session, form))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<BuilderSendForm>,
) -> Response {
    let selection: PackageSelection =
        storage::load_json(&session, session_keys::PACKAGE_SELECTION).await;

    match BuilderContact::parse(
        &form.name,
        &form.email,
        &form.phone,
        &form.company,
        &form.message,
    ) {
        Ok(contact) => {
            let payment = form.payment_method.parse().unwrap_or_else(|()| {
                tracing::warn!(method = %form.payment_method, "Unknown payment method, using default");
                PaymentMethod::default()
            });
            let support_period = form.support_period.parse::<SupportPeriod>().ok();

            let message = builder_message(&contact, &selection, payment, support_period);
            let link = chat_link(state.whatsapp(), &message);

            storage::clear_key(&session, session_keys::PACKAGE_SELECTION).await;

            tracing::info!("Builder quote handed off to WhatsApp");
            Redirect::to(&link).into_response()
        }
        Err(err) => {
            let form_view = BuilderFormView {
                name: form.name,
                email: form.email,
                phone: form.phone,
                company: form.company,
                message: form.message,
                payment_method: form.payment_method,
                support_period: form.support_period,
                error: Some(err.to_string()),
                focus: err.field().to_owned(),
            };
            builder_template(&state, &selection, form_view).into_response()
        }
    }
}
