//! Portfolio page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

/// A delivered project for display on the portfolio page.
#[derive(Clone)]
pub struct ProjectView {
    pub title: String,
    pub category: String,
    pub description: String,
}

/// Static portfolio entries (can be replaced with dynamic data later).
fn get_projects() -> Vec<ProjectView> {
    vec![
        ProjectView {
            title: "Bronzella Glow".to_owned(),
            category: "E-commerce".to_owned(),
            description: "Catálogo de produtos com carrinho de orçamento e atendimento \
                          direto pelo WhatsApp."
                .to_owned(),
        },
        ProjectView {
            title: "Padaria Pão Quente".to_owned(),
            category: "Identidade Visual".to_owned(),
            description: "Rebranding completo: logo, paleta de cores e materiais impressos."
                .to_owned(),
        },
        ProjectView {
            title: "Clínica Vida Leve".to_owned(),
            category: "Site Institucional".to_owned(),
            description: "Site de 10 páginas com agendamento integrado e blog de conteúdo."
                .to_owned(),
        },
        ProjectView {
            title: "Estúdio Mova".to_owned(),
            category: "Redes Sociais".to_owned(),
            description: "Gestão mensal de Instagram com crescimento orgânico de seguidores."
                .to_owned(),
        },
    ]
}

/// Portfolio page template.
#[derive(Template, WebTemplate)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub projects: Vec<ProjectView>,
}

/// Display the portfolio page.
#[instrument]
pub async fn index() -> impl IntoResponse {
    PortfolioTemplate {
        projects: get_projects(),
    }
}
