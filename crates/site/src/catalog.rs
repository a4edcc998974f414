//! Static service catalog and builder pricing content.
//!
//! The agency's offering changes a few times a year at most, so the catalog
//! is plain static data compiled into the binary, loaded once into
//! [`crate::state::AppState`].

use kolibra_core::builder::{AddonService, Plan};
use kolibra_core::types::Price;

/// Grouping for service cards and builder add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Branding,
    Web,
    Support,
}

impl ServiceCategory {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Branding => "Branding",
            Self::Web => "Web",
            Self::Support => "Suporte",
        }
    }
}

/// A service offered on the services page, addable to the quote cart.
#[derive(Debug, Clone)]
pub struct ServiceItem {
    /// URL-safe identifier.
    pub slug: &'static str,
    /// Display name; doubles as the cart line-item title.
    pub title: &'static str,
    /// One-sentence pitch shown on the card.
    pub description: &'static str,
    /// Card illustration, served from the static directory.
    pub image: &'static str,
    pub category: ServiceCategory,
}

/// A base plan with its marketing copy for the builder page.
#[derive(Debug, Clone)]
pub struct PlanCard {
    pub plan: Plan,
    /// Price line shown under the name, e.g. `R$ 199.90/mês`.
    pub tagline: &'static str,
    /// Feature bullets shown on the card.
    pub features: &'static [&'static str],
}

/// An add-on service with its marketing copy for the builder page.
#[derive(Debug, Clone)]
pub struct AddonCard {
    pub addon: AddonService,
    /// One-sentence pitch shown next to the toggle.
    pub description: &'static str,
    pub category: ServiceCategory,
}

/// The site's static offering: services, plans, and builder add-ons.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceItem>,
    plans: Vec<PlanCard>,
    addons: Vec<AddonCard>,
}

impl Catalog {
    /// Build the static catalog.
    #[must_use]
    pub fn load() -> Self {
        Self {
            services: services(),
            plans: plans(),
            addons: addons(),
        }
    }

    /// Services shown on the services page, in display order.
    #[must_use]
    pub fn services(&self) -> &[ServiceItem] {
        &self.services
    }

    /// Builder plans, in display order.
    #[must_use]
    pub fn plans(&self) -> &[PlanCard] {
        &self.plans
    }

    /// Builder add-ons, in display order.
    #[must_use]
    pub fn addons(&self) -> &[AddonCard] {
        &self.addons
    }

    /// Look up a builder plan by id.
    #[must_use]
    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().map(|card| &card.plan).find(|p| p.id == id)
    }

    /// Look up a builder add-on by id.
    #[must_use]
    pub fn addon(&self, id: &str) -> Option<&AddonService> {
        self.addons
            .iter()
            .map(|card| &card.addon)
            .find(|a| a.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

fn services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            slug: "logo",
            title: "Logo",
            description: "Criação de logo profissional para sua marca.",
            image: "/static/images/services/logo.svg",
            category: ServiceCategory::Branding,
        },
        ServiceItem {
            slug: "branding-profissional",
            title: "Branding Profissional",
            description: "Identidade visual completa: logo, cores, tipografia e aplicações.",
            image: "/static/images/services/branding.svg",
            category: ServiceCategory::Branding,
        },
        ServiceItem {
            slug: "site-basico",
            title: "Site Básico",
            description: "Site simples com até 5 páginas para apresentar seu negócio.",
            image: "/static/images/services/site-basico.svg",
            category: ServiceCategory::Web,
        },
        ServiceItem {
            slug: "landing-page",
            title: "Landing Page",
            description: "Página de conversão otimizada para campanhas específicas.",
            image: "/static/images/services/landing-page.svg",
            category: ServiceCategory::Web,
        },
        ServiceItem {
            slug: "loja-virtual",
            title: "Loja Virtual",
            description: "E-commerce completo para vender seus produtos online.",
            image: "/static/images/services/loja-virtual.svg",
            category: ServiceCategory::Web,
        },
        ServiceItem {
            slug: "gestao-redes-sociais",
            title: "Gestão de Redes Sociais",
            description: "Planejamento e criação de postagens para suas redes.",
            image: "/static/images/services/redes-sociais.svg",
            category: ServiceCategory::Support,
        },
    ]
}

fn plans() -> Vec<PlanCard> {
    vec![
        PlanCard {
            plan: Plan {
                id: "custom".to_owned(),
                name: "Personalizado".to_owned(),
                price: Price::ZERO,
            },
            tagline: "Monte do zero",
            features: &[
                "Serviços avulsos",
                "Pague apenas pelo que precisar",
                "Sem compromisso mensal",
            ],
        },
        PlanCard {
            plan: Plan {
                id: "basic".to_owned(),
                name: "PACOTE BASIC".to_owned(),
                price: Price::from_cents(19990),
            },
            tagline: "R$ 199,90/mês",
            features: &[
                "Identidade Visual Básica",
                "Foco em Instagram",
                "Gestão de 1 Rede Social",
            ],
        },
        PlanCard {
            plan: Plan {
                id: "starter".to_owned(),
                name: "PACOTE STARTER".to_owned(),
                price: Price::from_cents(39990),
            },
            tagline: "R$ 399,90/mês",
            features: &[
                "Identidade Visual Completa",
                "Site Institucional (10 páginas)",
                "3 Redes Sociais",
            ],
        },
        PlanCard {
            plan: Plan {
                id: "premium".to_owned(),
                name: "PACOTE PREMIUM".to_owned(),
                price: Price::from_cents(79990),
            },
            tagline: "R$ 799,90/mês",
            features: &[
                "Identidade Visual Premium",
                "Site Institucional (15+ páginas)",
                "Todas as Redes Sociais",
                "E-commerce Básico",
            ],
        },
    ]
}

fn addons() -> Vec<AddonCard> {
    vec![
        AddonCard {
            addon: AddonService {
                id: "logo".to_owned(),
                name: "Logo".to_owned(),
                price: Price::from_cents(10000),
                support: false,
            },
            description: "Criação de logo profissional para sua marca.",
            category: ServiceCategory::Branding,
        },
        AddonCard {
            addon: AddonService {
                id: "branding_pro".to_owned(),
                name: "Branding Profissional".to_owned(),
                price: Price::from_cents(30000),
                support: false,
            },
            description: "Identidade visual completa, incluindo logo, cores e tipografia.",
            category: ServiceCategory::Branding,
        },
        AddonCard {
            addon: AddonService {
                id: "basic_site".to_owned(),
                name: "Site Básico".to_owned(),
                price: Price::from_cents(30000),
                support: false,
            },
            description: "Site simples com até 5 páginas para apresentar seu negócio.",
            category: ServiceCategory::Web,
        },
        AddonCard {
            addon: AddonService {
                id: "landing_page".to_owned(),
                name: "Landing Page".to_owned(),
                price: Price::from_cents(30000),
                support: false,
            },
            description: "Página de conversão otimizada para campanhas específicas.",
            category: ServiceCategory::Web,
        },
        AddonCard {
            addon: AddonService {
                id: "basic_support".to_owned(),
                name: "Suporte Básico".to_owned(),
                price: Price::from_cents(2500),
                support: true,
            },
            description: "Criação de postagens para Instagram e auxílio para crescimento.",
            category: ServiceCategory::Support,
        },
        AddonCard {
            addon: AddonService {
                id: "social_support".to_owned(),
                name: "Suporte para Redes Sociais".to_owned(),
                price: Price::from_cents(4000),
                support: true,
            },
            description: "Postagens em redes sociais e direcionamento estratégico.",
            category: ServiceCategory::Support,
        },
        AddonCard {
            addon: AddonService {
                id: "site_support".to_owned(),
                name: "Suporte para Site".to_owned(),
                price: Price::from_cents(5000),
                support: true,
            },
            description: "Alterações ilimitadas, trocas de valores e novos elementos.",
            category: ServiceCategory::Support,
        },
    ]
}
