//! Package builder: plan/service selection, pricing, and formatting.
//!
//! Visitors assemble a package from a base plan and add-on services, then
//! submit their contact details. The selection itself lives in the visitor
//! session between clicks; this module owns its semantics and the final
//! message template.

use serde::{Deserialize, Serialize};

use crate::message::MessageBuilder;
use crate::types::{Email, Phone, Price};

/// A base plan the visitor can pick in the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable identifier used in forms and the session.
    pub id: String,
    /// Display name, e.g. `PACOTE BASIC`.
    pub name: String,
    /// Monthly price; zero for the fully custom plan.
    pub price: Price,
}

/// An add-on service the visitor can toggle in the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonService {
    /// Stable identifier used in forms and the session.
    pub id: String,
    /// Display name, e.g. `Branding Profissional`.
    pub name: String,
    /// One-off or monthly price.
    pub price: Price,
    /// Support services unlock the billing-period choice.
    pub support: bool,
}

/// The visitor's current builder selection.
///
/// Stored in the session between clicks; every mutation is a pure function
/// of the previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSelection {
    /// The chosen base plan, if any.
    pub plan: Option<Plan>,
    /// Toggled add-on services, in selection order.
    pub services: Vec<AddonService>,
}

impl PackageSelection {
    /// Pick (or replace) the base plan.
    pub fn select_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
    }

    /// Toggle an add-on service: remove it when present, add it otherwise.
    ///
    /// Returns `true` when the service is selected after the toggle.
    pub fn toggle_service(&mut self, service: AddonService) -> bool {
        if let Some(pos) = self.services.iter().position(|s| s.id == service.id) {
            self.services.remove(pos);
            false
        } else {
            self.services.push(service);
            true
        }
    }

    /// Whether a service id is currently selected.
    #[must_use]
    pub fn has_service(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.id == id)
    }

    /// Plan price plus the sum of all selected services.
    #[must_use]
    pub fn total(&self) -> Price {
        let plan = self.plan.as_ref().map_or(Price::ZERO, |p| p.price);
        plan + self.services.iter().map(|s| s.price).sum()
    }

    /// Whether any selected service is a support service, which makes the
    /// support billing period relevant.
    #[must_use]
    pub fn needs_support_period(&self) -> bool {
        self.services.iter().any(|s| s.support)
    }

    /// Whether nothing has been selected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plan.is_none() && self.services.is_empty()
    }
}

/// How the visitor intends to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Credit,
    Debit,
    Transfer,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 4] = [Self::Pix, Self::Credit, Self::Debit, Self::Transfer];

    /// Wire id used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Transfer => "transfer",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Credit => "Cartão de Crédito",
            Self::Debit => "Cartão de Débito",
            Self::Transfer => "Transferência Bancária",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pix" => Ok(Self::Pix),
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "transfer" => Ok(Self::Transfer),
            _ => Err(()),
        }
    }
}

/// Billing period for support services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl SupportPeriod {
    /// All periods, in display order.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    /// Wire id used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Mensal",
            Self::Quarterly => "Trimestral",
            Self::Yearly => "Anual",
        }
    }
}

impl std::str::FromStr for SupportPeriod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(()),
        }
    }
}

/// Validation failures for the builder contact form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderFormError {
    /// The name is shorter than three characters.
    #[error("Nome é obrigatório (mínimo 3 caracteres)")]
    NameTooShort,
    /// The email failed structural validation.
    #[error("Email inválido")]
    InvalidEmail,
    /// The phone has too few digits or bad characters.
    #[error("Telefone inválido")]
    InvalidPhone,
}

impl BuilderFormError {
    /// The form field that should receive focus.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
        }
    }
}

/// Contact details submitted with a builder quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderContact {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    /// Optional company name; `None` when blank.
    pub company: Option<String>,
    /// Optional free-text message; `None` when blank.
    pub message: Option<String>,
}

impl BuilderContact {
    /// Validate the builder contact form.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the view can focus it.
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        company: &str,
        message: &str,
    ) -> Result<Self, BuilderFormError> {
        let name = name.trim();
        if name.chars().count() < 3 {
            return Err(BuilderFormError::NameTooShort);
        }

        let email = Email::parse(email).map_err(|_| BuilderFormError::InvalidEmail)?;
        let phone = Phone::parse(phone).map_err(|_| BuilderFormError::InvalidPhone)?;

        Ok(Self {
            name: name.to_owned(),
            email,
            phone,
            company: non_blank(company),
            message: non_blank(message),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

/// Render a builder submission into the outbound WhatsApp message.
#[must_use]
pub fn builder_message(
    contact: &BuilderContact,
    selection: &PackageSelection,
    payment: PaymentMethod,
    support_period: Option<SupportPeriod>,
) -> String {
    let plan = selection
        .plan
        .as_ref()
        .map_or("Nenhum plano selecionado", |p| p.name.as_str());

    let services = if selection.services.is_empty() {
        "Nenhum serviço selecionado".to_owned()
    } else {
        selection
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut builder = MessageBuilder::new("ORÇAMENTO - KOLIBRA SOLUTIONS")
        .field("Nome", &contact.name)
        .field("Email", contact.email.as_str())
        .field("Telefone", contact.phone.as_str())
        .field("Empresa", contact.company.as_deref().unwrap_or("Não informado"))
        .field("Plano", plan)
        .field("Serviços", &services)
        .field("Total", &selection.total().to_string())
        .field("Forma de Pagamento", payment.label());

    if selection.needs_support_period() {
        if let Some(period) = support_period {
            builder = builder.field("Periodicidade de Suporte", period.label());
        }
    }

    if let Some(message) = contact.message.as_deref() {
        builder = builder.blank().section("Mensagem").line(message);
    }

    builder.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn plan(id: &str, name: &str, cents: i64) -> Plan {
        Plan {
            id: id.to_owned(),
            name: name.to_owned(),
            price: Price::from_cents(cents),
        }
    }

    fn addon(id: &str, name: &str, cents: i64, support: bool) -> AddonService {
        AddonService {
            id: id.to_owned(),
            name: name.to_owned(),
            price: Price::from_cents(cents),
            support,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = PackageSelection::default();
        assert!(selection.toggle_service(addon("logo", "Logo", 10000, false)));
        assert!(selection.has_service("logo"));

        assert!(!selection.toggle_service(addon("logo", "Logo", 10000, false)));
        assert!(!selection.has_service("logo"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_total_sums_plan_and_services() {
        let mut selection = PackageSelection::default();
        selection.select_plan(plan("basic", "PACOTE BASIC", 19990));
        selection.toggle_service(addon("logo", "Logo", 10000, false));
        selection.toggle_service(addon("basic_support", "Suporte Básico", 2500, true));

        assert_eq!(selection.total(), Price::from_cents(32490));
    }

    #[test]
    fn test_total_without_plan() {
        let mut selection = PackageSelection::default();
        selection.toggle_service(addon("logo", "Logo", 10000, false));
        assert_eq!(selection.total(), Price::from_cents(10000));
    }

    #[test]
    fn test_needs_support_period() {
        let mut selection = PackageSelection::default();
        assert!(!selection.needs_support_period());

        selection.toggle_service(addon("basic_support", "Suporte Básico", 2500, true));
        assert!(selection.needs_support_period());

        selection.toggle_service(addon("basic_support", "Suporte Básico", 2500, true));
        assert!(!selection.needs_support_period());
    }

    #[test]
    fn test_contact_validation() {
        assert_eq!(
            BuilderContact::parse("Jo", "a@b.co", "3599796570", "", "").unwrap_err(),
            BuilderFormError::NameTooShort
        );
        assert_eq!(
            BuilderContact::parse("Maria", "nope", "3599796570", "", "").unwrap_err(),
            BuilderFormError::InvalidEmail
        );
        assert_eq!(
            BuilderContact::parse("Maria", "a@b.co", "123", "", "").unwrap_err(),
            BuilderFormError::InvalidPhone
        );
        assert!(BuilderContact::parse("Maria", "a@b.co", "3599796570", "", "").is_ok());
    }

    #[test]
    fn test_message_with_full_selection() {
        let mut selection = PackageSelection::default();
        selection.select_plan(plan("starter", "PACOTE STARTER", 39990));
        selection.toggle_service(addon("logo", "Logo", 10000, false));
        selection.toggle_service(addon("site_support", "Suporte para Site", 5000, true));

        let contact =
            BuilderContact::parse("Maria", "maria@example.com", "35999796570", "Padaria Pão", "")
                .unwrap();
        let message = builder_message(
            &contact,
            &selection,
            PaymentMethod::Pix,
            Some(SupportPeriod::Quarterly),
        );

        assert!(message.starts_with("*ORÇAMENTO - KOLIBRA SOLUTIONS*"));
        assert!(message.contains("*Empresa:* Padaria Pão"));
        assert!(message.contains("*Plano:* PACOTE STARTER"));
        assert!(message.contains("*Serviços:* Logo, Suporte para Site"));
        assert!(message.contains("*Total:* R$ 549.90"));
        assert!(message.contains("*Forma de Pagamento:* PIX"));
        assert!(message.contains("*Periodicidade de Suporte:* Trimestral"));
    }

    #[test]
    fn test_message_with_empty_selection() {
        let contact = BuilderContact::parse("Maria", "a@b.co", "3599796570", "", "").unwrap();
        let message = builder_message(
            &contact,
            &PackageSelection::default(),
            PaymentMethod::Transfer,
            None,
        );

        assert!(message.contains("*Empresa:* Não informado"));
        assert!(message.contains("*Plano:* Nenhum plano selecionado"));
        assert!(message.contains("*Serviços:* Nenhum serviço selecionado"));
        assert!(message.contains("*Total:* R$ 0.00"));
        assert!(!message.contains("Periodicidade"));
    }
}
