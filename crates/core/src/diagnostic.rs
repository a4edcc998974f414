//! Diagnostic wizard: step validation, draft state, and formatting.
//!
//! The free digital-diagnostic form runs in three steps: identity (who you
//! are), presence (where your business stands), and review (terms + send).
//! Progress is kept in a [`DiagnosticDraft`] in the visitor session so that
//! going back and forth between steps never loses input. Each step is
//! validated on its own; completing the wizard re-validates everything.

use serde::{Deserialize, Serialize};

use crate::message::MessageBuilder;
use crate::types::{Email, Phone};

/// How long the business has existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessAge {
    LessThanOne,
    OneToThree,
    ThreeToFive,
    MoreThanFive,
}

impl BusinessAge {
    /// All options, in display order.
    pub const ALL: [Self; 4] = [
        Self::LessThanOne,
        Self::OneToThree,
        Self::ThreeToFive,
        Self::MoreThanFive,
    ];

    /// Wire id used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThanOne => "less_than_1",
            Self::OneToThree => "1_to_3",
            Self::ThreeToFive => "3_to_5",
            Self::MoreThanFive => "more_than_5",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LessThanOne => "Menos de 1 ano",
            Self::OneToThree => "1 a 3 anos",
            Self::ThreeToFive => "3 a 5 anos",
            Self::MoreThanFive => "Mais de 5 anos",
        }
    }
}

impl std::str::FromStr for BusinessAge {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "less_than_1" => Ok(Self::LessThanOne),
            "1_to_3" => Ok(Self::OneToThree),
            "3_to_5" => Ok(Self::ThreeToFive),
            "more_than_5" => Ok(Self::MoreThanFive),
            _ => Err(()),
        }
    }
}

/// The budget range the business can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Under500,
    From500To1000,
    From1000To3000,
    Over3000,
}

impl BudgetRange {
    /// All options, in display order.
    pub const ALL: [Self; 4] = [
        Self::Under500,
        Self::From500To1000,
        Self::From1000To3000,
        Self::Over3000,
    ];

    /// Wire id used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under500 => "less_than_500",
            Self::From500To1000 => "500_to_1000",
            Self::From1000To3000 => "1000_to_3000",
            Self::Over3000 => "more_than_3000",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under500 => "Menos de R$ 500",
            Self::From500To1000 => "R$ 500 a R$ 1.000",
            Self::From1000To3000 => "R$ 1.000 a R$ 3.000",
            Self::Over3000 => "Mais de R$ 3.000",
        }
    }
}

impl std::str::FromStr for BudgetRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "less_than_500" => Ok(Self::Under500),
            "500_to_1000" => Ok(Self::From500To1000),
            "1000_to_3000" => Ok(Self::From1000To3000),
            "more_than_3000" => Ok(Self::Over3000),
            _ => Err(()),
        }
    }
}

/// Validation failures across the wizard.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticFormError {
    #[error("Nome é obrigatório (mínimo 3 caracteres)")]
    NameTooShort,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Telefone inválido")]
    InvalidPhone,
    #[error("Nome da empresa é obrigatório")]
    CompanyTooShort,
    #[error("Segmento é obrigatório")]
    SegmentTooShort,
    #[error("Selecione o tempo de existência do negócio")]
    MissingBusinessAge,
    #[error("Por favor, descreva seu principal desafio (mínimo 10 caracteres)")]
    ChallengeTooShort,
    #[error("Selecione uma faixa de orçamento")]
    MissingBudget,
    #[error("Você precisa aceitar os termos para continuar")]
    TermsNotAccepted,
    #[error("Preencha as etapas anteriores antes de enviar")]
    IncompleteDraft,
}

impl DiagnosticFormError {
    /// The form field that should receive focus, when one applies.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::CompanyTooShort => "company",
            Self::SegmentTooShort => "segment",
            Self::MissingBusinessAge => "business_age",
            Self::ChallengeTooShort => "main_challenge",
            Self::MissingBudget => "budget",
            Self::TermsNotAccepted => "accept_terms",
            Self::IncompleteDraft => "name",
        }
    }
}

/// Step 1: who is asking for the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityStep {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub company: String,
    pub segment: String,
}

impl IdentityStep {
    /// Validate the step-1 fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the view can focus it.
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        company: &str,
        segment: &str,
    ) -> Result<Self, DiagnosticFormError> {
        let name = name.trim();
        if name.chars().count() < 3 {
            return Err(DiagnosticFormError::NameTooShort);
        }

        let email = Email::parse(email).map_err(|_| DiagnosticFormError::InvalidEmail)?;
        let phone = Phone::parse(phone).map_err(|_| DiagnosticFormError::InvalidPhone)?;

        let company = company.trim();
        if company.chars().count() < 2 {
            return Err(DiagnosticFormError::CompanyTooShort);
        }

        let segment = segment.trim();
        if segment.chars().count() < 2 {
            return Err(DiagnosticFormError::SegmentTooShort);
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            phone,
            company: company.to_owned(),
            segment: segment.to_owned(),
        })
    }
}

/// Step 2: the business's current digital presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceStep {
    pub business_age: BusinessAge,
    pub has_website: bool,
    pub has_social_media: bool,
    pub has_logo: bool,
    pub main_challenge: String,
    pub budget: BudgetRange,
}

impl PresenceStep {
    /// Validate the step-2 fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the view can focus it.
    pub fn parse(
        business_age: Option<&str>,
        has_website: bool,
        has_social_media: bool,
        has_logo: bool,
        main_challenge: &str,
        budget: Option<&str>,
    ) -> Result<Self, DiagnosticFormError> {
        let business_age = business_age
            .and_then(|s| s.parse().ok())
            .ok_or(DiagnosticFormError::MissingBusinessAge)?;

        let main_challenge = main_challenge.trim();
        if main_challenge.chars().count() < 10 {
            return Err(DiagnosticFormError::ChallengeTooShort);
        }

        let budget = budget
            .and_then(|s| s.parse().ok())
            .ok_or(DiagnosticFormError::MissingBudget)?;

        Ok(Self {
            business_age,
            has_website,
            has_social_media,
            has_logo,
            main_challenge: main_challenge.to_owned(),
            budget,
        })
    }
}

/// Wizard progress stored in the visitor session between steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDraft {
    pub identity: Option<IdentityStep>,
    pub presence: Option<PresenceStep>,
}

impl DiagnosticDraft {
    /// Finish the wizard: requires both steps completed and the terms
    /// accepted.
    ///
    /// # Errors
    ///
    /// [`DiagnosticFormError::TermsNotAccepted`] when the checkbox is off,
    /// [`DiagnosticFormError::IncompleteDraft`] when a prior step is
    /// missing (a direct post without walking the steps).
    pub fn complete(&self, accept_terms: bool) -> Result<DiagnosticProfile, DiagnosticFormError> {
        if !accept_terms {
            return Err(DiagnosticFormError::TermsNotAccepted);
        }

        let identity = self
            .identity
            .clone()
            .ok_or(DiagnosticFormError::IncompleteDraft)?;
        let presence = self
            .presence
            .clone()
            .ok_or(DiagnosticFormError::IncompleteDraft)?;

        Ok(DiagnosticProfile { identity, presence })
    }
}

/// A completed diagnostic submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticProfile {
    pub identity: IdentityStep,
    pub presence: PresenceStep,
}

const fn sim_nao(value: bool) -> &'static str {
    if value { "Sim" } else { "Não" }
}

/// Render a completed diagnostic into the outbound WhatsApp message.
#[must_use]
pub fn diagnostic_message(profile: &DiagnosticProfile) -> String {
    let identity = &profile.identity;
    let presence = &profile.presence;

    MessageBuilder::new("DIAGNÓSTICO - KOLIBRA SOLUTIONS")
        .field("Nome", &identity.name)
        .field("Email", identity.email.as_str())
        .field("Telefone", identity.phone.as_str())
        .field("Empresa", &identity.company)
        .field("Segmento", &identity.segment)
        .blank()
        .field("Tempo de existência", presence.business_age.label())
        .blank()
        .section("Presença digital atual")
        .bullet(&format!("Website: {}", sim_nao(presence.has_website)))
        .bullet(&format!("Redes Sociais: {}", sim_nao(presence.has_social_media)))
        .bullet(&format!(
            "Logo/Identidade Visual: {}",
            sim_nao(presence.has_logo)
        ))
        .blank()
        .section("Principal desafio")
        .line(&presence.main_challenge)
        .blank()
        .field("Orçamento disponível", presence.budget.label())
        .finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn identity() -> IdentityStep {
        IdentityStep::parse(
            "Maria Souza",
            "maria@example.com",
            "(35) 99979-6570",
            "Padaria Pão Quente",
            "Alimentação",
        )
        .unwrap()
    }

    fn presence() -> PresenceStep {
        PresenceStep::parse(
            Some("1_to_3"),
            true,
            true,
            false,
            "Não consigo atrair clientes pela internet",
            Some("500_to_1000"),
        )
        .unwrap()
    }

    #[test]
    fn test_identity_step_validation() {
        assert_eq!(
            IdentityStep::parse("Jo", "a@b.co", "3599796570", "Pad", "Food").unwrap_err(),
            DiagnosticFormError::NameTooShort
        );
        assert_eq!(
            IdentityStep::parse("Maria", "a@b.co", "3599796570", "P", "Food").unwrap_err(),
            DiagnosticFormError::CompanyTooShort
        );
        assert_eq!(
            IdentityStep::parse("Maria", "a@b.co", "3599796570", "Pad", " ").unwrap_err(),
            DiagnosticFormError::SegmentTooShort
        );
    }

    #[test]
    fn test_presence_step_validation() {
        assert_eq!(
            PresenceStep::parse(None, false, false, false, "desafio grande aqui", Some("less_than_500"))
                .unwrap_err(),
            DiagnosticFormError::MissingBusinessAge
        );
        assert_eq!(
            PresenceStep::parse(Some("1_to_3"), false, false, false, "curto", Some("less_than_500"))
                .unwrap_err(),
            DiagnosticFormError::ChallengeTooShort
        );
        assert_eq!(
            PresenceStep::parse(Some("1_to_3"), false, false, false, "desafio grande aqui", None)
                .unwrap_err(),
            DiagnosticFormError::MissingBudget
        );
        // Unknown wire ids behave like missing choices
        assert_eq!(
            PresenceStep::parse(Some("forever"), false, false, false, "desafio grande aqui", None)
                .unwrap_err(),
            DiagnosticFormError::MissingBusinessAge
        );
    }

    #[test]
    fn test_complete_requires_terms() {
        let draft = DiagnosticDraft {
            identity: Some(identity()),
            presence: Some(presence()),
        };
        assert_eq!(
            draft.complete(false).unwrap_err(),
            DiagnosticFormError::TermsNotAccepted
        );
        assert!(draft.complete(true).is_ok());
    }

    #[test]
    fn test_complete_requires_prior_steps() {
        let draft = DiagnosticDraft {
            identity: Some(identity()),
            presence: None,
        };
        assert_eq!(
            draft.complete(true).unwrap_err(),
            DiagnosticFormError::IncompleteDraft
        );
    }

    #[test]
    fn test_message_layout() {
        let profile = DiagnosticProfile {
            identity: identity(),
            presence: presence(),
        };
        let message = diagnostic_message(&profile);

        assert!(message.starts_with("*DIAGNÓSTICO - KOLIBRA SOLUTIONS*"));
        assert!(message.contains("*Segmento:* Alimentação"));
        assert!(message.contains("*Tempo de existência:* 1 a 3 anos"));
        assert!(message.contains(
            "*Presença digital atual:*\n- Website: Sim\n- Redes Sociais: Sim\n- Logo/Identidade Visual: Não"
        ));
        assert!(message.contains("*Principal desafio:*\nNão consigo atrair clientes pela internet"));
        assert!(message.ends_with("*Orçamento disponível:* R$ 500 a R$ 1.000"));
    }

    #[test]
    fn test_wire_ids_roundtrip() {
        for age in BusinessAge::ALL {
            assert_eq!(age.as_str().parse::<BusinessAge>().unwrap(), age);
        }
        for budget in BudgetRange::ALL {
            assert_eq!(budget.as_str().parse::<BudgetRange>().unwrap(), budget);
        }
    }
}
