//! Integration tests for the diagnostic wizard: step validation, the
//! session draft, and the outbound message.

use kolibra_core::diagnostic::{
    DiagnosticDraft, DiagnosticFormError, IdentityStep, PresenceStep, diagnostic_message,
};
use kolibra_core::whatsapp::{WhatsAppNumber, chat_link};

fn walk_the_wizard() -> DiagnosticDraft {
    let mut draft = DiagnosticDraft::default();

    draft.identity = Some(
        IdentityStep::parse(
            "Maria Souza",
            "maria@example.com",
            "(35) 99979-6570",
            "Padaria Pão Quente",
            "Alimentação",
        )
        .expect("valid step 1"),
    );

    draft.presence = Some(
        PresenceStep::parse(
            Some("3_to_5"),
            true,
            false,
            true,
            "Tenho clientes no bairro mas ninguém me encontra online",
            Some("1000_to_3000"),
        )
        .expect("valid step 2"),
    );

    draft
}

#[test]
fn test_wizard_completes_only_with_terms() {
    let draft = walk_the_wizard();

    assert_eq!(
        draft.complete(false).unwrap_err(),
        DiagnosticFormError::TermsNotAccepted
    );

    let profile = draft.complete(true).expect("complete wizard");
    assert_eq!(profile.identity.company, "Padaria Pão Quente");
}

#[test]
fn test_skipping_a_step_blocks_completion() {
    let mut draft = walk_the_wizard();
    draft.presence = None;

    assert_eq!(
        draft.complete(true).unwrap_err(),
        DiagnosticFormError::IncompleteDraft
    );
}

#[test]
fn test_draft_survives_serialization_between_steps() {
    // The draft crosses requests as a JSON session value
    let draft = walk_the_wizard();
    let raw = serde_json::to_string(&draft).expect("serializes");
    let restored: DiagnosticDraft = serde_json::from_str(&raw).expect("deserializes");
    assert_eq!(restored, draft);
}

#[test]
fn test_diagnostic_message_and_link() {
    let profile = walk_the_wizard().complete(true).expect("complete wizard");
    let message = diagnostic_message(&profile);

    assert!(message.starts_with("*DIAGNÓSTICO - KOLIBRA SOLUTIONS*"));
    assert!(message.contains("*Tempo de existência:* 3 a 5 anos"));
    assert!(message.contains("- Website: Sim"));
    assert!(message.contains("- Redes Sociais: Não"));
    assert!(message.contains("*Orçamento disponível:* R$ 1.000 a R$ 3.000"));

    let number = WhatsAppNumber::parse("5535999796570").expect("valid number");
    let link = chat_link(&number, &message);
    assert!(link.starts_with("https://wa.me/5535999796570?text=%2ADIAGN"));
}
