//! Domain error types

use crate::validation::FieldId;
use thiserror::Error;

/// A single field failing its validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldId,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure reported by the submit collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Falha de rede ao enviar o formulário: {0}")]
    Network(String),
    #[error("Tempo esgotado ao enviar o formulário")]
    Timeout,
    /// Server-side rejection; the local delayed client never rejects
    #[allow(dead_code)]
    #[error("Cadastro recusado: {0}")]
    Rejected(String),
}

/// Unknown validation profile name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation profile `{0}` (expected `strict` or `lenient`)")]
pub struct ParseProfileError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display_uses_field_key() {
        let err = FieldValidationError::new(FieldId::PostalCode, "CEP inválido");
        assert_eq!(err.to_string(), "postalCode: CEP inválido");
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::Timeout.to_string(),
            "Tempo esgotado ao enviar o formulário"
        );
        assert!(SubmitError::Rejected("CPF já cadastrado".into())
            .to_string()
            .contains("CPF já cadastrado"));
    }
}
