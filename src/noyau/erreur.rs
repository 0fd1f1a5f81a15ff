// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule énumération pour tout le pipeline
// (jetons -> RPN -> évaluation) et pour le mode opération directe.
//
// - Display (thiserror) : message court, lisible.
// - raison()            : code stable, lisible par une machine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("caractère non supporté: '{0}'")]
    UnsupportedCharacter(char),

    #[error("nombre invalide: {0}")]
    InvalidNumber(String),

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    #[error("jeton non supporté: {0}")]
    UnsupportedToken(String),

    #[error("expression invalide")]
    InvalidExpression,

    #[error("usage de fonction invalide")]
    InvalidFunctionUsage,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("{operation}: {reason}")]
    DomainError {
        operation: &'static str,
        reason: &'static str,
    },

    // --- mode opération directe ---
    #[error("opération non supportée: {0}")]
    UnsupportedOperation(String),

    #[error("l’opération requiert b")]
    MissingOperand,
}

impl EvaluationError {
    /// Code court par type d’erreur (pour journaux, codes de sortie, tests).
    pub fn raison(&self) -> &'static str {
        match self {
            Self::UnsupportedCharacter(_) => "unsupported_character",
            Self::InvalidNumber(_) => "invalid_number",
            Self::MismatchedParentheses => "mismatched_parentheses",
            Self::UnsupportedToken(_) => "unsupported_token",
            Self::InvalidExpression => "invalid_expression",
            Self::InvalidFunctionUsage => "invalid_function_usage",
            Self::DivisionByZero => "division_by_zero",
            Self::DomainError { .. } => "domain_error",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::MissingOperand => "missing_operand",
        }
    }

    pub(crate) fn domaine(operation: &'static str, reason: &'static str) -> Self {
        Self::DomainError { operation, reason }
    }
}
