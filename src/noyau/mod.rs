//! Noyau flottant
//!
//! Organisation interne :
//! - erreur.rs     : EvaluationError (thiserror) + codes courts
//! - jetons.rs     : tokenisation (moins unaire inclus)
//! - rpn.rs        : shunting-yard (précédence / associativité)
//! - eval.rs       : pile d’opérandes + primitives apply_operator / apply_function
//! - operations.rs : mode opération directe (add, divide, log10…)
//! - format.rs     : affichage d’un f64 (digits, zéros inutiles)
//!
//! Aucun état global, aucun journal : tout vit le temps d’un appel.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{apply_function, apply_operator, evaluate, evaluate_detaille, Demarche};
pub use format::{format_resultat, DIGITS_DEFAUT, DIGITS_MAX};
pub use operations::{calculer_operation, Operation};
