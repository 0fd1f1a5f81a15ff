// src/noyau/operations.rs
//
// Mode opération directe : un nom d’opération + a (+ b).
// Pas de parsing d’expression ici : simple table de dispatch vers
// apply_operator / apply_function (mêmes règles que l’expression).

use std::fmt;
use std::str::FromStr;

use super::erreur::EvaluationError;
use super::eval::{apply_function, apply_operator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
}

impl Operation {
    /// Toutes les opérations, dans l’ordre d’affichage (UI).
    pub const TOUTES: [Operation; 11] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::Log10,
        Operation::Ln,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
        }
    }

    /// Symbole d’opérateur pour les opérations binaires, None sinon.
    fn symbole(self) -> Option<char> {
        match self {
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::Power => Some('^'),
            _ => None,
        }
    }

    pub fn est_binaire(self) -> bool {
        self.symbole().is_some()
    }

    /// Calcule l’opération. `b` est obligatoire pour les binaires, ignoré sinon.
    pub fn calculer(self, a: f64, b: Option<f64>) -> Result<f64, EvaluationError> {
        if let Some(sym) = self.symbole() {
            let b = b.ok_or(EvaluationError::MissingOperand)?;
            return apply_operator(sym, a, b);
        }

        // log10 s’appelle "log" côté expression
        let fonction = match self {
            Self::Log10 => "log",
            other => other.nom(),
        };
        apply_function(fonction, a)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Operation {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nom = s.trim().to_lowercase();
        Operation::TOUTES
            .into_iter()
            .find(|op| op.nom() == nom)
            .ok_or(EvaluationError::UnsupportedOperation(nom))
    }
}

/// Raccourci : nom d’opération (texte libre) + opérandes.
pub fn calculer_operation(nom: &str, a: f64, b: Option<f64>) -> Result<f64, EvaluationError> {
    nom.parse::<Operation>()?.calculer(a, b)
}
