//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile d’opérandes (f64)
//!
//! Chaque appel repart de zéro : aucun état partagé, aucun cache.
//! Les primitives `apply_operator` / `apply_function` sont aussi celles
//! du mode opération directe (operations.rs), pour garder les deux
//! entrées numériquement identiques.

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, Fonction, Operateur, Tok};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne sa valeur.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    eval_rpn(&rpn)
}

/// Comme `evaluate`, mais retourne aussi la démarche (jetons + RPN) pour l’UI.
pub fn evaluate_detaille(expression: &str) -> Result<(f64, Demarche), EvaluationError> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((valeur, d))
}

/// Évalue une suite RPN avec une pile d’opérandes.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Op(op) => {
                // droite d’abord : elle a été empilée en dernier
                let b = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                let a = st.pop().ok_or(EvaluationError::InvalidExpression)?;
                st.push(appliquer_operateur(*op, a, b)?);
            }

            Tok::Fonction(f) => {
                let x = st.pop().ok_or(EvaluationError::InvalidFunctionUsage)?;
                st.push(appliquer_fonction(*f, x)?);
            }

            Tok::Ident(_) | Tok::LPar | Tok::RPar => {
                return Err(EvaluationError::UnsupportedToken(tok.to_string()))
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationError::InvalidExpression),
    }
}

/// Applique un opérateur binaire donné par son symbole (+ - * / ^).
pub fn apply_operator(symbole: char, left: f64, right: f64) -> Result<f64, EvaluationError> {
    let op = Operateur::from_symbole(symbole)
        .ok_or_else(|| EvaluationError::UnsupportedToken(symbole.to_string()))?;
    appliquer_operateur(op, left, right)
}

/// Applique une fonction unaire donnée par son nom (sin cos tan sqrt log ln).
pub fn apply_function(nom: &str, value: f64) -> Result<f64, EvaluationError> {
    let f = Fonction::from_nom(&nom.to_lowercase())
        .ok_or_else(|| EvaluationError::UnsupportedToken(nom.to_string()))?;
    appliquer_fonction(f, value)
}

pub(crate) fn appliquer_operateur(op: Operateur, a: f64, b: f64) -> Result<f64, EvaluationError> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Division => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        }
        // IEEE pow : base négative + exposant fractionnaire => NaN (pas de garde)
        Operateur::Puissance => Ok(a.powf(b)),
    }
}

pub(crate) fn appliquer_fonction(f: Fonction, x: f64) -> Result<f64, EvaluationError> {
    match f {
        // trig en DEGRÉS
        Fonction::Sin => Ok(x.to_radians().sin()),
        Fonction::Cos => Ok(x.to_radians().cos()),
        Fonction::Tan => Ok(x.to_radians().tan()),
        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(EvaluationError::domaine("sqrt", "requires non-negative value"));
            }
            Ok(x.sqrt())
        }
        Fonction::Log => {
            if x <= 0.0 {
                return Err(EvaluationError::domaine("log", "requires positive value"));
            }
            Ok(x.log10())
        }
        Fonction::Ln => {
            if x <= 0.0 {
                return Err(EvaluationError::domaine("ln", "requires positive value"));
            }
            Ok(x.ln())
        }
    }
}
