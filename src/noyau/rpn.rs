// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, sqrt, log, ln} => Fonction (empilée)
//    - sinon => jeton non supporté (l’échec arrive ici, pas au tokenize)
// - Le moins unaire est déjà réglé par jetons.rs ("-5" ou "0 -").
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::EvaluationError;
use super::jetons::{Fonction, Operateur, Tok};

/// Table fixe : ^ (3) > * / (2) > + - (1).
pub fn precedence(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Division => 2,
        Operateur::Puissance => 3,
    }
}

pub fn is_right_associative(op: Operateur) -> bool {
    matches!(op, Operateur::Puissance)
}

/// Vrai si l’opérateur du haut de pile doit sortir avant `courant`.
fn doit_sortir(courant: Operateur, top: Operateur) -> bool {
    let p_cur = precedence(courant);
    let p_top = precedence(top);
    if is_right_associative(courant) {
        p_cur < p_top
    } else {
        p_cur <= p_top
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sqrt"), LPar, Num(9), Op(+), Num(7), RPar]
///   rpn:    [Num(9), Num(7), Op(+), Fonction(Sqrt)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Ident(name) => {
                let f = Fonction::from_nom(&name).ok_or(EvaluationError::UnsupportedToken(name))?;
                ops.push(Tok::Fonction(f));
            }
            Tok::Fonction(_) => ops.push(tok),

            Tok::Op(cur) => {
                // une fonction en haut de pile a déjà son argument : elle sort sans condition
                while let Some(top) = ops.last() {
                    let sortir = match top {
                        Tok::Fonction(_) => true,
                        Tok::Op(t) => doit_sortir(cur, *t),
                        _ => false,
                    };
                    if !sortir {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(t) => out.push(t),
                        None => return Err(EvaluationError::MismatchedParentheses),
                    }
                }

                // fonction juste avant la parenthèse : son argument est complet
                if let Some(Tok::Fonction(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(EvaluationError::MismatchedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}
