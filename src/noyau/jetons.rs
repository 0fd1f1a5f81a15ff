// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvaluationError;

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Puissance, // ^
}

impl Operateur {
    pub fn from_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Division),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Division => '/',
            Self::Puissance => '^',
        }
    }
}

/// Fonctions unaires (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log, // base 10
    Ln,
}

impl Fonction {
    /// Appartenance à l’ensemble des fonctions (nom déjà en minuscules).
    pub fn from_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // Identifiant brut (minuscules). Le passage en RPN décide si c’est une fonction.
    Ident(String),
    Fonction(Fonction),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Ident(nom) => f.write_str(nom),
            Tok::Fonction(fun) => f.write_str(fun.nom()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Nature du dernier jeton émis : sert à repérer le moins unaire.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Dernier {
    Rien,
    Nombre,
    Operateur,
    ParG,
    ParD,
    Ident,
}

fn debut_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Consomme un littéral numérique à partir de `i` et le convertit en f64.
/// `prefixe` vaut "-" pour un moins unaire collé au nombre.
fn lire_nombre(chars: &[char], i: &mut usize, prefixe: &str) -> Result<Tok, EvaluationError> {
    let start = *i;
    while *i < chars.len() && debut_nombre(chars[*i]) {
        *i += 1;
    }
    let mut lit = String::from(prefixe);
    lit.extend(&chars[start..*i]);

    // Pas de validation pendant le balayage : "1.2.3" est refusé ici.
    lit.parse::<f64>()
        .map(Tok::Num)
        .map_err(|_| EvaluationError::InvalidNumber(lit))
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / ^ (moins unaire : "-5" ou "0 -" devant une parenthèse/fonction)
/// - parenthèses ( )
/// - identifiants alphabétiques (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;
    let mut dernier = Dernier::Rien;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if debut_nombre(c) {
            out.push(lire_nombre(&chars, &mut i, "")?);
            dernier = Dernier::Nombre;
            continue;
        }

        if let Some(op) = Operateur::from_symbole(c) {
            let unaire = op == Operateur::Moins
                && matches!(dernier, Dernier::Rien | Dernier::Operateur | Dernier::ParG);

            if unaire {
                // "-5" : un seul jeton négatif
                if i + 1 < chars.len() && debut_nombre(chars[i + 1]) {
                    i += 1;
                    out.push(lire_nombre(&chars, &mut i, "-")?);
                    dernier = Dernier::Nombre;
                    continue;
                }
                // "-(…)" / "-sin(…)" : négation = 0 - x
                out.push(Tok::Num(0.0));
            }

            out.push(Tok::Op(op));
            i += 1;
            dernier = Dernier::Operateur;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            dernier = Dernier::ParG;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            dernier = Dernier::ParD;
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            dernier = Dernier::Ident;
            continue;
        }

        return Err(EvaluationError::UnsupportedCharacter(c));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
