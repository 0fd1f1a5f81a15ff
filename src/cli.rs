// src/cli.rs
//
// Ligne de commande (natif seulement)
// -----------------------------------
//   calculatrice_flottante "2+3*4"                     -> 14
//   calculatrice_flottante -- "-(2+3)"                 -> -5
//   calculatrice_flottante --operation divide -a 1 -b 4 -> 0.25
//   calculatrice_flottante                             -> interface graphique
//
// Codes de sortie : 0 = ok, 1 = erreur d’évaluation, 2 = usage (clap).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::noyau::{self, EvaluationError, DIGITS_DEFAUT, DIGITS_MAX};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calculatrice flottante : expression ou opération directe")]
pub struct Args {
    /// Expression à évaluer (ex: "2+3*4", "sqrt(16)", "sin(90)"). Trig en degrés.
    #[arg(allow_hyphen_values = true, conflicts_with = "operation")]
    pub expression: Option<String>,

    /// Opération directe : add, subtract, multiply, divide, power, sqrt, sin, cos, tan, log10, ln
    #[arg(long, requires = "a")]
    pub operation: Option<String>,

    /// Premier opérande (seul utilisé par les opérations unaires)
    #[arg(short, long, allow_negative_numbers = true, requires = "operation")]
    pub a: Option<f64>,

    /// Second opérande (opérations binaires)
    #[arg(short, long, allow_negative_numbers = true, requires = "operation")]
    pub b: Option<f64>,

    /// Nombre maximal de décimales affichées
    #[arg(long, default_value_t = DIGITS_DEFAUT)]
    pub digits: usize,

    /// Verbosité des journaux (-v debug, -vv trace) ; RUST_LOG a priorité
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Installe le subscriber tracing (stderr, filtré par RUST_LOG ou -v).
pub fn init_journal(verbose: u8) {
    let defaut = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exécute la demande sans fenêtre, si la ligne de commande en contient une.
///
/// Retourne le code de sortie, ou None pour lancer l’interface graphique.
pub fn executer(args: &Args) -> Option<i32> {
    let res = calculer(args)?;
    let digits = args.digits.min(DIGITS_MAX);

    Some(match res {
        Ok(v) => {
            println!("{}", noyau::format_resultat(v, digits));
            0
        }
        Err(e) => {
            tracing::debug!(raison = e.raison(), "échec");
            eprintln!("erreur: {e}");
            1
        }
    })
}

/// Calcul demandé par la ligne de commande (None : rien à calculer).
fn calculer(args: &Args) -> Option<Result<f64, EvaluationError>> {
    if let Some(expr) = &args.expression {
        tracing::debug!(expression = %expr, "évaluation");
        return Some(noyau::evaluate(expr));
    }

    let op = args.operation.as_deref()?;
    let a = args.a?;
    tracing::debug!(operation = op, a, b = ?args.b, "opération directe");
    Some(noyau::calculer_operation(op, a, args.b))
}
