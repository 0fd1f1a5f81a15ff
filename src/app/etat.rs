//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, démarche,
//! panneau d’opération directe) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision d’affichage bornée (DIGITS_MAX).

use crate::noyau::{format_resultat, Demarche, Operation, DIGITS_DEFAUT, DIGITS_MAX};

/// Panneau "opération directe" : un nom + a (+ b).
#[derive(Clone, Debug)]
pub struct OperationDirecte {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub resultat: String,
    pub erreur: String,
}

impl Default for OperationDirecte {
    fn default() -> Self {
        Self {
            operation: Operation::Add,
            a: 0.0,
            b: 0.0,
            resultat: String::new(),
            erreur: String::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<f64>, // dernière valeur (re-formatée si digits change)
    pub resultat: String,    // valeur formatée
    pub erreur: String,      // message d’erreur (si parsing/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- opération directe ---
    pub direct: OperationDirecte,

    // --- paramètres ---
    pub digits: usize, // décimales affichées

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_digits(DIGITS_DEFAUT)
    }
}

impl AppCalc {
    /// État initial avec une précision donnée (ex: `--digits` en ligne de commande).
    pub fn avec_digits(digits: usize) -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            direct: OperationDirecte::default(),
            digits: digits.min(DIGITS_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.direct = OperationDirecte::default();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.resultat = format_resultat(valeur, self.digits);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits, et ré-affiche la dernière valeur.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        if let Some(v) = self.valeur {
            self.resultat = format_resultat(v, self.digits);
        }
        self.focus_entree = true;
    }

    /// Dépose le résultat (ou l’erreur) du panneau opération directe.
    pub fn set_resultat_direct(&mut self, res: Result<f64, String>) {
        match res {
            Ok(v) => {
                self.direct.erreur.clear();
                self.direct.resultat = format_resultat(v, self.digits);
            }
            Err(msg) => {
                self.direct.resultat.clear();
                self.direct.erreur = msg;
            }
        }
    }
}
