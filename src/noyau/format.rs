// src/noyau/format.rs
//
// Affichage d’un résultat f64 : `digits` décimales max, sans zéros inutiles.

/// Précision d’affichage par défaut.
pub const DIGITS_DEFAUT: usize = 12;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DIGITS_MAX: usize = 17;

/// Formate une valeur pour l’affichage.
///
/// - 14.0        -> "14"
/// - 1/3, 4 dig. -> "0.3333"
/// - -0.0        -> "0"
/// - NaN / ±inf  -> "NaN" / "inf" / "-inf"
pub fn format_resultat(v: f64, digits: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.min(DIGITS_MAX);
    let s = format!("{v:.digits$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    // "-0", "-0.000" arrondis : pas de zéro signé à l’écran
    if s == "-0" {
        return "0".to_string();
    }
    s.to_string()
}
