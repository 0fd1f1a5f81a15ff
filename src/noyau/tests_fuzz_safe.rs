//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur attendue (calculée en même temps)
//! - invariant clé : evaluate(texte) == valeur attendue, bit à bit

use std::time::{Duration, Instant};

use super::erreur::EvaluationError;
use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (texte + valeur attendue) ------------------------ */

/// Valeur attendue : Err(DivisionByZero) dès qu’un diviseur vaut 0.
type Attendu = Result<f64, EvaluationError>;

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let n = rng.pick(10) as f64;
    let v = if rng.coin() { n } else { n + 0.5 };
    if rng.pick(4) == 0 {
        // littéral négatif, toujours entre parenthèses pour rester unaire
        (format!("(-{v})"), -v)
    } else {
        (format!("{v}"), v)
    }
}

fn combine(a: Attendu, b: Attendu, f: impl Fn(f64, f64) -> Attendu) -> Attendu {
    // ordre RPN : la gauche est évaluée (et échoue) avant la droite
    let a = a?;
    let b = b?;
    f(a, b)
}

fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Attendu) {
    if depth == 0 {
        let (t, v) = gen_nombre(rng);
        return (t, Ok(v));
    }

    match rng.pick(7) {
        0 => {
            let (t, v) = gen_nombre(rng);
            (t, Ok(v))
        }
        1 => {
            let (ta, a) = gen_expr(rng, depth - 1);
            let (tb, b) = gen_expr(rng, depth - 1);
            (format!("({ta}+{tb})"), combine(a, b, |x, y| Ok(x + y)))
        }
        2 => {
            let (ta, a) = gen_expr(rng, depth - 1);
            let (tb, b) = gen_expr(rng, depth - 1);
            (format!("({ta}-{tb})"), combine(a, b, |x, y| Ok(x - y)))
        }
        3 => {
            let (ta, a) = gen_expr(rng, depth - 1);
            let (tb, b) = gen_expr(rng, depth - 1);
            (format!("({ta}*{tb})"), combine(a, b, |x, y| Ok(x * y)))
        }
        4 => {
            let (ta, a) = gen_expr(rng, depth - 1);
            let (tb, b) = gen_expr(rng, depth - 1);
            let v = combine(a, b, |x, y| {
                if y == 0.0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(x / y)
                }
            });
            (format!("({ta}/{tb})"), v)
        }
        5 => {
            // négation implicite : "-(x)" == 0 - x
            // (parenthèses externes : après un opérateur, "a * -(x)" vaut (a*0) - x)
            let (t, a) = gen_expr(rng, depth - 1);
            (format!("(-({t}))"), a.map(|x| 0.0 - x))
        }
        _ => {
            // pas de parenthèses internes : la précédence doit faire le travail
            let (ta, a) = gen_nombre(rng);
            let (tb, b) = gen_nombre(rng);
            let (tc, c) = gen_nombre(rng);
            (format!("({ta} + {tb} * {tc})"), Ok(a + b * c))
        }
    }
}

fn meme_valeur(obtenu: f64, attendu: f64) -> bool {
    obtenu.to_bits() == attendu.to_bits()
        || obtenu == attendu
        || (obtenu.is_nan() && attendu.is_nan())
}

/* ------------------------ Bruit (caractères arbitraires) ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 's', 'i', 'n', 'q', 'r', 't',
    'l', 'o', 'g', '#', 'é',
];

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);

        match (evaluate(&expr), attendu) {
            (Ok(v), Ok(a)) => {
                assert!(meme_valeur(v, a), "expr={expr:?} obtenu={v} attendu={a}");
                seen_ok += 1;
            }
            (Err(e), Err(a)) => {
                assert_eq!(e, a, "expr={expr:?}");
                seen_err += 1;
            }
            (obtenu, attendu) => {
                panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}")
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, len);

        // jamais de panique ; résultat stable d’un appel à l’autre
        let a = evaluate(&s);
        let b = evaluate(&s);
        match (&a, &b) {
            (Ok(x), Ok(y)) => assert!(meme_valeur(*x, *y), "s={s:?}"),
            _ => assert_eq!(a, b, "s={s:?}"),
        }
    }
}

#[test]
fn fuzz_safe_erreurs_connues_seulement() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..1000 {
        let len = 1 + rng.pick(16) as usize;
        let s = gen_bruit(&mut rng, len);

        if let Err(e) = evaluate(&s) {
            // la raison doit toujours être un code connu du noyau
            assert!(
                matches!(
                    e.raison(),
                    "unsupported_character"
                        | "invalid_number"
                        | "mismatched_parentheses"
                        | "unsupported_token"
                        | "invalid_expression"
                        | "invalid_function_usage"
                        | "division_by_zero"
                        | "domain_error"
                ),
                "s={s:?} err={e}"
            );
        }
    }
}
