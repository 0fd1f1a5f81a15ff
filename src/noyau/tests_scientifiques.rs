//! Tests scientifiques (campagne) : propriétés du pipeline + cohérence des deux entrées.
//!
//! - valeurs calculées à la main (précédence, associativité, négation)
//! - mode opération directe == expression équivalente (bit à bit)
//! - idempotence et appels concurrents (aucun état caché)

use std::time::{Duration, Instant};

use super::erreur::EvaluationError;
use super::{apply_function, apply_operator, calculer_operation, evaluate};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-9 * attendu.abs().max(1.0),
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique (valeurs à la main) ------------------------ */

#[test]
fn sci_precedence_quatre_operations() {
    assert_val("1+2*3-4/2", 5.0);
    assert_val("(1+2)*(3-4)/2", -1.5);
    assert_val("100/10/5", 2.0);
    assert_val("100-10-5", 85.0);
    assert_val("2*3+4*5", 26.0);
    assert_val("2*(3+4)*5", 70.0);
    assert_val("((((1))))+((2))", 3.0);
    assert_val("7 - (2 - (1 - 4))", 2.0);
}

#[test]
fn sci_proprietes_du_cahier() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("-(2+3)"), -5.0);
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_val("sin(90)", 1.0);

    assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero));
    assert!(matches!(
        evaluate("sqrt(-1)"),
        Err(EvaluationError::DomainError { operation: "sqrt", .. })
    ));
    assert_eq!(evaluate("(2+3"), Err(EvaluationError::MismatchedParentheses));
    assert_eq!(evaluate("2+"), Err(EvaluationError::InvalidExpression));
}

#[test]
fn sci_puissance_associative_a_droite() {
    // 2^(3^2) et non (2^3)^2
    assert_eq!(eval_ok("2^3^2"), eval_ok("2^(3^2)"));
    assert_ne!(eval_ok("2^3^2"), eval_ok("(2^3)^2"));
    // ^ lie plus fort que * et que le moins binaire
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok("10-2^2"), 6.0);
}

#[test]
fn sci_moins_unaire_litteral() {
    // "-2" est un littéral : (-2)^2
    assert_eq!(eval_ok("-2^2"), 4.0);
    // "-(2)" est une négation "0 - (2)" : ^ passe avant le moins => -4
    assert_eq!(eval_ok("-(2)^2"), -4.0);
    assert_eq!(eval_ok("3*(-2)"), -6.0);
}

#[test]
fn sci_trig_en_degres() {
    assert_val("sin(0)", 0.0);
    assert_val("cos(0)", 1.0);
    assert_val("cos(60)", 0.5);
    assert_val("sin(30)^2 + cos(30)^2", 1.0);
    assert_val("tan(-45)", -1.0);
}

#[test]
fn sci_logarithmes() {
    assert_val("log(10^6)", 6.0);
    assert_val("ln(2) + ln(3) - ln(6)", 0.0);
    assert_val("log(sqrt(100))", 1.0);
}

/* ------------------------ Cohérence des deux entrées ------------------------ */

#[test]
fn sci_primitives_egales_a_l_expression() {
    assert_eq!(apply_function("sqrt", 16.0), evaluate("sqrt(16)"));
    assert_eq!(apply_function("sin", 30.0), evaluate("sin(30)"));
    assert_eq!(apply_function("log", 42.0), evaluate("log(42)"));
    assert_eq!(apply_function("ln", 7.5), evaluate("ln(7.5)"));
    assert_eq!(apply_operator('^', 2.0, 0.5), evaluate("2^0.5"));
    assert_eq!(apply_operator('/', 1.0, 3.0), evaluate("1/3"));
}

#[test]
fn sci_operation_directe_egale_a_l_expression() {
    let cas: &[(&str, f64, Option<f64>, &str)] = &[
        ("add", 1.25, Some(2.5), "1.25+2.5"),
        ("subtract", 1.0, Some(0.3), "1-0.3"),
        ("multiply", 0.1, Some(3.0), "0.1*3"),
        ("divide", 2.0, Some(3.0), "2/3"),
        ("power", 9.0, Some(0.5), "9^0.5"),
        ("sqrt", 2.0, None, "sqrt(2)"),
        ("sin", 45.0, None, "sin(45)"),
        ("cos", 45.0, None, "cos(45)"),
        ("tan", 30.0, None, "tan(30)"),
        ("log10", 2.0, None, "log(2)"),
        ("ln", 10.0, None, "ln(10)"),
    ];

    for (op, a, b, expr) in cas {
        let direct = calculer_operation(op, *a, *b).unwrap();
        let via_expr = eval_ok(expr);
        assert_eq!(direct.to_bits(), via_expr.to_bits(), "op={op} expr={expr:?}");
    }

    // mêmes erreurs
    assert_eq!(calculer_operation("divide", 1.0, Some(0.0)), evaluate("1/0"));
    assert_eq!(calculer_operation("sqrt", -1.0, None), evaluate("sqrt(-1)"));
    assert_eq!(calculer_operation("log10", 0.0, None), evaluate("log(0)"));
    assert_eq!(calculer_operation("ln", 0.0, None), evaluate("ln(0)"));
}

/* ------------------------ Absence d’état caché ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+3*4", "-(2+3)", "sin(33)/cos(12)", "2^0.5^3", "5/0", "(2+3"] {
        let a = evaluate(expr);
        let b = evaluate(expr);
        match (a, b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            (a, b) => assert_eq!(a, b, "expr={expr:?}"),
        }
    }
}

#[test]
fn sci_appels_concurrents() {
    let exprs = ["2+3*4", "sqrt(2)*sqrt(2)", "log(1000)-ln(1)", "-(1.5^2)"];
    let attendus: Vec<f64> = exprs.iter().map(|e| eval_ok(e)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..200 {
                    for (e, v) in exprs.iter().zip(&attendus) {
                        assert_eq!(eval_ok(e).to_bits(), v.to_bits());
                    }
                }
            });
        }
    });
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pas de récursion dans le noyau : la profondeur ne coûte que de la pile Vec
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 4000].join(" + ");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 2000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_fonctions_imbriquees() {
    // sqrt(sqrt(...(65536)...)) : 4 niveaux => 2
    let mut expr = "65536".to_string();
    for _ in 0..4 {
        expr = format!("sqrt({expr})");
    }
    assert_eq!(eval_ok(&expr), 2.0);
}
