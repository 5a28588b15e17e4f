//! Propriétés (quickcheck) sur les moteurs réels.
//!
//! Les f64 arbitraires couvrent NaN, ±∞ et des magnitudes extrêmes :
//! entrées non finies écartées (TestResult::discard). La périodicité se teste
//! dans ±1e6 (au-delà, x + 2π arrondi n’est plus x + 2π) ; la parité sur tout l’axe.

use std::f64::consts::TAU;

use quickcheck::{QuickCheck, TestResult};

use super::fonction::{Fonction, Logarithmique};
use super::ln::Ln;
use super::logarithme::Logarithme;
use super::reglages::EPSILON_DEFAUT;
use super::sinus::Sinus;
use super::systeme::{BrancheNegative, BranchePositive, Systeme};
use super::trig::Cosinus;

const EPS: f64 = EPSILON_DEFAUT;
const ANGLE_MAX: f64 = 1e6;

fn qc() -> QuickCheck {
    QuickCheck::new().tests(300)
}

fn angle(x: f64) -> Option<f64> {
    x.is_finite().then_some(x % ANGLE_MAX)
}

fn positif(x: f64) -> Option<f64> {
    let x = x.abs();
    (x.is_finite() && x > 0.0).then_some(x)
}

#[test]
fn prop_sin_periodique_et_impaire() {
    fn prop(x: f64) -> TestResult {
        let Some(x) = angle(x) else {
            return TestResult::discard();
        };
        let s = Sinus::new();
        let (Ok(a), Ok(b), Ok(c)) = (
            s.calculate(x, EPS),
            s.calculate(x + TAU, EPS),
            s.calculate(-x, EPS),
        ) else {
            return TestResult::failed();
        };
        TestResult::from_bool((a - b).abs() <= 2.0 * EPS && (a + c).abs() <= 2.0 * EPS)
    }
    qc().quickcheck(prop as fn(f64) -> TestResult);
}

#[test]
fn prop_cos_paire() {
    fn prop(x: f64) -> TestResult {
        if !x.is_finite() {
            return TestResult::discard();
        }
        let c = Cosinus::default();
        match (c.calculate(x, EPS), c.calculate(-x, EPS)) {
            (Ok(a), Ok(b)) => TestResult::from_bool(a == b),
            _ => TestResult::failed(),
        }
    }
    qc().quickcheck(prop as fn(f64) -> TestResult);
}

#[test]
fn prop_domaine_ln() {
    fn prop(x: f64) -> TestResult {
        if x.is_nan() {
            return TestResult::discard();
        }
        let ln = Ln::new();
        let attendu = x > 0.0 && x.is_finite();
        TestResult::from_bool(
            ln.is_in_domain(x) == attendu && ln.calculate(x, EPS).is_ok() == attendu,
        )
    }
    qc().quickcheck(prop as fn(f64) -> TestResult);
}

#[test]
fn prop_ln_produit() {
    fn prop(a: f64, b: f64) -> TestResult {
        let (Some(a), Some(b)) = (positif(a), positif(b)) else {
            return TestResult::discard();
        };
        let ab = a * b;
        if !ab.is_normal() {
            return TestResult::discard();
        }
        let ln = Ln::new();
        match (ln.calculate(ab, EPS), ln.calculate(a, EPS), ln.calculate(b, EPS)) {
            (Ok(p), Ok(la), Ok(lb)) => TestResult::from_bool((p - (la + lb)).abs() <= 10.0 * EPS),
            _ => TestResult::failed(),
        }
    }
    qc().quickcheck(prop as fn(f64, f64) -> TestResult);
}

#[test]
fn prop_log_b_de_b() {
    fn prop(i: u8) -> bool {
        let ln = Ln::new();
        let bases = [Logarithme::log2(ln), Logarithme::log5(ln), Logarithme::log10(ln)];
        let l = bases[usize::from(i % 3)];
        matches!(l.calculate(l.base(), EPS), Ok(v) if (v - 1.0).abs() <= EPS)
    }
    qc().quickcheck(prop as fn(u8) -> bool);
}

#[test]
fn prop_systeme_zero_et_signe() {
    fn prop(x: f64) -> TestResult {
        if !x.is_finite() {
            return TestResult::discard();
        }
        let (neg, pos) = (BrancheNegative::default(), BranchePositive::default());
        let sys = Systeme::new(&neg, &pos);

        let ok = match sys.applicable_sub_function(x) {
            None => !sys.is_in_domain(x) && sys.calculate(x, EPS).is_err(),
            Some(0) => x < 0.0,
            Some(1) => x > 0.0 && sys.calculate(x, EPS).is_ok(),
            Some(_) => false,
        };
        TestResult::from_bool(ok && !sys.is_in_domain(0.0))
    }
    qc().quickcheck(prop as fn(f64) -> TestResult);
}
