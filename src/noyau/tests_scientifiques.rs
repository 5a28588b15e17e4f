//! Tests scientifiques (campagne) : valeurs de référence + identités + limites contrôlées.
//!
//! But : vérifier chaque moteur contre des valeurs connues, puis les relations entre moteurs.
//! - tables de référence (rstest) à ε = 1e-6 et ε = 1e-12
//! - identités : sin² + cos² = 1, sec·cos = 1, csc·sin = 1, changement de base
//! - valeurs des deux branches du système ; balayages bornés par un budget temps global
//!
//! Notes :
//! - les références viennent de la libm (f64::sin, f64::ln) ; le noyau ne s’en sert jamais.
//! - chaque fonction, système compris, est tenue à ε ; seules les identités (produits de
//!   deux évaluations) prennent une marge.

use std::f64::consts::{E, FRAC_PI_2, PI};
use std::time::{Duration, Instant};

use rstest::rstest;

use super::erreur::ErreurNoyau;
use super::fonction::{Fonction, Logarithmique, Trigonometrique};
use super::init_logs;
use super::ln::Ln;
use super::logarithme::Logarithme;
use super::reglages::EPSILON_DEFAUT;
use super::sinus::Sinus;
use super::systeme::{BrancheNegative, BranchePositive, Systeme};
use super::trig::{Cosecante, Cosinus, Secante};

const EPS: f64 = EPSILON_DEFAUT;

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn assert_proche(obtenu: f64, attendu: f64, tol: f64, contexte: &str) {
    assert!(
        (obtenu - attendu).abs() <= tol,
        "{contexte} : obtenu={obtenu} attendu={attendu} écart={:e}",
        (obtenu - attendu).abs()
    );
}

/* ------------------------ Tables de référence ------------------------ */

#[rstest]
#[case(0.1, 0.09983341664682815, 0.9950041652780258)]
#[case(1.0, 0.8414709848078965, 0.5403023058681398)]
#[case(2.0, 0.9092974268256817, -0.4161468365471424)]
#[case(-2.5, -0.5984721441039565, -0.8011436155469337)]
#[case(10.0, -0.5440211108893698, -0.8390715290764524)]
#[case(100.0, -0.5063656411097588, 0.8623188722876839)]
#[case(-1000.0, -0.8268795405320025, 0.5623790762907029)]
fn sci_sin_cos_reference(#[case] x: f64, #[case] sin: f64, #[case] cos: f64) {
    init_logs();
    let s = Sinus::new();
    let c = Cosinus::new(s);
    for eps in [EPS, 1e-12] {
        assert_proche(s.calculate(x, eps).unwrap(), sin, eps, &format!("sin({x})"));
        assert_proche(c.calculate(x, eps).unwrap(), cos, eps, &format!("cos({x})"));
    }
}

#[rstest]
#[case(0.1, -2.3025850929940455)]
#[case(0.75, -0.2876820724517809)]
#[case(1.25, 0.22314355131420976)]
#[case(3.0, 1.0986122886681098)]
#[case(1e-3, -6.907755278982137)]
#[case(1e-7, -16.11809565095832)]
#[case(1e10, 23.025850929940457)]
#[case(123456.789, 11.723646487185881)]
fn sci_ln_reference(#[case] x: f64, #[case] attendu: f64) {
    init_logs();
    let ln = Ln::new();
    for eps in [EPS, 1e-12] {
        assert_proche(ln.calculate(x, eps).unwrap(), attendu, eps, &format!("ln({x})"));
    }
}

#[rstest]
#[case(3.0, 1.584962500721156, 0.47712125471966244, 0.6826061944859854)]
#[case(1e-3, -9.965784284662087, -3.0, -4.29202967422018)]
#[case(7.5, 2.9068905956085187, 0.8750612633917001, 1.2519296364125923)]
#[case(1e-4, -13.287712379549449, -4.0, -5.722706232293572)]
fn sci_log_bases_fixes(#[case] x: f64, #[case] l2: f64, #[case] l10: f64, #[case] l5: f64) {
    let ln = Ln::new();
    assert_proche(Logarithme::log2(ln).calculate(x, EPS).unwrap(), l2, EPS, "log2");
    assert_proche(Logarithme::log10(ln).calculate(x, EPS).unwrap(), l10, EPS, "log10");
    assert_proche(Logarithme::log5(ln).calculate(x, EPS).unwrap(), l5, EPS, "log5");
}

#[test]
fn sci_scenarios_concrets() {
    let ln = Ln::new();
    assert_eq!(ln.calculate(1.0, EPS).unwrap(), 0.0);
    assert_proche(ln.calculate(2.718281828459045, EPS).unwrap(), 1.0, EPS, "ln(e)");
    assert_proche(Sinus::new().calculate(FRAC_PI_2, EPS).unwrap(), 1.0, EPS, "sin(π/2)");
}

/* ------------------------ Système ------------------------ */

#[rstest]
#[case(-0.3, 22.899964874323114)]
#[case(-1.0, 35.90783037178472)]
#[case(-2.0, 16.491252709934514)]
#[case(-4.0, 20.611337392232937)]
#[case(0.5, 3.4243856033547933)]
#[case(2.0, -0.03902750411995515)]
#[case(8.0, 10.038991785344649)]
#[case(10.0, 12.926457804415943)]
#[case(100.0, 63.21104052358528)]
fn sci_systeme_reference(#[case] x: f64, #[case] attendu: f64) {
    init_logs();
    let (neg, pos) = (BrancheNegative::default(), BranchePositive::default());
    let sys = Systeme::new(&neg, &pos);

    assert_proche(sys.calculate(x, 1e-10).unwrap(), attendu, 1e-10, &format!("S({x}) fin"));
    assert_proche(sys.calculate(x, EPS).unwrap(), attendu, EPS, &format!("S({x})"));
}

#[rstest]
#[case(-3.0, 38.83009509004676)]
#[case(-3.1, 533.209445047162)]
#[case(-1.5, 46006.42638843677)]
#[case(-0.01, 10203.377076492583)]
fn sci_systeme_pres_des_asymptotes(#[case] x: f64, #[case] attendu: f64) {
    let (neg, pos) = (BrancheNegative::default(), BranchePositive::default());
    let sys = Systeme::new(&neg, &pos);
    assert_proche(sys.calculate(x, EPS).unwrap(), attendu, EPS, &format!("S({x})"));
}

#[test]
fn sci_systeme_domaine() {
    let (neg, pos) = (BrancheNegative::default(), BranchePositive::default());
    let sys = Systeme::new(&neg, &pos);

    assert!(!sys.is_in_domain(0.0));
    assert!(matches!(
        sys.calculate(0.0, EPS),
        Err(ErreurNoyau::Domaine { x, .. }) if x == 0.0
    ));
    for k in 1..=8 {
        let x = -(k as f64) * FRAC_PI_2;
        assert!(!sys.is_in_domain(x), "k={k}");
        assert!(sys.calculate(x, EPS).unwrap_err().est_domaine());
    }
}

/* ------------------------ Identités ------------------------ */

#[test]
fn sci_pythagore_et_inverses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let s = Sinus::new();
    let c = Cosinus::new(s);
    let sec = Secante::new(c);
    let csc = Cosecante::new(s);

    let mut x = -20.0;
    while x <= 20.0 {
        budget(t0, max);

        let (sv, cv) = (s.calculate(x, 1e-12).unwrap(), c.calculate(x, 1e-12).unwrap());
        assert_proche(sv * sv + cv * cv, 1.0, 1e-10, &format!("sin²+cos² en {x}"));

        if sec.est_defini(x, 1e-3) {
            let v = sec.calculate(x, 1e-12).unwrap();
            assert_proche(v * cv, 1.0, 1e-9, &format!("sec·cos en {x}"));
        }
        if csc.est_defini(x, 1e-3) {
            let v = csc.calculate(x, 1e-12).unwrap();
            assert_proche(v * sv, 1.0, 1e-9, &format!("csc·sin en {x}"));
        }
        x += 0.173;
    }
}

#[test]
fn sci_symetries_et_periodicite() {
    let s = Sinus::new();
    let c = Cosinus::new(s);
    for x in [0.3, 1.7, 2.9, 5.5, 12.0] {
        let (sx, cx) = (s.calculate(x, EPS).unwrap(), c.calculate(x, EPS).unwrap());
        assert_proche(s.calculate(-x, EPS).unwrap(), -sx, EPS, "sin impaire");
        let periode = s.calculate(x + 2.0 * PI, EPS).unwrap();
        assert_proche(periode, sx, 2.0 * EPS, "sin 2π-périodique");
        assert_eq!(c.calculate(-x, EPS).unwrap(), cx, "cos paire en {x}");
    }
}

#[test]
fn sci_changement_de_base_coherent() {
    let ln = Ln::new();
    let l2 = ln.change_base(2.0).unwrap();
    let l3 = ln.change_base(3.0).unwrap();
    let retour = l3.change_base(E).unwrap();

    for x in [0.01, 0.9, 2.0, 7.0, 81.0, 1e8] {
        // log₃(x) = log₂(x) / log₂(3)
        let attendu = l2.calculate(x, 1e-12).unwrap() / l2.calculate(3.0, 1e-12).unwrap();
        assert_proche(l3.calculate(x, EPS).unwrap(), attendu, EPS, &format!("log3({x})"));
        let naturel = ln.calculate(x, EPS).unwrap();
        assert_proche(retour.calculate(x, EPS).unwrap(), naturel, EPS, "retour en base e");
    }
}

#[test]
fn sci_chaine_de_derivees_bornee() {
    // sin : quatre dérivées successives reviennent à sin, sans fin
    let mut f = Sinus::new().derivative().unwrap();
    for _ in 0..40 {
        f = f.derivative().unwrap();
    }
    // sec, csc : deux dérivées puis None
    for d in [Secante::default().derivative(), Cosecante::default().derivative()] {
        let d1 = d.unwrap();
        assert!(d1.derivative().unwrap().derivative().is_none());
    }
}
