// src/noyau/ln.rs
//
// Moteur ln (feuille)
// -------------------
// Aiguillage selon x :
// - |x - 1| ≤ ε                 : 0 (pas de série dégénérée)
// - x < 1e-5 (1/x fini)         : -ln(1/x)
// - 0.5 < x < 1.5               : Taylor ln(1+y), y = x - 1, arrêt |terme| ≤ ε/10
// - sinon                       : x = m·2^k, m ∈ (1, 2] ; ln(x) = ln(m) + k·ln 2
//                                 ln(m) = 2·artanh((m-1)/(m+1)), arrêt |terme| ≤ ε/20
//
// La réduction par puissance de deux garde |y| ≤ 1/3 dans la série artanh :
// le plafond de 200 termes n’est jamais atteint, même pour x proche de 0 ou de f64::MAX.

use std::f64::consts::E;
use std::sync::OnceLock;

use num_traits::Float;

use super::erreur::{ErreurNoyau, Resultat};
use super::fonction::{Fonction, Logarithmique};
use super::logarithme::Logarithme;
use super::reglages::{Reglages, EPSILON_INTERNE, ITERATIONS_LN_DEFAUT, SEUIL_INVERSION};
use super::serie::sommer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ln {
    iterations_max: usize,
}

impl Default for Ln {
    fn default() -> Self {
        Self::new()
    }
}

impl Ln {
    pub fn new() -> Self {
        Self {
            iterations_max: ITERATIONS_LN_DEFAUT,
        }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            iterations_max: reglages.iterations_ln,
        }
    }

    /// ln(x) sans validation : x > 0 fini et ε > 0 sont à la charge de l’appelant.
    pub(crate) fn evaluer(&self, x: f64, epsilon: f64) -> f64 {
        if (x - 1.0).abs() <= epsilon {
            return 0.0;
        }

        if x < SEUIL_INVERSION {
            let inverse = 1.0 / x;
            // sous-normaux : 1/x déborde, la décomposition ci-dessous s’en charge
            if inverse.is_finite() {
                return -self.evaluer(inverse, epsilon);
            }
        }

        if x > 0.5 && x < 1.5 {
            return serie_directe(x - 1.0, epsilon, self.iterations_max);
        }

        let (m, k) = decomposer(x);
        let ln_m = serie_artanh(m, epsilon, self.iterations_max);
        if k == 0 {
            return ln_m;
        }

        log::debug!("ln : x = {x:e} réduit en m = {m} · 2^{k}");
        ln_m + f64::from(k) * ln_2()
    }
}

/// x = m·2^k avec m ∈ (1, 2] : 2^k est la plus grande puissance de deux strictement sous x.
pub(crate) fn decomposer(x: f64) -> (f64, i32) {
    // x = mantisse · 2^exposant (exact, sous-normaux compris)
    let (mantisse, exposant, _) = Float::integer_decode(x);
    let bits = 64 - mantisse.leading_zeros() as i32;
    let k = i32::from(exposant) + bits - 1;

    if mantisse.is_power_of_two() {
        // x = 2^k exactement : on descend d’un cran pour rester strictement dessous
        return (2.0, k - 1);
    }

    let m = mantisse as f64 / 2f64.powi(bits - 1);
    (m, k)
}

/// ln(1+y) = y - y²/2 + y³/3 - …
fn serie_directe(y: f64, epsilon: f64, max_termes: usize) -> f64 {
    sommer("ln(1+y)", y, epsilon / 10.0, max_termes, |terme, n| {
        let n = n as f64;
        -terme * y * n / (n + 1.0)
    })
    .somme
}

/// ln(m) = 2·(y + y³/3 + y⁵/5 + …), y = (m-1)/(m+1)
fn serie_artanh(m: f64, epsilon: f64, max_termes: usize) -> f64 {
    let y = (m - 1.0) / (m + 1.0);
    let y2 = y * y;

    let s = sommer("artanh", y, epsilon / 20.0, max_termes, |terme, n| {
        let k = (2 * n) as f64;
        terme * y2 * (k - 1.0) / (k + 1.0)
    });
    2.0 * s.somme
}

static LN_2: OnceLock<f64> = OnceLock::new();

/// ln 2, calculé une fois par la série artanh à précision interne.
pub(crate) fn ln_2() -> f64 {
    *LN_2.get_or_init(|| serie_artanh(2.0, EPSILON_INTERNE, ITERATIONS_LN_DEFAUT))
}

impl Fonction for Ln {
    fn nom(&self) -> &'static str {
        "ln"
    }

    fn is_in_domain(&self, x: f64) -> bool {
        x > 0.0 && x.is_finite()
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !self.is_in_domain(x) {
            let raison = if x.is_nan() || x.is_infinite() {
                "x non fini"
            } else {
                "x ≤ 0"
            };
            return Err(ErreurNoyau::domaine(self.nom(), x, raison));
        }
        Ok(self.evaluer(x, epsilon))
    }
}

impl Logarithmique for Ln {
    fn base(&self) -> f64 {
        E
    }

    fn change_base(&self, nouvelle_base: f64) -> Resultat<Logarithme> {
        Logarithme::naturel(*self).change_base(nouvelle_base)
    }
}
