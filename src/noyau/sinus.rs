// src/noyau/sinus.rs
//
// Moteur sin (feuille)
// --------------------
// - Réduction modulo 2π vers [-π, π] (Taylor brut est lent et instable pour |x| ≫ π)
//   2π en deux morceaux (haut + bas) : le reste est exact jusqu’à |x| = 2^30, fmod au-delà
// - Repli sin(r) = sin(±π - r) vers [-π/2, π/2] : soustraction exacte, pas de perte près de ±π
// - Taylor : x - x³/3! + x⁵/5! - … par récurrence terme_{n+1} = -terme_n · x² / ((2n)(2n+1))
// - Arrêt : |terme| ≤ ε (le terme testé est déjà sommé), plafond configurable
//
// cos(x) = sin(x + π/2) = sin(π/2 - |x|) : même série, sans arrondir x + π/2.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::erreur::{ErreurNoyau, Resultat};
use super::fonction::{Fonction, Parite, Trigonometrique};
use super::reglages::{Reglages, ITERATIONS_SINUS_DEFAUT};
use super::serie::sommer;
use super::trig::{FonctionTrig, FormeTrig};

/// Parties basses : constante ≈ std + BAS (Cody-Waite).
const TAU_BAS: f64 = 2.4492935982947064e-16;
const PI_BAS: f64 = 1.2246467991473532e-16;
const FRAC_PI_2_BAS: f64 = 6.123233995736766e-17;

/// Au-delà, n·2π ne tient plus en deux morceaux.
const REDUCTION_FINE_MAX: f64 = 1_073_741_824.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sinus {
    iterations_max: usize,
}

impl Default for Sinus {
    fn default() -> Self {
        Self::new()
    }
}

impl Sinus {
    pub fn new() -> Self {
        Self {
            iterations_max: ITERATIONS_SINUS_DEFAUT,
        }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            iterations_max: reglages.iterations_sinus,
        }
    }

    /// sin(x) sans validation : x fini et ε > 0 sont à la charge de l’appelant.
    pub(crate) fn evaluer(&self, x: f64, epsilon: f64) -> f64 {
        let (r, bas) = reduire(x);
        let y = if r > FRAC_PI_2 {
            (PI - r) + (PI_BAS - bas)
        } else if r < -FRAC_PI_2 {
            (-PI - r) - (PI_BAS + bas)
        } else {
            r + bas
        };
        self.serie(y, epsilon)
    }

    /// cos(x) sans validation, par déphasage de la même série.
    pub(crate) fn evaluer_cos(&self, x: f64, epsilon: f64) -> f64 {
        let (r, bas) = reduire(x);
        // |r + bas| = |r| ± bas ; π/2 - |r| est exact dès que |r| ≥ π/4
        let bas = if r < 0.0 { -bas } else { bas };
        self.serie((FRAC_PI_2 - r.abs()) + (FRAC_PI_2_BAS - bas), epsilon)
    }

    fn serie(&self, y: f64, epsilon: f64) -> f64 {
        let y2 = y * y;
        sommer("sin", y, epsilon, self.iterations_max, |terme, n| {
            let k = (2 * n) as f64;
            -terme * y2 / (k * (k + 1.0))
        })
        .somme
    }
}

/// x mod 2π, ramené dans [-π, π] (à un arrondi près aux bornes).
pub fn reduire_angle(x: f64) -> f64 {
    reduire(x).0
}

/// Reste r + bas ≡ x (mod 2π), |bas| ≤ ulp(r). Impaire : reduire(-x) = -reduire(x).
fn reduire(x: f64) -> (f64, f64) {
    if x.abs() <= REDUCTION_FINE_MAX {
        let n = (x / TAU).round();
        let haut = (-n).mul_add(TAU, x);
        let bas = -n * TAU_BAS;
        let r = haut + bas;
        return (r, bas - (r - haut));
    }

    let mut r = x % TAU;
    if r > PI {
        r -= TAU;
    } else if r < -PI {
        r += TAU;
    }
    (r, 0.0)
}

impl Fonction for Sinus {
    fn nom(&self) -> &'static str {
        "sin"
    }

    fn is_in_domain(&self, x: f64) -> bool {
        x.is_finite()
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !self.is_in_domain(x) {
            return Err(ErreurNoyau::domaine(self.nom(), x, "x non fini"));
        }
        Ok(self.evaluer(x, epsilon))
    }
}

impl Trigonometrique for Sinus {
    fn parity(&self) -> Parite {
        Parite::Impaire
    }

    fn derivative(&self) -> Option<FonctionTrig> {
        Some(FonctionTrig::new(FormeTrig::Cos, *self))
    }
}
