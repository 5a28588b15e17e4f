// src/noyau/logarithme.rs
//
// Couche logarithmique dérivée
// ----------------------------
// log_b(x) = ln(x) / ln(b)
// - Base::Naturelle            : ln lui-même
// - Base::Fixe(2 | 5 | 10)     : ln(b) constant précalculé + puissances exactes reconnues
// - Base::Dynamique{b, ln(b)}  : ln(b) calculé une seule fois, à la construction, à 1e-15
//
// Propagation de précision : ln(x) est demandé à ε·|ln b|/10,
// de sorte que l’erreur du quotient reste sous ε quel que soit b.

use std::f64::consts::{E, LN_10, LN_2};

use num_traits::Float;

use super::erreur::{ErreurNoyau, Resultat};
use super::fonction::{Fonction, Logarithmique};
use super::ln::Ln;
use super::reglages::{Reglages, EPSILON_INTERNE};

/// ln 5
const LN_5: f64 = 1.6094379124341003;

/// Deux bases sont « la même » à cette distance près.
const TOLERANCE_BASE: f64 = 1e-10;

/// 10^22 et 5^22 sont les plus grandes puissances exactement représentables.
const PUISSANCE_EXACTE_MAX: i32 = 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseConnue {
    Deux,
    Cinq,
    Dix,
}

impl BaseConnue {
    pub fn valeur(self) -> f64 {
        match self {
            BaseConnue::Deux => 2.0,
            BaseConnue::Cinq => 5.0,
            BaseConnue::Dix => 10.0,
        }
    }

    pub fn ln(self) -> f64 {
        match self {
            BaseConnue::Deux => LN_2,
            BaseConnue::Cinq => LN_5,
            BaseConnue::Dix => LN_10,
        }
    }

    fn depuis(b: f64) -> Option<Self> {
        [BaseConnue::Deux, BaseConnue::Cinq, BaseConnue::Dix]
            .into_iter()
            .find(|c| (c.valeur() - b).abs() < TOLERANCE_BASE)
    }

    fn nom(self) -> &'static str {
        match self {
            BaseConnue::Deux => "log_2",
            BaseConnue::Cinq => "log_5",
            BaseConnue::Dix => "log_10",
        }
    }

    /// k si x = b^k exactement (k entier), sinon None.
    fn exposant_exact(self, x: f64) -> Option<f64> {
        match self {
            BaseConnue::Deux => {
                let (mantisse, exposant, _) = Float::integer_decode(x);
                if !mantisse.is_power_of_two() {
                    return None;
                }
                Some(f64::from(i32::from(exposant) + mantisse.trailing_zeros() as i32))
            }
            BaseConnue::Cinq | BaseConnue::Dix => {
                if x < 1.0 || x.fract() != 0.0 {
                    return None;
                }
                let b = self.valeur();
                let mut p = 1.0;
                for k in 0..=PUISSANCE_EXACTE_MAX {
                    if p == x {
                        return Some(f64::from(k));
                    }
                    if p > x {
                        return None;
                    }
                    p *= b;
                }
                None
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Base {
    Naturelle,
    Fixe(BaseConnue),
    Dynamique { base: f64, ln_base: f64 },
}

impl Base {
    pub fn valeur(&self) -> f64 {
        match self {
            Base::Naturelle => E,
            Base::Fixe(c) => c.valeur(),
            Base::Dynamique { base, .. } => *base,
        }
    }

    pub fn ln(&self) -> f64 {
        match self {
            Base::Naturelle => 1.0,
            Base::Fixe(c) => c.ln(),
            Base::Dynamique { ln_base, .. } => *ln_base,
        }
    }
}

/// Évaluateur log_b au-dessus du moteur ln.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logarithme {
    ln: Ln,
    base: Base,
}

impl Logarithme {
    pub fn naturel(ln: Ln) -> Self {
        Self {
            ln,
            base: Base::Naturelle,
        }
    }

    pub fn log2(ln: Ln) -> Self {
        Self::fixe(ln, BaseConnue::Deux)
    }

    pub fn log5(ln: Ln) -> Self {
        Self::fixe(ln, BaseConnue::Cinq)
    }

    pub fn log10(ln: Ln) -> Self {
        Self::fixe(ln, BaseConnue::Dix)
    }

    pub fn fixe(ln: Ln, base: BaseConnue) -> Self {
        Self {
            ln,
            base: Base::Fixe(base),
        }
    }

    /// log_b quelconque : reconnaît e, 2, 5, 10 ; sinon base dynamique.
    pub fn avec_base(ln: Ln, base: f64) -> Resultat<Self> {
        Self::naturel(ln).change_base(base)
    }

    pub fn type_base(&self) -> Base {
        self.base
    }

    pub fn moteur(&self) -> Ln {
        self.ln
    }
}

fn verifier_base(b: f64) -> Resultat<f64> {
    if !b.is_finite() {
        return Err(ErreurNoyau::parametre("base", b, "doit être finie"));
    }
    if b <= 0.0 {
        return Err(ErreurNoyau::parametre("base", b, "doit être strictement positive"));
    }
    if b == 1.0 {
        return Err(ErreurNoyau::parametre("base", b, "doit être différente de 1"));
    }
    Ok(b)
}

impl Fonction for Logarithme {
    fn nom(&self) -> &'static str {
        match self.base {
            Base::Naturelle => "ln",
            Base::Fixe(c) => c.nom(),
            Base::Dynamique { .. } => "log_b",
        }
    }

    fn is_in_domain(&self, x: f64) -> bool {
        self.ln.is_in_domain(x)
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !self.is_in_domain(x) {
            return Err(ErreurNoyau::domaine(self.nom(), x, "x ≤ 0 ou non fini"));
        }

        let ln_b = match self.base {
            Base::Naturelle => return Ok(self.ln.evaluer(x, epsilon)),
            Base::Fixe(c) => match c.exposant_exact(x) {
                Some(k) => return Ok(k),
                None => c.ln(),
            },
            Base::Dynamique { ln_base, .. } => ln_base,
        };
        let ln_x = self.ln.evaluer(x, epsilon * ln_b.abs() / 10.0);
        Ok(ln_x / ln_b)
    }
}

impl Logarithmique for Logarithme {
    fn base(&self) -> f64 {
        self.base.valeur()
    }

    fn change_base(&self, nouvelle_base: f64) -> Resultat<Logarithme> {
        let b = verifier_base(nouvelle_base)?;

        if (b - self.base()).abs() < TOLERANCE_BASE {
            return Ok(*self);
        }
        if (b - E).abs() < TOLERANCE_BASE {
            return Ok(Logarithme::naturel(self.ln));
        }
        if let Some(c) = BaseConnue::depuis(b) {
            return Ok(Logarithme::fixe(self.ln, c));
        }

        let ln_base = self.ln.evaluer(b, EPSILON_INTERNE);
        if ln_base == 0.0 {
            return Err(ErreurNoyau::parametre("base", b, "trop proche de 1"));
        }
        log::debug!("changement de base : b = {b}, ln(b) = {ln_base}");

        Ok(Logarithme {
            ln: self.ln,
            base: Base::Dynamique { base: b, ln_base },
        })
    }
}
