//! src/noyau/reglages.rs
//!
//! Réglages du noyau (tolérances + plafonds d’itérations).
//!
//! Contrats :
//! - Aucune évaluation ici.
//! - Les plafonds sont bornés (anti-gel) : un réglage absurde est ramené dans [1, ITERATIONS_MAX].
//! - ε est validé une seule fois, à l’entrée de chaque `calculate` public.

use super::erreur::{ErreurNoyau, Resultat};

/// Tolérance par défaut proposée aux appelants.
pub const EPSILON_DEFAUT: f64 = 1e-6;

/// Précision interne pour les constantes calculées une fois (ln(base), ln 2).
pub const EPSILON_INTERNE: f64 = 1e-15;

/// Tolérance de singularité quand aucun ε n’est disponible (`is_in_domain`).
pub const TOLERANCE_DOMAINE: f64 = 1e-10;

/// Plafond par défaut de la série de sin (|x| ≤ π : converge bien avant).
pub const ITERATIONS_SINUS_DEFAUT: usize = 1000;

/// Plafond par défaut des deux séries de ln.
pub const ITERATIONS_LN_DEFAUT: usize = 200;

/// Garde-fou : borne haute de tout plafond.
pub const ITERATIONS_MAX: usize = 10_000;

/// En dessous : ln(x) = -ln(1/x).
pub const SEUIL_INVERSION: f64 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reglages {
    pub iterations_sinus: usize,
    pub iterations_ln: usize,
    pub tolerance_domaine: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            iterations_sinus: ITERATIONS_SINUS_DEFAUT,
            iterations_ln: ITERATIONS_LN_DEFAUT,
            tolerance_domaine: TOLERANCE_DOMAINE,
        }
    }
}

impl Reglages {
    pub fn set_iterations_sinus(&mut self, n: usize) {
        self.iterations_sinus = n.clamp(1, ITERATIONS_MAX);
    }

    pub fn set_iterations_ln(&mut self, n: usize) {
        self.iterations_ln = n.clamp(1, ITERATIONS_MAX);
    }

    /// La tolérance de domaine obéit à la même règle que ε.
    pub fn set_tolerance_domaine(&mut self, t: f64) -> Resultat<()> {
        self.tolerance_domaine = Self::verifier_epsilon(t)?;
        Ok(())
    }

    /// ε doit être fini et strictement positif.
    pub fn verifier_epsilon(epsilon: f64) -> Resultat<f64> {
        if !epsilon.is_finite() {
            return Err(ErreurNoyau::parametre("epsilon", epsilon, "doit être fini"));
        }
        if epsilon <= 0.0 {
            return Err(ErreurNoyau::parametre(
                "epsilon",
                epsilon,
                "doit être strictement positif",
            ));
        }
        Ok(epsilon)
    }
}
