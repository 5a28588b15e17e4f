// src/noyau/systeme.rs
//
// Fonction système par morceaux
// -----------------------------
// x < 0 : (((sec(x)·csc(x)) / cos(x)) - sec(x))² - sin(x)
// x > 0 : ((log₂(x) + log₁₀(x))² - log₂(x) - log₁₀(x)) - log₅(x)
// x = 0 : exclu des deux branches
//
// L’ordre d’évaluation de chaque formule est celui de l’écriture (gauche à droite) :
// le réordonner change l’erreur flottante accumulée.
//
// Chaque branche évalue en deux passages : le premier, à ε, décide des singularités
// et borne le gain de la formule ; le second redemande chaque entrée à ε/(2·gain).

use super::erreur::{ErreurNoyau, Resultat};
use super::fonction::Fonction;
use super::ln::Ln;
use super::logarithme::Logarithme;
use super::reglages::Reglages;
use super::sinus::Sinus;
use super::trig::{Cosecante, Cosinus, Secante};

/// Index des sous-fonctions, dans l’ordre exposé par le système.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branche {
    Negative,
    Positive,
}

impl Branche {
    pub const TOUTES: [Branche; 2] = [Branche::Negative, Branche::Positive];

    pub fn index(self) -> usize {
        match self {
            Branche::Negative => 0,
            Branche::Positive => 1,
        }
    }

    pub fn depuis_index(index: usize) -> Option<Branche> {
        Self::TOUTES.get(index).copied()
    }

    pub fn domaine(self) -> &'static str {
        match self {
            Branche::Negative => "x ≤ 0, x ≠ 0, -π/2, -π, -3π/2, …",
            Branche::Positive => "x > 0",
        }
    }

    pub fn formule(self) -> &'static str {
        match self {
            Branche::Negative => "(((sec(x) * csc(x)) / cos(x)) - sec(x))^2 - sin(x)",
            Branche::Positive => "((log_2(x) + log_10(x))^2 - log_2(x) - log_10(x)) - log_5(x)",
        }
    }

    /// Branche désignée par le signe de x (None pour 0 et NaN).
    fn selon_signe(x: f64) -> Option<Branche> {
        if x < 0.0 {
            Some(Branche::Negative)
        } else if x > 0.0 {
            Some(Branche::Positive)
        } else {
            None
        }
    }
}

/* ------------------------ Branche négative ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrancheNegative {
    sinus: Sinus,
    cosinus: Cosinus,
    secante: Secante,
    cosecante: Cosecante,
}

impl Default for BrancheNegative {
    fn default() -> Self {
        Self::avec_reglages(&Reglages::default())
    }
}

impl BrancheNegative {
    pub fn new(sinus: Sinus, cosinus: Cosinus, secante: Secante, cosecante: Cosecante) -> Self {
        Self {
            sinus,
            cosinus,
            secante,
            cosecante,
        }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        let sinus = Sinus::avec_reglages(reglages);
        Self {
            sinus,
            cosinus: Cosinus::new(sinus),
            secante: Secante::avec_reglages(reglages),
            cosecante: Cosecante::avec_reglages(reglages),
        }
    }
}

impl Fonction for BrancheNegative {
    fn nom(&self) -> &'static str {
        "systeme[x ≤ 0]"
    }

    fn is_in_domain(&self, x: f64) -> bool {
        x < 0.0 && self.secante.is_in_domain(x) && self.cosecante.is_in_domain(x)
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !self.is_in_domain(x) {
            return Err(ErreurNoyau::domaine(self.nom(), x, Branche::Negative.domaine()));
        }

        // sec en premier : sa singularité (cos ≈ 0 à ε près) court-circuite le reste
        let sec = self.secante.calculate(x, epsilon)?;
        let csc = self.cosecante.calculate(x, epsilon)?;
        let cos = self.cosinus.calculate(x, epsilon)?;

        let fin = tolerance_negative(epsilon, sec, csc, cos);
        let sec = self.secante.calculate(x, fin)?;
        let csc = self.cosecante.calculate(x, fin)?;
        let cos = self.cosinus.calculate(x, fin)?;
        let sin = self.sinus.calculate(x, fin)?;

        let mut v = sec * csc;
        v /= cos;
        v -= sec;
        v *= v;
        Ok(v - sin)
    }
}

/// f = m² - sin avec a = sec·csc/cos, m = a - sec.
/// Σ |∂f/∂entrée| ≤ 1 + 2|m|(1 + |a|(2 + 1/|cos|)).
fn tolerance_negative(epsilon: f64, sec: f64, csc: f64, cos: f64) -> f64 {
    let a = sec * csc / cos;
    let m = (a - sec).abs();
    let gain = 1.0 + 2.0 * m * (1.0 + a.abs() * (2.0 + 1.0 / cos.abs()));
    (epsilon / (2.0 * gain)).max(f64::MIN_POSITIVE)
}

/// f = s² - s - l₅ avec s = l₂ + l₁₀ : Σ |∂f/∂entrée| ≤ 4|s| + 3.
fn tolerance_positive(epsilon: f64, s: f64) -> f64 {
    (epsilon / (2.0 * (4.0 * s.abs() + 4.0))).max(f64::MIN_POSITIVE)
}

/* ------------------------ Branche positive ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchePositive {
    log2: Logarithme,
    log10: Logarithme,
    log5: Logarithme,
}

impl Default for BranchePositive {
    fn default() -> Self {
        Self::avec_reglages(&Reglages::default())
    }
}

impl BranchePositive {
    pub fn new(log2: Logarithme, log10: Logarithme, log5: Logarithme) -> Self {
        Self { log2, log10, log5 }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        let ln = Ln::avec_reglages(reglages);
        Self {
            log2: Logarithme::log2(ln),
            log10: Logarithme::log10(ln),
            log5: Logarithme::log5(ln),
        }
    }
}

impl Fonction for BranchePositive {
    fn nom(&self) -> &'static str {
        "systeme[x > 0]"
    }

    fn is_in_domain(&self, x: f64) -> bool {
        self.log2.is_in_domain(x)
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !self.is_in_domain(x) {
            return Err(ErreurNoyau::domaine(self.nom(), x, Branche::Positive.domaine()));
        }

        let l2 = self.log2.calculate(x, epsilon)?;
        let l10 = self.log10.calculate(x, epsilon)?;

        let fin = tolerance_positive(epsilon, l2 + l10);
        let l2 = self.log2.calculate(x, fin)?;
        let l10 = self.log10.calculate(x, fin)?;
        let l5 = self.log5.calculate(x, fin)?;

        let s = l2 + l10;
        Ok(s * s - l2 - l10 - l5)
    }
}

/* ------------------------ Système ------------------------ */

/// Compose deux sous-fonctions empruntées ; le système ne les modifie jamais.
#[derive(Clone, Copy)]
pub struct Systeme<'a> {
    negative: &'a dyn Fonction,
    positive: &'a dyn Fonction,
}

impl std::fmt::Debug for Systeme<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Systeme")
            .field("negative", &self.negative.nom())
            .field("positive", &self.positive.nom())
            .finish()
    }
}

impl<'a> Systeme<'a> {
    pub fn new(negative: &'a dyn Fonction, positive: &'a dyn Fonction) -> Self {
        Self { negative, positive }
    }

    pub fn negative_branch(&self) -> &'a dyn Fonction {
        self.negative
    }

    pub fn positive_branch(&self) -> &'a dyn Fonction {
        self.positive
    }

    pub fn sub_function_count(&self) -> usize {
        Branche::TOUTES.len()
    }

    fn sous_fonction(&self, branche: Branche) -> &'a dyn Fonction {
        match branche {
            Branche::Negative => self.negative,
            Branche::Positive => self.positive,
        }
    }

    /// Index de la sous-fonction qui s’applique en x, None si x est hors domaine.
    pub fn applicable_sub_function(&self, x: f64) -> Option<usize> {
        Branche::selon_signe(x)
            .filter(|b| self.sous_fonction(*b).is_in_domain(x))
            .map(Branche::index)
    }

    pub fn sub_function_domain(&self, index: usize) -> Option<&'static str> {
        Branche::depuis_index(index).map(Branche::domaine)
    }

    pub fn sub_function_formula(&self, index: usize) -> Option<&'static str> {
        Branche::depuis_index(index).map(Branche::formule)
    }
}

impl Fonction for Systeme<'_> {
    fn nom(&self) -> &'static str {
        "systeme"
    }

    fn is_in_domain(&self, x: f64) -> bool {
        self.applicable_sub_function(x).is_some()
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;

        let Some(branche) = Branche::selon_signe(x) else {
            let raison = if x == 0.0 {
                "x = 0 exclu des deux branches"
            } else {
                "x non fini"
            };
            return Err(ErreurNoyau::domaine(self.nom(), x, raison));
        };

        let f = self.sous_fonction(branche);
        if !f.is_in_domain(x) {
            return Err(ErreurNoyau::domaine(self.nom(), x, branche.domaine()));
        }

        log::trace!("systeme : x = {x} -> branche {}", branche.index());
        f.calculate(x, epsilon).map_err(|e| match e {
            // refus relatif à ε d’une sous-fonction : on garde sa raison, précédée de la branche
            ErreurNoyau::Domaine { fonction, raison, .. } => {
                let raison = format!("{} ; {fonction} : {raison}", branche.domaine());
                ErreurNoyau::domaine(self.nom(), x, raison)
            }
            autre => autre,
        })
    }
}
