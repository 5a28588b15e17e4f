// src/noyau/trig.rs
//
// Couche trigonométrique dérivée
// ------------------------------
// - cos(x) = sin(x + π/2) : même série que sin => cohérence sin/cos à ε près
// - sec = 1/cos, csc = 1/sin : singularité détectée à l’exécution, relative à ε
// - Près d’une asymptote, l’erreur de 1/u vaut δ/u² : sin et cos sont réévalués
//   à une tolérance resserrée, de sorte que le résultat reste à ε près
// - Dérivées analytiques : une seule énumération FormeTrig, fermée par derivee()
//
// Politique de singularité (unique) :
//   un inverse est indéfini en x pour la tolérance t  <=>  |dénominateur(x) calculé à t| < t
//   - calculate(x, ε)  : t = ε
//   - is_in_domain(x)  : t = tolérance de domaine (1e-10 par défaut)

use super::erreur::{ErreurNoyau, Resultat};
use super::fonction::{Fonction, Parite, Trigonometrique};
use super::reglages::{Reglages, TOLERANCE_DOMAINE};
use super::sinus::Sinus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormeTrig {
    Sin,
    Cos,
    MoinsSin,
    MoinsCos,

    Sec,
    SecTan,     // sec' = sec·tan = sin/cos²
    SecSeconde, // sec'' = sec·tan² + sec³ = (1 + sin²)/cos³

    Csc,
    MoinsCscCot, // csc' = -csc·cot = -cos/sin²
    CscSeconde,  // csc'' = csc·cot² + csc³ = (1 + cos²)/sin³
}

/// Dénominateur dont l’annulation rend la forme indéfinie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Denominateur {
    Cos,
    Sin,
}

impl FormeTrig {
    /// Dérivée suivante. La chaîne ±sin/±cos boucle ;
    /// celles de sec et csc s’arrêtent au second ordre.
    pub fn derivee(self) -> Option<FormeTrig> {
        use FormeTrig::*;
        match self {
            Sin => Some(Cos),
            Cos => Some(MoinsSin),
            MoinsSin => Some(MoinsCos),
            MoinsCos => Some(Sin),

            Sec => Some(SecTan),
            SecTan => Some(SecSeconde),
            SecSeconde => None,

            Csc => Some(MoinsCscCot),
            MoinsCscCot => Some(CscSeconde),
            CscSeconde => None,
        }
    }

    pub fn parite(self) -> Parite {
        use FormeTrig::*;
        match self {
            Sin | MoinsSin | SecTan | Csc | CscSeconde => Parite::Impaire,
            Cos | MoinsCos | Sec | SecSeconde | MoinsCscCot => Parite::Paire,
        }
    }

    pub fn nom(self) -> &'static str {
        use FormeTrig::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            MoinsSin => "-sin",
            MoinsCos => "-cos",
            Sec => "sec",
            SecTan => "sec·tan",
            SecSeconde => "sec''",
            Csc => "csc",
            MoinsCscCot => "-csc·cot",
            CscSeconde => "csc''",
        }
    }

    fn denominateur(self) -> Option<Denominateur> {
        use FormeTrig::*;
        match self {
            Sin | Cos | MoinsSin | MoinsCos => None,
            Sec | SecTan | SecSeconde => Some(Denominateur::Cos),
            Csc | MoinsCscCot | CscSeconde => Some(Denominateur::Sin),
        }
    }

    /// Tolérance des moteurs sin/cos pour une forme juste à ε, quand |dénominateur| ≥ d.
    fn tolerance_resserree(self, epsilon: f64, d: f64) -> f64 {
        use FormeTrig::*;
        let t = match self {
            Sin | Cos | MoinsSin | MoinsCos => epsilon,
            Sec | Csc => epsilon * d * d / 2.0,
            SecTan | MoinsCscCot => epsilon * d.powi(3) / 4.0,
            SecSeconde | CscSeconde => epsilon * d.powi(4) / 10.0,
        };
        t.max(f64::MIN_POSITIVE)
    }
}

/// Une forme trigonométrique liée à son moteur sin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FonctionTrig {
    forme: FormeTrig,
    sinus: Sinus,
    tolerance_domaine: f64,
}

impl FonctionTrig {
    pub fn new(forme: FormeTrig, sinus: Sinus) -> Self {
        Self {
            forme,
            sinus,
            tolerance_domaine: TOLERANCE_DOMAINE,
        }
    }

    fn avec_tolerance(forme: FormeTrig, sinus: Sinus, tolerance_domaine: f64) -> Self {
        Self {
            forme,
            sinus,
            tolerance_domaine,
        }
    }

    pub fn forme(&self) -> FormeTrig {
        self.forme
    }

    fn cos(&self, x: f64, epsilon: f64) -> f64 {
        self.sinus.evaluer_cos(x, epsilon)
    }

    /// Vrai si le dénominateur éventuel n’est pas nul à `tolerance` près.
    pub fn est_defini(&self, x: f64, tolerance: f64) -> bool {
        if !x.is_finite() {
            return false;
        }
        match self.forme.denominateur() {
            None => true,
            Some(Denominateur::Cos) => self.cos(x, tolerance).abs() >= tolerance,
            Some(Denominateur::Sin) => self.sinus.evaluer(x, tolerance).abs() >= tolerance,
        }
    }

    /// Évaluation (x fini, ε validé).
    fn evaluer(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        use FormeTrig::*;

        let mut sin = self.sinus.evaluer(x, epsilon);
        let mut cos = self.cos(x, epsilon);

        if let Some(den) = self.forme.denominateur() {
            let (u, raison) = match den {
                Denominateur::Cos => (cos, "cos(x) ≈ 0"),
                Denominateur::Sin => (sin, "sin(x) ≈ 0"),
            };
            // la décision de singularité se prend à ε, jamais à la tolérance resserrée
            if u.abs() < epsilon {
                log::debug!("{} : singularité en x = {x} (ε = {epsilon:e})", self.forme.nom());
                return Err(ErreurNoyau::domaine(self.forme.nom(), x, raison));
            }

            let fin = self.forme.tolerance_resserree(epsilon, u.abs() / 2.0);
            if fin < epsilon {
                log::trace!("{} : sin/cos réévalués à {fin:e}", self.forme.nom());
                sin = self.sinus.evaluer(x, fin);
                cos = self.cos(x, fin);
            }
        }

        let v = match self.forme {
            Sin => sin,
            Cos => cos,
            MoinsSin => -sin,
            MoinsCos => -cos,

            Sec => 1.0 / cos,
            SecTan => sin / (cos * cos),
            SecSeconde => (1.0 + sin * sin) / (cos * cos * cos),

            Csc => 1.0 / sin,
            MoinsCscCot => -cos / (sin * sin),
            CscSeconde => (1.0 + cos * cos) / (sin * sin * sin),
        };
        Ok(v)
    }
}

impl Fonction for FonctionTrig {
    fn nom(&self) -> &'static str {
        self.forme.nom()
    }

    fn is_in_domain(&self, x: f64) -> bool {
        self.est_defini(x, self.tolerance_domaine)
    }

    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
        let epsilon = Reglages::verifier_epsilon(epsilon)?;
        if !x.is_finite() {
            return Err(ErreurNoyau::domaine(self.nom(), x, "x non fini"));
        }
        self.evaluer(x, epsilon)
    }
}

impl Trigonometrique for FonctionTrig {
    fn parity(&self) -> Parite {
        self.forme.parite()
    }

    fn derivative(&self) -> Option<FonctionTrig> {
        self.forme
            .derivee()
            .map(|f| FonctionTrig::avec_tolerance(f, self.sinus, self.tolerance_domaine))
    }
}

/* ------------------------ Fonctions nommées ------------------------ */

/// Les trois fonctions publiques délèguent à leur FonctionTrig (un seul chemin d’évaluation).
macro_rules! deleguer_trig {
    ($t:ty) => {
        impl Fonction for $t {
            fn nom(&self) -> &'static str {
                self.comme_forme().nom()
            }

            fn is_in_domain(&self, x: f64) -> bool {
                self.comme_forme().is_in_domain(x)
            }

            fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64> {
                self.comme_forme().calculate(x, epsilon)
            }
        }

        impl Trigonometrique for $t {
            fn parity(&self) -> Parite {
                self.comme_forme().parity()
            }

            fn derivative(&self) -> Option<FonctionTrig> {
                self.comme_forme().derivative()
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cosinus {
    sinus: Sinus,
}

impl Cosinus {
    pub fn new(sinus: Sinus) -> Self {
        Self { sinus }
    }

    pub fn sinus(&self) -> Sinus {
        self.sinus
    }

    pub fn comme_forme(&self) -> FonctionTrig {
        FonctionTrig::new(FormeTrig::Cos, self.sinus)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Secante {
    cosinus: Cosinus,
    tolerance_domaine: f64,
}

impl Default for Secante {
    fn default() -> Self {
        Self::new(Cosinus::default())
    }
}

impl Secante {
    pub fn new(cosinus: Cosinus) -> Self {
        Self {
            cosinus,
            tolerance_domaine: TOLERANCE_DOMAINE,
        }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            cosinus: Cosinus::new(Sinus::avec_reglages(reglages)),
            tolerance_domaine: reglages.tolerance_domaine,
        }
    }

    pub fn cosinus(&self) -> Cosinus {
        self.cosinus
    }

    pub fn comme_forme(&self) -> FonctionTrig {
        FonctionTrig::avec_tolerance(FormeTrig::Sec, self.cosinus.sinus, self.tolerance_domaine)
    }

    /// sec défini en x pour la tolérance de l’appelant.
    pub fn est_defini(&self, x: f64, epsilon: f64) -> bool {
        self.comme_forme().est_defini(x, epsilon)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cosecante {
    sinus: Sinus,
    tolerance_domaine: f64,
}

impl Default for Cosecante {
    fn default() -> Self {
        Self::new(Sinus::default())
    }
}

impl Cosecante {
    pub fn new(sinus: Sinus) -> Self {
        Self {
            sinus,
            tolerance_domaine: TOLERANCE_DOMAINE,
        }
    }

    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            sinus: Sinus::avec_reglages(reglages),
            tolerance_domaine: reglages.tolerance_domaine,
        }
    }

    pub fn sinus(&self) -> Sinus {
        self.sinus
    }

    pub fn comme_forme(&self) -> FonctionTrig {
        FonctionTrig::avec_tolerance(FormeTrig::Csc, self.sinus, self.tolerance_domaine)
    }

    pub fn est_defini(&self, x: f64, epsilon: f64) -> bool {
        self.comme_forme().est_defini(x, epsilon)
    }
}

deleguer_trig!(Cosinus);
deleguer_trig!(Secante);
deleguer_trig!(Cosecante);
