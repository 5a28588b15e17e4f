// src/noyau/fonction.rs
//
// Contrats partagés par tous les évaluateurs
// ------------------------------------------
// - Fonction        : calculate(x, ε) + is_in_domain(x)
// - Trigonometrique : période, parité, dérivée (analytique, jamais numérique)
// - Logarithmique   : base + changement de base
//
// Tous les évaluateurs sont des valeurs immuables : aucun état par appel.

use std::f64::consts::TAU;

use super::erreur::{ErreurNoyau, Resultat};
use super::logarithme::Logarithme;
use super::trig::FonctionTrig;

pub trait Fonction: Send + Sync {
    /// Nom court (messages d’erreur, logs).
    fn nom(&self) -> &'static str;

    fn is_in_domain(&self, x: f64) -> bool;

    /// Évalue f(x) à ε près.
    ///
    /// Erreurs : `ParametreInvalide` si ε ≤ 0 ou non fini, `Domaine` si x hors domaine.
    fn calculate(&self, x: f64, epsilon: f64) -> Resultat<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parite {
    Paire,
    Impaire,
    Aucune,
}

pub trait Trigonometrique: Fonction {
    fn period(&self) -> f64 {
        TAU
    }

    fn parity(&self) -> Parite;

    /// None quand la chaîne de dérivées s’arrête (sec''' et csc''' ne sont pas modélisées).
    fn derivative(&self) -> Option<FonctionTrig>;

    fn calculate_in_degrees(&self, degres: f64, epsilon: f64) -> Resultat<f64> {
        self.calculate(degres.to_radians(), epsilon)
    }
}

pub trait Logarithmique: Fonction {
    fn base(&self) -> f64;

    /// Erreur `ParametreInvalide` si la base est ≤ 0, égale à 1 ou non finie.
    fn change_base(&self, nouvelle_base: f64) -> Resultat<Logarithme>;

    /// log(a·b) = log(a) + log(b)
    fn calculate_product(&self, a: f64, b: f64, epsilon: f64) -> Resultat<f64> {
        verifier_arguments(self, &[a, b])?;
        Ok(self.calculate(a, epsilon)? + self.calculate(b, epsilon)?)
    }

    /// log(a/b) = log(a) - log(b)
    fn calculate_quotient(&self, a: f64, b: f64, epsilon: f64) -> Resultat<f64> {
        verifier_arguments(self, &[a, b])?;
        Ok(self.calculate(a, epsilon)? - self.calculate(b, epsilon)?)
    }

    /// log(a^n) = n·log(a)
    fn calculate_power(&self, a: f64, n: f64, epsilon: f64) -> Resultat<f64> {
        verifier_arguments(self, &[a])?;
        if !n.is_finite() {
            return Err(ErreurNoyau::parametre("exposant", n, "doit être fini"));
        }
        Ok(n * self.calculate(a, epsilon)?)
    }
}

fn verifier_arguments<L: Logarithmique + ?Sized>(f: &L, xs: &[f64]) -> Resultat<()> {
    match xs.iter().find(|x| !f.is_in_domain(**x)) {
        Some(x) => Err(ErreurNoyau::domaine(f.nom(), *x, "argument non strictement positif")),
        None => Ok(()),
    }
}
