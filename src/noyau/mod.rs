//! Noyau numérique
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées (domaine / paramètre invalide)
//! - reglages.rs   : tolérances par défaut + plafonds d’itérations
//! - fonction.rs   : contrats (Fonction, Trigonometrique, Logarithmique)
//! - serie.rs      : sommation par récurrence de termes (commune aux moteurs)
//! - sinus.rs      : moteur sin (réduction à [-π, π] + Taylor)
//! - trig.rs       : cos, sec, csc + chaîne de dérivées
//! - ln.rs         : moteur ln (réductions + deux régimes de série)
//! - logarithme.rs : log_b (bases connues + changement de base)
//! - systeme.rs    : fonction système par morceaux

pub mod erreur;
pub mod fonction;
pub mod ln;
pub mod logarithme;
pub mod reglages;
pub mod serie;
pub mod sinus;
pub mod systeme;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

/// Installe un logger de test (idempotent). Utile pour voir les `warn!` de troncature.
#[cfg(test)]
pub(crate) fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}
