// src/noyau/erreur.rs
//
// Deux familles d’erreurs, locales et déterministes (jamais réessayées) :
// - Domaine           : x hors du domaine mathématique (y compris quasi-singularité relative à ε)
// - ParametreInvalide : ε non strictement positif / non fini, base de logarithme invalide

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurNoyau {
    #[error("{fonction} : x = {x} hors domaine ({raison})")]
    Domaine {
        fonction: &'static str,
        x: f64,
        raison: String,
    },

    #[error("paramètre {parametre} invalide : {valeur} ({raison})")]
    ParametreInvalide {
        parametre: &'static str,
        valeur: f64,
        raison: &'static str,
    },
}

pub type Resultat<T> = Result<T, ErreurNoyau>;

impl ErreurNoyau {
    pub fn domaine(fonction: &'static str, x: f64, raison: impl Into<String>) -> Self {
        ErreurNoyau::Domaine {
            fonction,
            x,
            raison: raison.into(),
        }
    }

    pub fn parametre(parametre: &'static str, valeur: f64, raison: &'static str) -> Self {
        ErreurNoyau::ParametreInvalide {
            parametre,
            valeur,
            raison,
        }
    }

    pub fn est_domaine(&self) -> bool {
        matches!(self, ErreurNoyau::Domaine { .. })
    }
}
