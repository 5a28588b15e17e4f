// src/noyau/serie.rs
//
// Sommation d’une série par récurrence de termes
// ----------------------------------------------
// - terme_{n+1} = suivant(terme_n, n), n = 1, 2, …
// - chaque terme est ajouté AVANT le test |terme| ≤ seuil (la somme contient le terme testé)
// - plafond d’itérations : au-delà, somme partielle + `tronquee = true` + warn!

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Serie {
    pub somme: f64,
    pub termes: usize,
    pub tronquee: bool,
}

pub fn sommer<F>(nom: &str, premier: f64, seuil: f64, max_termes: usize, mut suivant: F) -> Serie
where
    F: FnMut(f64, usize) -> f64,
{
    let mut somme = 0.0;
    let mut terme = premier;
    let mut n: usize = 1;

    loop {
        somme += terme;

        if terme.abs() <= seuil {
            log::trace!("série {nom} : {n} termes");
            return Serie {
                somme,
                termes: n,
                tronquee: false,
            };
        }

        if n >= max_termes {
            log::warn!(
                "série {nom} tronquée après {n} termes (dernier terme {terme:e}, seuil {seuil:e})"
            );
            return Serie {
                somme,
                termes: n,
                tronquee: true,
            };
        }

        terme = suivant(terme, n);
        n += 1;
    }
}
