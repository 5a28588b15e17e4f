// src/lib.rs
//
// Système de fonctions : bibliothèque
// ---------------------------------
// But:
// - Évaluer sin, cos, sec, csc, ln, log_b à une tolérance absolue ε fournie par l’appelant
// - Composer ces fonctions en une fonction système par morceaux (signe de x)
//
// Hors bibliothèque : ligne de commande, export CSV (collaborateurs externes).

pub mod noyau;

pub use noyau::erreur::{ErreurNoyau, Resultat};
pub use noyau::fonction::{Fonction, Logarithmique, Parite, Trigonometrique};
pub use noyau::ln::Ln;
pub use noyau::logarithme::{Base, BaseConnue, Logarithme};
pub use noyau::reglages::{Reglages, EPSILON_DEFAUT};
pub use noyau::sinus::Sinus;
pub use noyau::systeme::{Branche, BrancheNegative, BranchePositive, Systeme};
pub use noyau::trig::{Cosecante, Cosinus, FonctionTrig, FormeTrig, Secante};
