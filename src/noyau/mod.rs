//! Noyau du moteur scientifique
//!
//! Organisation interne (ordre du pipeline) :
//! - format.rs     : décimal simple (jamais d'exposant) + arrondi quasi-entier
//! - exposants.rs  : glyphes exposants (², ³, ⁻…) -> notation base^exposant
//! - reecriture.rs : constantes, fonctions, !, racines, nPr/nCr, puissances -> littéraux
//! - jetons.rs     : tokenisation (chiffres, `.`, + - * / et parenthèses)
//! - analyse.rs    : descente récursive -> f64
//! - eval.rs       : façade Moteur (mode d'angle + mapping erreurs -> statut)
//! - fonctions.rs  : trig / hyperboliques / log / factorielle / nPr / nCr
//! - bases.rs      : conversions binaire/hexa/octal + opérations bit-à-bit
//! - erreur.rs     : taxonomie ErreurCalc

pub mod analyse;
pub mod bases;
pub mod erreur;
pub mod eval;
pub mod exposants;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod reecriture;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::{ModeAngle, Moteur};
