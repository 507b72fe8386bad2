// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// - DivisionParZero et ResultatNonFini ont leur propre variante : la façade
//   doit pouvoir les distinguer des erreurs de syntaxe ("Division by Zero" /
//   "Math Error" vs "Error").
// - Domaine : réservée aux fonctions autonomes (factorielle, nPr/nCr,
//   conversions de bases, décalages). Jamais convertie en chaîne de statut,
//   l'appelant direct la gère.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error("entrée vide")]
    EntreeVide,

    #[error("division par zéro")]
    DivisionParZero,

    /// NaN ou infini produit pendant la réécriture ou l'évaluation.
    #[error("résultat non fini")]
    ResultatNonFini,

    /// Toute erreur de syntaxe : caractère inattendu, parenthèses
    /// déséquilibrées, jeton en trop, nombre illisible…
    #[error("syntaxe: {0}")]
    Syntaxe(String),

    /// Argument hors domaine d'une fonction autonome.
    #[error("domaine: {0}")]
    Domaine(String),
}

impl ErreurCalc {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurCalc::Syntaxe(msg.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        ErreurCalc::Domaine(msg.into())
    }
}
