//! Noyau — façade d'évaluation (pipeline réel)
//!
//! entrée brute -> sans blancs -> exposants normalisés -> E scientifique
//!            -> réécriture -> garde anti-lettres -> jetons -> descente -> format
//!
//! Contrat : `evaluer` rend TOUJOURS une chaîne, jamais de panique.
//! - division par zéro        -> "Division by Zero"
//! - NaN / infini             -> "Math Error"
//! - tout le reste en échec   -> "Error"

use log::debug;

use super::analyse::analyse;
use super::erreur::ErreurCalc;
use super::exposants::normalise_exposants;
use super::fonctions;
use super::format::formate_resultat;
use super::jetons::{format_tokens, tokenize};
use super::reecriture::reecrit;

/// Mode d'angle pour sin/cos/tan et leurs inverses.
/// (Les hyperboliques restent en radians quel que soit le mode.)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

/// Moteur d'évaluation : un par "session calculatrice".
///
/// Le mode d'angle est le SEUL état mutable ; il se change entre deux
/// évaluations, jamais pendant (pas de verrou interne).
#[derive(Clone, Debug, Default)]
pub struct Moteur {
    mode: ModeAngle,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode
    }

    pub fn set_mode_angle(&mut self, mode: ModeAngle) {
        self.mode = mode;
    }

    /// API publique : évalue une expression libre et retourne soit un nombre
    /// formaté, soit un des statuts fixes "Error" / "Division by Zero" /
    /// "Math Error". Les appelants ne doivent brancher QUE sur ces trois
    /// chaînes (le détail éventuel part dans les traces, pas dans le retour).
    pub fn evaluer(&self, expression: &str) -> String {
        match self.evaluer_nombre(expression) {
            Ok(v) => formate_resultat(v),
            Err(ErreurCalc::DivisionParZero) => "Division by Zero".to_string(),
            Err(ErreurCalc::ResultatNonFini) => "Math Error".to_string(),
            Err(e) => {
                debug!("évaluation échouée: {e}");
                "Error".to_string()
            }
        }
    }

    /// Pipeline complet -> f64. C'est aussi le point d'entrée RÉCURSIF : la
    /// réécriture rappelle cette fonction sur chaque argument de fonction
    /// (curseur d'analyse jamais partagé entre l'appel externe et interne).
    pub(crate) fn evaluer_nombre(&self, expression: &str) -> Result<f64, ErreurCalc> {
        if expression.trim().is_empty() {
            return Err(ErreurCalc::EntreeVide);
        }

        // 1) blancs retirés partout
        let sans_blancs: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

        // 2) glyphes exposants -> base^exposant
        let normalise = normalise_exposants(&sans_blancs);

        // 3) notation scientifique : E (latin, sensible à la casse) -> *10^
        let notation = normalise.replace('E', "*10^");
        debug!("normalisé: {notation:?}");

        // 4) réécriture complète (constantes, fonctions, !, racines, nPr/nCr, ^)
        let reduit = reecrit(self, &notation)?;
        debug!("réécrit: {reduit:?}");

        // 5) garde : une lettre restante = nom de fonction mal formé / inconnu
        if reduit.chars().any(|c| c.is_alphabetic()) {
            return Err(ErreurCalc::syntaxe(format!(
                "caractères non consommés dans {reduit:?}"
            )));
        }

        // 6) jetons + descente récursive
        let jetons = tokenize(&reduit)?;
        debug!("jetons: {}", format_tokens(&jetons));
        let v = analyse(&jetons)?;

        if !v.is_finite() {
            return Err(ErreurCalc::ResultatNonFini);
        }
        Ok(v)
    }

    /* ---------- Trig autonome (suit le mode d'angle du moteur) ---------- */

    pub fn sin(&self, x: f64) -> f64 {
        fonctions::sin(self.mode, x)
    }

    pub fn cos(&self, x: f64) -> f64 {
        fonctions::cos(self.mode, x)
    }

    pub fn tan(&self, x: f64) -> f64 {
        fonctions::tan(self.mode, x)
    }

    pub fn asin(&self, x: f64) -> f64 {
        fonctions::asin(self.mode, x)
    }

    pub fn acos(&self, x: f64) -> f64 {
        fonctions::acos(self.mode, x)
    }

    pub fn atan(&self, x: f64) -> f64 {
        fonctions::atan(self.mode, x)
    }
}
