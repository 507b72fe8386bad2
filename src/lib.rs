// src/lib.rs
//
// Calculatrice scientifique — moteur seul (pas d'UI ici)
// ------------------------------------------------------
// But:
// - recevoir une expression brute (glyphes π, e, √, ³√, exposants, sin/cos/…, !, P/C, ^)
// - rendre TOUJOURS une chaîne : nombre formaté OU "Error" / "Division by Zero" / "Math Error"
//
// IMPORTANT (structure projet):
// - tout le pipeline vit dans src/noyau/ (un module par étape)
// - ici : racine de crate + ré-exports seulement

pub mod noyau;

pub use noyau::bases;
pub use noyau::erreur::ErreurCalc;
pub use noyau::eval::{ModeAngle, Moteur};
pub use noyau::fonctions;
