// src/noyau/fonctions.rs
//
// Fonctions scientifiques autonomes.
// - sin/cos/tan et leurs inverses respectent le mode d'angle
// - hyperboliques et inverses hyperboliques : toujours en radians
// - asin/acos serrent l'argument dans [-1, 1] : politique assumée de
//   tolérance au bruit d'arrondi flottant, documentée comme serrage
//   (atan est total sur ℝ, il n'est pas serré)
// - factorielle / arrangement / combinaison : domaines entiers stricts,
//   erreurs de domaine propagées à l'appelant direct

use super::erreur::ErreurCalc;
use super::eval::ModeAngle;

/* ------------------------ Conversions d'angle ------------------------ */

fn en_radians(mode: ModeAngle, x: f64) -> f64 {
    match mode {
        ModeAngle::Degres => x.to_radians(),
        ModeAngle::Radians => x,
    }
}

fn depuis_radians(mode: ModeAngle, x: f64) -> f64 {
    match mode {
        ModeAngle::Degres => x.to_degrees(),
        ModeAngle::Radians => x,
    }
}

/// Serre dans [-1, 1] (absorbe le bruit d'arrondi, ex: 1.0000000000000002).
fn serre(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/* ------------------------ Trig (mode d'angle) ------------------------ */

pub fn sin(mode: ModeAngle, x: f64) -> f64 {
    en_radians(mode, x).sin()
}

pub fn cos(mode: ModeAngle, x: f64) -> f64 {
    en_radians(mode, x).cos()
}

pub fn tan(mode: ModeAngle, x: f64) -> f64 {
    en_radians(mode, x).tan()
}

pub fn asin(mode: ModeAngle, x: f64) -> f64 {
    depuis_radians(mode, serre(x).asin())
}

pub fn acos(mode: ModeAngle, x: f64) -> f64 {
    depuis_radians(mode, serre(x).acos())
}

pub fn atan(mode: ModeAngle, x: f64) -> f64 {
    depuis_radians(mode, x.atan())
}

/* ------------------------ Hyperboliques (radians) ------------------------ */

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

pub fn acosh(x: f64) -> f64 {
    x.acosh()
}

pub fn atanh(x: f64) -> f64 {
    x.atanh()
}

/* ------------------------ Log / exp / racines ------------------------ */

pub fn ln(x: f64) -> f64 {
    x.ln()
}

pub fn log10(x: f64) -> f64 {
    x.log10()
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

pub fn racine(x: f64) -> f64 {
    x.sqrt()
}

pub fn racine_cubique(x: f64) -> f64 {
    x.cbrt()
}

/* ------------------------ Domaines entiers ------------------------ */

/// Factorielle entière, domaine 0..=20 (20! tient exactement dans u64).
pub fn factorielle(n: i64) -> Result<u64, ErreurCalc> {
    if !(0..=20).contains(&n) {
        return Err(ErreurCalc::domaine(format!(
            "factorielle: n={n} hors de 0..=20"
        )));
    }

    let mut acc: u64 = 1;
    for k in 2..=n as u64 {
        acc *= k;
    }
    Ok(acc)
}

fn verifie_nr(nom: &str, n: i64, r: i64) -> Result<(u64, u64), ErreurCalc> {
    if n < 0 || r < 0 || r > n || n > 20 {
        return Err(ErreurCalc::domaine(format!(
            "{nom}: il faut 0 <= r <= n <= 20 (n={n}, r={r})"
        )));
    }
    Ok((n as u64, r as u64))
}

/// Arrangements (nPr) : n*(n-1)*…*(n-r+1).
pub fn arrangement(n: i64, r: i64) -> Result<u64, ErreurCalc> {
    let (n, r) = verifie_nr("arrangement", n, r)?;

    let mut acc: u64 = 1;
    for k in 0..r {
        acc *= n - k;
    }
    Ok(acc)
}

/// Combinaisons (nCr), formule multiplicative incrémentale.
/// r est ramené à min(r, n-r) : moins d'itérations, produits intermédiaires
/// plus petits, et la division par k est exacte à chaque pas.
pub fn combinaison(n: i64, r: i64) -> Result<u64, ErreurCalc> {
    let (n, r) = verifie_nr("combinaison", n, r)?;
    let r = r.min(n - r);

    let mut acc: u64 = 1;
    for k in 1..=r {
        acc = acc * (n - k + 1) / k;
    }
    Ok(acc)
}
