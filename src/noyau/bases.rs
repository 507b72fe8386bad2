// src/noyau/bases.rs
//
// Conversions de bases + opérations bit-à-bit sur entiers signés 64 bits.
// - les négatifs s'affichent en complément à deux ({:b}/{:x}/{:o}) ; la
//   lecture repasse par u64 pour que chaque i64 fasse l'aller-retour
// - une saisie "humaine" avec signe ('-1F') est aussi acceptée
// - erreurs de domaine propagées à l'appelant direct (jamais de statut UI)

use super::erreur::ErreurCalc;

/* ------------------------ Vers texte ------------------------ */

pub fn vers_binaire(n: i64) -> String {
    format!("{n:b}")
}

pub fn vers_octal(n: i64) -> String {
    format!("{n:o}")
}

pub fn vers_hexa(n: i64) -> String {
    format!("{n:X}")
}

/* ------------------------ Depuis texte ------------------------ */

fn analyse_base(s: &str, base: u32, nom: &str) -> Result<i64, ErreurCalc> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ErreurCalc::domaine(format!("{nom}: entrée vide")));
    }

    // i64 d'abord (gère le signe), puis u64 pour la forme complément à deux
    match i64::from_str_radix(t, base) {
        Ok(v) => Ok(v),
        Err(_) => u64::from_str_radix(t, base)
            .map(|v| v as i64)
            .map_err(|_| ErreurCalc::domaine(format!("{nom}: chiffres invalides dans {t:?}"))),
    }
}

pub fn depuis_binaire(s: &str) -> Result<i64, ErreurCalc> {
    analyse_base(s, 2, "binaire")
}

pub fn depuis_octal(s: &str) -> Result<i64, ErreurCalc> {
    analyse_base(s, 8, "octal")
}

pub fn depuis_hexa(s: &str) -> Result<i64, ErreurCalc> {
    analyse_base(s, 16, "hexadécimal")
}

/* ------------------------ Bit-à-bit ------------------------ */

pub fn et(a: i64, b: i64) -> i64 {
    a & b
}

pub fn ou(a: i64, b: i64) -> i64 {
    a | b
}

pub fn oux(a: i64, b: i64) -> i64 {
    a ^ b
}

pub fn non(a: i64) -> i64 {
    !a
}

/// Décalage à gauche ; n >= 64 est hors domaine.
pub fn decale_gauche(a: i64, n: u32) -> Result<i64, ErreurCalc> {
    a.checked_shl(n)
        .ok_or_else(|| ErreurCalc::domaine(format!("décalage gauche: n={n} >= 64")))
}

/// Décalage à droite (arithmétique : le signe est conservé) ; n >= 64 hors domaine.
pub fn decale_droite(a: i64, n: u32) -> Result<i64, ErreurCalc> {
    a.checked_shr(n)
        .ok_or_else(|| ErreurCalc::domaine(format!("décalage droite: n={n} >= 64")))
}
