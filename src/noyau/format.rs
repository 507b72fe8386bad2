// src/noyau/format.rs
//
// Affichage décimal "simple" : jamais de notation exponentielle.
// - source : la conversion standard de Rust (Display de f64 = plus courte
//   représentation décimale qui re-parse au même double)
// - puis nettoyage : zéros de fin de fraction, point final, "-0" -> "0"
//
// NOTE: Display de f64 n'émet pas d'exposant pour une valeur finie, mais on
// garde un repli en virgule fixe au cas où un marqueur 'e' apparaîtrait.

/* ------------------------ Nettoyage ------------------------ */

fn nettoie(s: &str) -> String {
    let mut out = s.to_string();

    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }

    if out == "-0" {
        return "0".to_string();
    }
    out
}

/// Repli : développement en virgule fixe (17 décimales couvrent la précision
/// d'un double), jamais d'exposant.
fn developpe_fixe(v: f64) -> String {
    nettoie(&format!("{v:.17}"))
}

/* ------------------------ API ------------------------ */

/// Convertit un double en texte décimal simple.
/// - pas de notation exponentielle
/// - zéros de fin retirés, point final retiré
/// - "-0" canonisé en "0"
pub fn vers_decimal_simple(v: f64) -> String {
    let brut = format!("{v}");
    if brut.contains('e') || brut.contains('E') {
        return developpe_fixe(v);
    }
    nettoie(&brut)
}

/// Formate un résultat final :
/// - |v| < 1e-12            -> "0"
/// - quasi-entier (±1e-12)  -> entier le plus proche
/// - sinon                  -> décimal simple
pub fn formate_resultat(v: f64) -> String {
    if v.abs() < 1e-12 {
        return "0".to_string();
    }

    let proche = v.round();
    if (v - proche).abs() < 1e-12 {
        return vers_decimal_simple(proche);
    }

    vers_decimal_simple(v)
}
