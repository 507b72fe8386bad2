// src/noyau/reecriture.rs
//
// Réécriture textuelle : réduit l'expression à des littéraux numériques,
// `+ - * /` et parenthèses. Passes chaînées dans un ordre FIXE :
//   constantes -> fonctions -> factorielles -> racines -> nPr/nCr -> puissances
//
// Chaque passe est un balayage "trouver, substituer, reboucler" : la fonction
// de recherche renvoie None quand plus rien n'est réductible, et une
// substitution n'émet jamais le glyphe qu'elle consomme ; aucune passe ne
// peut donc boucler sur une entrée malformée (le résidu est laissé au
// tokenizer, qui le refusera).
//
// Les arguments de fonctions sont ré-évalués par le pipeline COMPLET
// (Moteur::evaluer_nombre), ce qui autorise sin(2+3) et les appels
// séquentiels non imbriqués.

use super::erreur::ErreurCalc;
use super::eval::{ModeAngle, Moteur};
use super::fonctions;
use super::format::vers_decimal_simple;

/// '√' en UTF-8.
const OCTETS_RACINE: usize = 3;

/// Chaîne complète des passes, sur la sortie du normaliseur d'exposants.
pub fn reecrit(moteur: &Moteur, expr: &str) -> Result<String, ErreurCalc> {
    let s = remplace_constantes(expr);
    let s = developpe_fonctions(moteur, s)?;
    let s = developpe_factorielles(s)?;
    let s = developpe_racines(s)?;
    let s = developpe_arrangements(s)?;
    let s = developpe_puissances(s)?;
    Ok(s)
}

/* ------------------------ Outils de balayage ------------------------ */

fn fini(v: f64) -> Result<f64, ErreurCalc> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::ResultatNonFini)
    }
}

/// Début du run de chiffres se terminant juste avant `fin`.
fn debut_chiffres(oct: &[u8], fin: usize) -> usize {
    let mut i = fin;
    while i > 0 && oct[i - 1].is_ascii_digit() {
        i -= 1;
    }
    i
}

/// Fin du run de chiffres commençant à `debut`.
fn fin_chiffres(oct: &[u8], debut: usize) -> usize {
    let mut i = debut;
    while i < oct.len() && oct[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Début du run chiffres/point se terminant juste avant `fin`.
fn debut_nombre(oct: &[u8], fin: usize) -> usize {
    let mut i = fin;
    while i > 0 && (oct[i - 1].is_ascii_digit() || oct[i - 1] == b'.') {
        i -= 1;
    }
    i
}

/// Fin du run chiffres/point commençant à `debut`.
fn fin_nombre(oct: &[u8], debut: usize) -> usize {
    let mut i = debut;
    while i < oct.len() && (oct[i].is_ascii_digit() || oct[i] == b'.') {
        i += 1;
    }
    i
}

fn contient_chiffre(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

fn parse_f64(s: &str) -> Result<f64, ErreurCalc> {
    s.parse()
        .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {s:?}")))
}

fn parse_entier(s: &str, nom: &str) -> Result<i64, ErreurCalc> {
    s.parse()
        .map_err(|_| ErreurCalc::domaine(format!("{nom}: entier illisible ou trop grand: {s:?}")))
}

/* ------------------------ 1. Constantes ------------------------ */

/// π partout ; 'e' seulement isolé (pas collé à une lettre : pas un
/// morceau de nom de fonction).
fn remplace_constantes(expr: &str) -> String {
    let s = expr.replace('π', &vers_decimal_simple(std::f64::consts::PI));

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == 'e' {
            let avant = i > 0 && chars[i - 1].is_ascii_alphabetic();
            let apres = chars.get(i + 1).is_some_and(|c| c.is_ascii_alphabetic());
            if !avant && !apres {
                out.push_str(&vers_decimal_simple(std::f64::consts::E));
                continue;
            }
        }
        out.push(c);
    }
    out
}

/* ------------------------ 2. Fonctions nommées ------------------------ */

/// Ordre de précédence des noms : un nom plus long qui contient un nom plus
/// court ("asinh" ⊃ "sinh" ⊃ …) doit être consommé d'abord, la recherche
/// étant un simple motif `nom(`.
const FONCTIONS: &[&str] = &[
    "asinh", "acosh", "atanh", // inverses hyperboliques
    "sinh", "cosh", "tanh", // hyperboliques
    "asin", "acos", "atan", // inverses trig
    "sin", "cos", "tan", // trig
    "ln", "log", // logarithmes
    "cbrt", "sqrt", "exp",
];

fn developpe_fonctions(moteur: &Moteur, mut s: String) -> Result<String, ErreurCalc> {
    for nom in FONCTIONS {
        while let Some((debut, fin, argument)) = trouve_appel(&s, nom) {
            let x = moteur.evaluer_nombre(&argument)?;
            let v = fini(applique(moteur.mode_angle(), nom, x))?;
            s.replace_range(debut..fin, &vers_decimal_simple(v));
        }
    }
    Ok(s)
}

/// Première occurrence réductible de `nom(...)` : l'argument ne doit pas
/// contenir de parenthèse imbriquée (elle sera réduite à un tour suivant).
fn trouve_appel(s: &str, nom: &str) -> Option<(usize, usize, String)> {
    let motif = format!("{nom}(");
    let mut depuis = 0;

    while let Some(rel) = s[depuis..].find(&motif) {
        let debut = depuis + rel;
        let arg_debut = debut + motif.len();
        let arg_fin = arg_debut + s[arg_debut..].find(')')?;

        let argument = &s[arg_debut..arg_fin];
        if argument.contains('(') {
            depuis = arg_debut;
            continue;
        }
        return Some((debut, arg_fin + 1, argument.to_string()));
    }
    None
}

fn applique(mode: ModeAngle, nom: &str, x: f64) -> f64 {
    match nom {
        "asinh" => fonctions::asinh(x),
        "acosh" => fonctions::acosh(x),
        "atanh" => fonctions::atanh(x),
        "sinh" => fonctions::sinh(x),
        "cosh" => fonctions::cosh(x),
        "tanh" => fonctions::tanh(x),
        "asin" => fonctions::asin(mode, x),
        "acos" => fonctions::acos(mode, x),
        "atan" => fonctions::atan(mode, x),
        "sin" => fonctions::sin(mode, x),
        "cos" => fonctions::cos(mode, x),
        "tan" => fonctions::tan(mode, x),
        "ln" => fonctions::ln(x),
        "log" => fonctions::log10(x),
        "cbrt" => fonctions::racine_cubique(x),
        "sqrt" => fonctions::racine(x),
        "exp" => fonctions::exp(x),
        _ => f64::NAN,
    }
}

/* ------------------------ 3. Factorielles ------------------------ */

fn developpe_factorielles(mut s: String) -> Result<String, ErreurCalc> {
    while let Some((debut, fin)) = trouve_factorielle(&s) {
        let n = parse_entier(&s[debut..fin - 1], "factorielle")?;
        let v = fonctions::factorielle(n)?;
        s.replace_range(debut..fin, &v.to_string());
    }
    Ok(s)
}

/// `<chiffres>!` ; un '!' sans chiffres devant est laissé au tokenizer.
fn trouve_factorielle(s: &str) -> Option<(usize, usize)> {
    let oct = s.as_bytes();
    for (i, &c) in oct.iter().enumerate() {
        if c != b'!' {
            continue;
        }
        let debut = debut_chiffres(oct, i);
        if debut < i {
            return Some((debut, i + 1));
        }
    }
    None
}

/* ------------------------ 4. Racines ------------------------ */

/// Ordre : n√x d'abord, puis √x (hors ³√), puis ³√x.
fn developpe_racines(mut s: String) -> Result<String, ErreurCalc> {
    while let Some((debut, fin, n, x)) = trouve_racine_indexee(&s)? {
        if n <= 0 {
            // sentinelle NaN du domaine (pas de racine 0-ième) -> Math Error
            return Err(ErreurCalc::ResultatNonFini);
        }
        let v = fini(x.powf(1.0 / n as f64))?;
        s.replace_range(debut..fin, &vers_decimal_simple(v));
    }

    while let Some((debut, fin, x)) = trouve_racine_simple(&s)? {
        let v = fini(fonctions::racine(x))?;
        s.replace_range(debut..fin, &vers_decimal_simple(v));
    }

    while let Some((debut, fin, x)) = trouve_racine_cubique(&s)? {
        let v = fini(fonctions::racine_cubique(x))?;
        s.replace_range(debut..fin, &vers_decimal_simple(v));
    }

    Ok(s)
}

/// `<n>√<nombre>` : indice en chiffres collé à gauche, nombre collé à droite.
fn trouve_racine_indexee(s: &str) -> Result<Option<(usize, usize, i64, f64)>, ErreurCalc> {
    let oct = s.as_bytes();
    let mut pos = 0;

    while let Some(rel) = s[pos..].find('√') {
        let i = pos + rel;
        let debut = debut_chiffres(oct, i);
        let fin = fin_nombre(oct, i + OCTETS_RACINE);

        if debut < i && contient_chiffre(&s[i + OCTETS_RACINE..fin]) {
            let n = parse_entier(&s[debut..i], "indice de racine")?;
            let x = parse_f64(&s[i + OCTETS_RACINE..fin])?;
            return Ok(Some((debut, fin, n, x)));
        }
        pos = i + OCTETS_RACINE;
    }
    Ok(None)
}

/// `√<nombre>`, en sautant un √ précédé de ³ (racine cubique, passe suivante).
fn trouve_racine_simple(s: &str) -> Result<Option<(usize, usize, f64)>, ErreurCalc> {
    let oct = s.as_bytes();
    let mut pos = 0;

    while let Some(rel) = s[pos..].find('√') {
        let i = pos + rel;
        let fin = fin_nombre(oct, i + OCTETS_RACINE);

        if !s[..i].ends_with('³') && contient_chiffre(&s[i + OCTETS_RACINE..fin]) {
            let x = parse_f64(&s[i + OCTETS_RACINE..fin])?;
            return Ok(Some((i, fin, x)));
        }
        pos = i + OCTETS_RACINE;
    }
    Ok(None)
}

/// `³√<nombre>`.
fn trouve_racine_cubique(s: &str) -> Result<Option<(usize, usize, f64)>, ErreurCalc> {
    const MOTIF: &str = "³√";
    let oct = s.as_bytes();
    let mut pos = 0;

    while let Some(rel) = s[pos..].find(MOTIF) {
        let i = pos + rel;
        let apres = i + MOTIF.len();
        let fin = fin_nombre(oct, apres);

        if contient_chiffre(&s[apres..fin]) {
            let x = parse_f64(&s[apres..fin])?;
            return Ok(Some((i, fin, x)));
        }
        pos = apres;
    }
    Ok(None)
}

/* ------------------------ 5. Arrangements / combinaisons ------------------------ */

fn developpe_arrangements(mut s: String) -> Result<String, ErreurCalc> {
    while let Some((debut, fin, op, n, r)) = trouve_arrangement(&s)? {
        let v = match op {
            b'P' => fonctions::arrangement(n, r)?,
            _ => fonctions::combinaison(n, r)?,
        };
        s.replace_range(debut..fin, &v.to_string());
    }
    Ok(s)
}

/// `<n>P<r>` ou `<n>C<r>`, chiffres seulement des deux côtés.
fn trouve_arrangement(s: &str) -> Result<Option<(usize, usize, u8, i64, i64)>, ErreurCalc> {
    let oct = s.as_bytes();
    for (i, &c) in oct.iter().enumerate() {
        if c != b'P' && c != b'C' {
            continue;
        }
        let debut = debut_chiffres(oct, i);
        let fin = fin_chiffres(oct, i + 1);

        if debut < i && fin > i + 1 {
            let n = parse_entier(&s[debut..i], "arrangement/combinaison")?;
            let r = parse_entier(&s[i + 1..fin], "arrangement/combinaison")?;
            return Ok(Some((debut, fin, c, n, r)));
        }
    }
    Ok(None)
}

/* ------------------------ 6. Puissances ------------------------ */

fn developpe_puissances(mut s: String) -> Result<String, ErreurCalc> {
    while let Some((debut, fin, base, expo)) = trouve_puissance(&s)? {
        let v = fini(base.powf(expo))?;
        s.replace_range(debut..fin, &vers_decimal_simple(v));
    }
    Ok(s)
}

/// `<nombre>^<nombre signé>` : base = run chiffres/point collé à gauche
/// (jamais de signe), exposant éventuellement précédé de '-'.
fn trouve_puissance(s: &str) -> Result<Option<(usize, usize, f64, f64)>, ErreurCalc> {
    let oct = s.as_bytes();
    for (i, &c) in oct.iter().enumerate() {
        if c != b'^' {
            continue;
        }
        let debut = debut_nombre(oct, i);

        let mut expo_debut = i + 1;
        if expo_debut < oct.len() && oct[expo_debut] == b'-' {
            expo_debut += 1;
        }
        let fin = fin_nombre(oct, expo_debut);

        if contient_chiffre(&s[debut..i]) && contient_chiffre(&s[expo_debut..fin]) {
            let base = parse_f64(&s[debut..i])?;
            let expo = parse_f64(&s[i + 1..fin])?;
            return Ok(Some((debut, fin, base, expo)));
        }
    }
    Ok(None)
}
