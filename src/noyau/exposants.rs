// src/noyau/exposants.rs
//
// Glyphes exposants -> notation base^exposant
// -------------------------------------------
// Ordre des règles (fixe, une règle ne retraite jamais un '^' déjà produit) :
// 1) le marqueur d'exposant "en attente" est retiré partout
// 2) <base><exposants> -> <base>^<chiffres>   (base : chiffre, ')', π ou e ;
//    exposants : '⁻' optionnel puis chiffres exposants)
//    EXCEPTION : un '³' final suivi de '√' reste en place, c'est l'indice
//    d'une racine cubique (développée plus tard par la réécriture)
// 3) '²' / '³' isolés (non suivis de '√') -> "^2" / "^3"
// 4) repli : glyphes isolés restants (⁻¹, ⁻³, ⁰¹⁴⁵⁶⁷⁸⁹) -> texte simple

/// Marqueur affiché par l'UI pour un exposant pas encore saisi.
pub const MARQUEUR_EXPOSANT: char = '□';

fn chiffre_exposant(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        _ => None,
    }
}

fn est_base(c: char) -> bool {
    c.is_ascii_digit() || c == ')' || c == 'π' || c == 'e'
}

/* ------------------------ Règle 2 : base + exposants ------------------------ */

fn reecrit_avec_base(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;

        if !est_base(c) {
            continue;
        }

        // run d'exposants : '⁻' optionnel puis chiffres exposants
        let mut j = i;
        let mut run = String::new();
        if j < chars.len() && chars[j] == '⁻' {
            run.push('-');
            j += 1;
        }
        let signe_seul = run.len();
        while j < chars.len() {
            match chiffre_exposant(chars[j]) {
                Some(d) => {
                    run.push(d);
                    j += 1;
                }
                None => break,
            }
        }
        if run.len() == signe_seul {
            continue; // pas de chiffres : rien à réécrire ici
        }

        // exception racine cubique : ³ final collé à √
        if j < chars.len() && chars[j] == '√' && chars[j - 1] == '³' {
            run.pop();
            j -= 1;
            if run.len() == signe_seul {
                continue; // il ne restait que ce ³
            }
        }

        out.push('^');
        out.push_str(&run);
        i = j;
    }

    out
}

/* ------------------------ Règle 3 : ² / ³ isolés ------------------------ */

fn reecrit_carres_cubes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if (c == '²' || c == '³') && chars.get(i + 1) != Some(&'√') {
            out.push('^');
            out.push(chiffre_exposant(c).unwrap_or(c));
        } else {
            out.push(c);
        }
    }

    out
}

/* ------------------------ API ------------------------ */

/// Normalise tous les glyphes exposants d'une expression.
pub fn normalise_exposants(expr: &str) -> String {
    // 1) marqueur "en attente" retiré partout
    let s: String = expr.chars().filter(|&c| c != MARQUEUR_EXPOSANT).collect();

    // 2) réécriture avec base
    let s = reecrit_avec_base(&s);

    // 3) ² / ³ isolés (hors indice de racine cubique)
    let s = reecrit_carres_cubes(&s);

    // 4) repli : paires signées puis chiffres isolés
    //    (² et ³ ne sont PAS dans ce repli : le ³ restant appartient à un ³√)
    let s = s.replace("⁻¹", "-1").replace("⁻³", "-3");
    s.chars()
        .map(|c| match c {
            '²' | '³' => c,
            _ => chiffre_exposant(c).unwrap_or(c),
        })
        .collect()
}
