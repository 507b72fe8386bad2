// src/noyau/analyse.rs
//
// Descente récursive -> f64
// Grammaire (précédence standard, associativité gauche):
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/') facteur)*
//   facteur    := '(' expression ')' | ('-' | '+') facteur | nombre
//
// Règles:
// - équilibre des parenthèses pré-validé sur TOUT le flux avant la grammaire
// - division par exactement 0.0 : erreur dédiée (jamais confondue avec la syntaxe)
// - '()' vides : erreur explicite
// - jetons restants après l'expression de tête : erreur "jeton inattendu"

use super::erreur::ErreurCalc;
use super::jetons::Tok;

/// Pré-validation : autant d'ouvrantes que de fermantes, solde jamais négatif.
pub fn verifie_parentheses(jetons: &[Tok]) -> Result<(), ErreurCalc> {
    let mut solde: i64 = 0;

    for t in jetons {
        match t {
            Tok::LPar => solde += 1,
            Tok::RPar => {
                solde -= 1;
                if solde < 0 {
                    return Err(ErreurCalc::syntaxe("parenthèse fermante en trop"));
                }
            }
            _ => {}
        }
    }

    if solde != 0 {
        return Err(ErreurCalc::syntaxe("parenthèses non fermées"));
    }
    Ok(())
}

/// Analyse et évalue une suite complète de jetons.
pub fn analyse(jetons: &[Tok]) -> Result<f64, ErreurCalc> {
    verifie_parentheses(jetons)?;

    let mut a = Analyseur { jetons, pos: 0 };
    let v = a.expression()?;

    if a.pos != jetons.len() {
        return Err(ErreurCalc::syntaxe(format!(
            "jeton inattendu en position {}",
            a.pos
        )));
    }
    Ok(v)
}

/// Curseur d'analyse : avance de façon monotone, propriété exclusive
/// d'une invocation (jamais partagé).
struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) {
        self.pos += 1;
    }

    fn expression(&mut self) -> Result<f64, ErreurCalc> {
        let mut acc = self.terme()?;

        loop {
            match self.courant() {
                Some(Tok::Plus) => {
                    self.avance();
                    acc += self.terme()?;
                }
                Some(Tok::Minus) => {
                    self.avance();
                    acc -= self.terme()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn terme(&mut self) -> Result<f64, ErreurCalc> {
        let mut acc = self.facteur()?;

        loop {
            match self.courant() {
                Some(Tok::Star) => {
                    self.avance();
                    acc *= self.facteur()?;
                }
                Some(Tok::Slash) => {
                    self.avance();
                    let diviseur = self.facteur()?;
                    if diviseur == 0.0 {
                        return Err(ErreurCalc::DivisionParZero);
                    }
                    acc /= diviseur;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn facteur(&mut self) -> Result<f64, ErreurCalc> {
        match self.courant() {
            Some(Tok::LPar) => {
                self.avance();

                if matches!(self.courant(), Some(Tok::RPar)) {
                    return Err(ErreurCalc::syntaxe("parenthèses vides"));
                }

                let v = self.expression()?;
                match self.courant() {
                    Some(Tok::RPar) => {
                        self.avance();
                        Ok(v)
                    }
                    _ => Err(ErreurCalc::syntaxe("parenthèse fermante manquante")),
                }
            }

            Some(Tok::Minus) => {
                self.avance();
                Ok(-self.facteur()?)
            }
            Some(Tok::Plus) => {
                self.avance();
                self.facteur()
            }

            Some(Tok::Num(txt)) => {
                let v: f64 = txt
                    .parse()
                    .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: {txt:?}")))?;
                self.avance();
                Ok(v)
            }

            Some(_) => Err(ErreurCalc::syntaxe("jeton inattendu dans un facteur")),
            None => Err(ErreurCalc::syntaxe("expression incomplète")),
        }
    }
}
