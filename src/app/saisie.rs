// src/app/saisie.rs
//
// Lecture des jetons sur un flux ligne par ligne (stdin en pratique).
//
// Contrats :
// - Un jeton = suite de caractères non blancs ; les lignes vides sont sautées.
// - `ignorer_ligne` jette le reste de la ligne courante (jamais la suivante).
// - Nombre : relance sans limite tant que le jeton n’est pas un littéral
//   décimal fini (nan, inf, 1e999 refusés), la ligne est jetée dans les deux cas.
// - Octets non UTF-8 : remplacés (U+FFFD), donc jeton invalide, jamais d’erreur d’E/S.
// - Fin de flux => None, remonté tel quel à l’appelant.

use std::io::{self, BufRead, Write};

use super::vue::{ecrire_invite, ecrire_ligne, MSG_SAISIE_INVALIDE};

/// Résultat de la lecture d’une sélection de menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Numero(i64),
    /// Jeton non entier (conservé pour le journal).
    Invalide(String),
}

pub struct Lecteur<R> {
    source: R,
    octets: Vec<u8>,
    ligne: String,
    pos: usize,
}

impl<R: BufRead> Lecteur<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            octets: Vec::new(),
            ligne: String::new(),
            pos: 0,
        }
    }

    /// Prochain jeton, en lisant autant de lignes que nécessaire.
    pub fn jeton(&mut self) -> io::Result<Option<String>> {
        loop {
            let reste = &self.ligne[self.pos..];
            if let Some(debut) = reste.find(|c: char| !c.is_whitespace()) {
                let apres = &reste[debut..];
                let longueur = apres.find(char::is_whitespace).unwrap_or(apres.len());
                let jeton = apres[..longueur].to_string();
                self.pos += debut + longueur;
                return Ok(Some(jeton));
            }

            self.octets.clear();
            self.pos = 0;
            if self.source.read_until(b'\n', &mut self.octets)? == 0 {
                self.ligne.clear();
                return Ok(None);
            }
            self.ligne = String::from_utf8_lossy(&self.octets).into_owned();
        }
    }

    pub fn ignorer_ligne(&mut self) {
        self.pos = self.ligne.len();
    }

    /// Jeton de sélection. Le reste de la ligne est laissé en place.
    pub fn lire_selection(&mut self) -> io::Result<Option<Selection>> {
        Ok(self.jeton()?.map(|j| match j.parse::<i64>() {
            Ok(n) => Selection::Numero(n),
            Err(_) => Selection::Invalide(j),
        }))
    }

    /// Affiche `message` puis lit un flottant ; relance sur saisie invalide.
    pub fn lire_nombre<W: Write>(
        &mut self,
        sortie: &mut W,
        message: &str,
    ) -> io::Result<Option<f64>> {
        loop {
            ecrire_invite(sortie, message)?;

            let Some(jeton) = self.jeton()? else {
                return Ok(None);
            };
            self.ignorer_ligne();

            match litteral_fini(&jeton) {
                Some(v) => return Ok(Some(v)),
                None => {
                    tracing::debug!(jeton = %jeton, "saisie numérique rejetée");
                    ecrire_ligne(sortie, MSG_SAISIE_INVALIDE)?;
                }
            }
        }
    }
}

/// Littéral décimal fini : [signe] chiffres [. chiffres] [e [signe] chiffres].
/// Refuse nan / inf / infinity (grammaire Rust trop large) et les dépassements (1e999).
fn litteral_fini(jeton: &str) -> Option<f64> {
    let corps = jeton.strip_prefix(['+', '-']).unwrap_or(jeton);
    let debut_ok = match corps.as_bytes() {
        [c, ..] if c.is_ascii_digit() => true,
        [b'.', c, ..] => c.is_ascii_digit(),
        _ => false,
    };
    if !debut_ok || !corps.bytes().all(|c| c.is_ascii_digit() || b".eE+-".contains(&c)) {
        return None;
    }

    jeton.parse::<f64>().ok().filter(|v| v.is_finite())
}
