// src/app/vue.rs
//
// Vue (console)
// -------------
// Tout le texte affiché sur stdout passe par ici :
// - bloc menu (13 lignes) + invite de sélection
// - invites d’opérandes (sans retour à la ligne)
// - "Result: …" / "Error: …" / diagnostics sur une ligne
//
// Note :
// - flush après chaque invite (stdout est bufferisé par ligne)

use std::io::{self, Write};

use crate::noyau::{format_defaut, ErreurCalcul, Operation};

use super::etat::SELECTION_QUITTER;

pub const INVITE_SELECTION: &str = "Enter your selection: ";
pub const MSG_SAISIE_INVALIDE: &str = "Invalid input. Please enter a valid number.";
pub const MSG_SELECTION_INVALIDE: &str = "Invalid selection. Please choose a valid option.";
pub const MSG_AU_REVOIR: &str = "Exiting the calculator. Goodbye!";

/* ------------------------ Menu ------------------------ */

pub fn ecrire_menu<W: Write>(w: &mut W) -> io::Result<()> {
    for (i, op) in Operation::TOUTES.iter().enumerate() {
        writeln!(w, "{}. {}", i + 1, op.libelle())?;
    }
    writeln!(w, "{SELECTION_QUITTER}. Exit")?;
    ecrire_invite(w, INVITE_SELECTION)
}

pub fn ecrire_invite<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    write!(w, "{message}")?;
    w.flush()
}

/// Invites d’opérandes, dans l’ordre de lecture (1 ou 2 selon l’arité).
pub fn invites(op: Operation) -> &'static [&'static str] {
    use Operation::*;
    match op {
        Sinus => &["Enter the value (in radians) for sine: "],
        Cosinus => &["Enter the value (in radians) for cosine: "],
        Tangente => &["Enter the value (in radians) for tangent: "],
        Exponentielle => &["Enter the value for exponential: "],
        Logarithme => &["Enter the value for logarithm: "],
        RacineCarree => &["Enter the value for square root: "],
        Puissance => &["Enter the base value: ", "Enter the exponent value: "],
        PartieFractionnaire => &["Enter the value to get its fractional part: "],
        Addition | Soustraction | Multiplication => {
            &["Enter the first number: ", "Enter the second number: "]
        }
        Division => &["Enter the dividend: ", "Enter the divisor: "],
    }
}

/* ------------------------ Sorties ------------------------ */

pub fn ecrire_resultat<W: Write>(w: &mut W, valeur: f64, precision: usize) -> io::Result<()> {
    writeln!(w, "Result: {}", format_defaut(valeur, precision))
}

pub fn ecrire_erreur<W: Write>(w: &mut W, erreur: ErreurCalcul) -> io::Result<()> {
    writeln!(w, "Error: {erreur}")
}

pub fn ecrire_ligne<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(w, "{message}")
}
