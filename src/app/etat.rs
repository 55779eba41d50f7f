//! src/app/etat.rs
//!
//! État du driver (sans vue, sans E/S).
//!
//! Rôle : réglages de la session + machine à états de la boucle
//! (attente menu -> collecte des opérandes -> attente menu ... -> terminé).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau appelé).
//! - Transitions déterministes.
//! - Garde-fou : bornes sur la précision d’affichage.

use crate::noyau::Operation;

/// Précision d’affichage par défaut (chiffres significatifs, comme %g).
const PRECISION_DEFAUT: usize = 6;

/// Bornes : au-delà de 17 chiffres un f64 n’a plus rien à dire.
const PRECISION_MIN: usize = 1;
const PRECISION_MAX: usize = 17;

/// Numéro de menu réservé à la sortie.
pub const SELECTION_QUITTER: i64 = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    precision: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self::avec_precision(PRECISION_DEFAUT)
    }
}

impl Reglages {
    /// Garde-fou : la précision est bornée dès la construction.
    pub fn avec_precision(precision: usize) -> Self {
        Self {
            precision: precision.clamp(PRECISION_MIN, PRECISION_MAX),
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}

/// Une entrée du menu : une opération (1–12) ou la sortie (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    Calcul(Operation),
    Quitter,
}

impl Entree {
    /// 1..=12 -> opération, 13 -> sortie, le reste -> None (sélection invalide).
    pub fn depuis_selection(n: i64) -> Option<Entree> {
        if n == SELECTION_QUITTER {
            return Some(Entree::Quitter);
        }
        let idx = usize::try_from(n.checked_sub(1)?).ok()?;
        Operation::TOUTES.get(idx).copied().map(Entree::Calcul)
    }
}

/// Pourquoi la boucle s’arrête.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fin {
    /// Entrée 13 choisie.
    Quitter,
    /// Plus rien à lire sur l’entrée standard.
    FluxFerme,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Etat {
    #[default]
    AttenteMenu,
    CollecteOperandes(Operation),
    Termine(Fin),
}
