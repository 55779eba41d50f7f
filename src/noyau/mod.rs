//! Noyau de calcul (aucune E/S)
//!
//! Organisation interne :
//! - moteur.rs    : valeur courante + 12 opérations (générique T: Float)
//! - operation.rs : énumération des opérations, arité, dispatch
//! - erreur.rs    : erreurs domaine / argument invalide
//! - format.rs    : affichage par défaut d’un flottant (style %g)

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operation;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use format::format_defaut;
pub use moteur::CalculatriceScientifique;
pub use operation::{Arite, Operation};
