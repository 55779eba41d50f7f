// src/noyau/erreur.rs
//
// Erreurs du noyau (domaine / argument invalide).
// Le texte Display est exactement le message montré à l’utilisateur.

use thiserror::Error;

/// Famille d’erreur (DomainError / InvalidArgumentError).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    /// Fonction unaire hors de son domaine (ln, √).
    Domaine,
    /// Opération binaire indéfinie (division par zéro).
    ArgumentInvalide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Logarithm is undefined for non-positive values.")]
    LogarithmeNonPositif,

    #[error("Square root is undefined for negative values.")]
    RacineNegative,

    #[error("Division by zero is undefined.")]
    DivisionParZero,
}

impl ErreurCalcul {
    pub fn categorie(self) -> Categorie {
        match self {
            ErreurCalcul::LogarithmeNonPositif | ErreurCalcul::RacineNegative => Categorie::Domaine,
            ErreurCalcul::DivisionParZero => Categorie::ArgumentInvalide,
        }
    }
}
