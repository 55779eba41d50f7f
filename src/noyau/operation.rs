// src/noyau/operation.rs
//
// Les 12 opérations du noyau + arité + dispatch vers le moteur.
// Le dispatch pose la valeur courante puis appelle l’opération : un seul point
// de sortie Result, c’est là que le driver “attrape” les erreurs.

use num_traits::Float;

use super::erreur::ErreurCalcul;
use super::moteur::CalculatriceScientifique;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Sinus,
    Cosinus,
    Tangente,
    Exponentielle,
    Logarithme,
    RacineCarree,
    Puissance,
    PartieFractionnaire,
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

/// Nombre d’opérandes lus pour une opération.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

impl Arite {
    pub fn nb_operandes(self) -> usize {
        match self {
            Arite::Unaire => 1,
            Arite::Binaire => 2,
        }
    }
}

impl Operation {
    /// Ordre du menu (index 0 => entrée 1).
    pub const TOUTES: [Operation; 12] = [
        Operation::Sinus,
        Operation::Cosinus,
        Operation::Tangente,
        Operation::Exponentielle,
        Operation::Logarithme,
        Operation::RacineCarree,
        Operation::Puissance,
        Operation::PartieFractionnaire,
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn arite(self) -> Arite {
        use Operation::*;
        match self {
            Puissance | Addition | Soustraction | Multiplication | Division => Arite::Binaire,
            Sinus | Cosinus | Tangente | Exponentielle | Logarithme | RacineCarree
            | PartieFractionnaire => Arite::Unaire,
        }
    }

    /// Libellé du menu.
    pub fn libelle(self) -> &'static str {
        use Operation::*;
        match self {
            Sinus => "Sine",
            Cosinus => "Cosine",
            Tangente => "Tangent",
            Exponentielle => "Exponential",
            Logarithme => "Logarithm",
            RacineCarree => "Square Root",
            Puissance => "Power",
            PartieFractionnaire => "Fractional Part",
            Addition => "Addition",
            Soustraction => "Subtraction",
            Multiplication => "Multiplication",
            Division => "Division",
        }
    }

    /// Pose `valeur` comme valeur courante puis applique l’opération.
    /// `operande` est ignoré pour les unaires.
    pub fn appliquer<T: Float>(
        self,
        calc: &mut CalculatriceScientifique<T>,
        valeur: T,
        operande: T,
    ) -> Result<T, ErreurCalcul> {
        use Operation::*;

        calc.set_valeur_courante(valeur);

        match self {
            Sinus => Ok(calc.sinus()),
            Cosinus => Ok(calc.cosinus()),
            Tangente => Ok(calc.tangente()),
            Exponentielle => Ok(calc.exponentielle()),
            Logarithme => calc.logarithme(),
            RacineCarree => calc.racine_carree(),
            Puissance => Ok(calc.puissance(operande)),
            PartieFractionnaire => Ok(calc.partie_fractionnaire()),
            Addition => Ok(calc.addition(operande)),
            Soustraction => Ok(calc.soustraction(operande)),
            Multiplication => Ok(calc.multiplication(operande)),
            Division => calc.division(operande),
        }
    }
}
