//! Noyau — moteur de calcul
//!
//! Une seule valeur courante (écrasée avant chaque opération, pas d’historique).
//! Les opérations lisent cette valeur ; seules ln, √ et la division sont gardées.
//! NaN / ±∞ passent sans contrôle partout ailleurs.

use num_traits::Float;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug)]
pub struct CalculatriceScientifique<T: Float> {
    valeur_courante: T,
}

impl<T: Float> Default for CalculatriceScientifique<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Float> CalculatriceScientifique<T> {
    pub fn new(valeur: T) -> Self {
        Self {
            valeur_courante: valeur,
        }
    }

    /// Écriture exclusive, aucune validation (NaN / ∞ acceptés).
    pub fn set_valeur_courante(&mut self, valeur: T) {
        self.valeur_courante = valeur;
    }

    pub fn valeur_courante(&self) -> T {
        self.valeur_courante
    }

    /* ------------------------ Unaires ------------------------ */

    pub fn sinus(&self) -> T {
        self.valeur_courante.sin()
    }

    pub fn cosinus(&self) -> T {
        self.valeur_courante.cos()
    }

    pub fn tangente(&self) -> T {
        self.valeur_courante.tan()
    }

    pub fn exponentielle(&self) -> T {
        self.valeur_courante.exp()
    }

    /// ln(v), indéfini pour v ≤ 0.
    pub fn logarithme(&self) -> Result<T, ErreurCalcul> {
        if self.valeur_courante <= T::zero() {
            return Err(ErreurCalcul::LogarithmeNonPositif);
        }
        Ok(self.valeur_courante.ln())
    }

    /// √v, indéfini pour v < 0 (−0 passe : √−0 = −0).
    pub fn racine_carree(&self) -> Result<T, ErreurCalcul> {
        if self.valeur_courante < T::zero() {
            return Err(ErreurCalcul::RacineNegative);
        }
        Ok(self.valeur_courante.sqrt())
    }

    /// v − ⌊v⌋
    pub fn partie_fractionnaire(&self) -> T {
        self.valeur_courante - self.valeur_courante.floor()
    }

    /* ------------------------ Binaires ------------------------ */

    /// Sémantique pow standard : 0^0 = 1, base négative + exposant non entier => NaN.
    pub fn puissance(&self, exposant: T) -> T {
        self.valeur_courante.powf(exposant)
    }

    pub fn addition(&self, autre: T) -> T {
        self.valeur_courante + autre
    }

    pub fn soustraction(&self, autre: T) -> T {
        self.valeur_courante - autre
    }

    pub fn multiplication(&self, autre: T) -> T {
        self.valeur_courante * autre
    }

    /// v / o, refusé si o == 0 (−0 compris).
    pub fn division(&self, autre: T) -> Result<T, ErreurCalcul> {
        if autre == T::zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(self.valeur_courante / autre)
    }
}
