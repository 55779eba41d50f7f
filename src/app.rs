// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + saisie.rs + vue.rs)
// - Fournir AppCalc : la boucle menu -> opérandes -> résultat/erreur
//
// Important:
// - Générique sur l’entrée (BufRead) et la sortie (Write) : stdin/stdout en vrai,
//   Cursor/Vec<u8> dans les tests.
// - Les erreurs du noyau sont attrapées ici (un seul match après dispatch),
//   elles ne terminent jamais la boucle.

pub mod etat;
pub mod saisie;
pub mod vue;

use std::io::{self, BufRead, Write};

use crate::noyau::{Arite, CalculatriceScientifique, Operation};

pub use etat::{Fin, Reglages};
use etat::{Entree, Etat};
use saisie::{Lecteur, Selection};

pub struct AppCalc<R, W> {
    lecteur: Lecteur<R>,
    sortie: W,
    calc: CalculatriceScientifique<f64>,
    reglages: Reglages,
    etat: Etat,
}

impl<R: BufRead, W: Write> AppCalc<R, W> {
    pub fn new(entree: R, sortie: W, reglages: Reglages) -> Self {
        Self {
            lecteur: Lecteur::new(entree),
            sortie,
            calc: CalculatriceScientifique::default(),
            reglages,
            etat: Etat::default(),
        }
    }

    /// Boucle complète, jusqu’à la sortie (13) ou la fin du flux.
    pub fn executer(&mut self) -> io::Result<Fin> {
        loop {
            self.etat = match self.etat {
                Etat::AttenteMenu => self.etape_menu()?,
                Etat::CollecteOperandes(op) => self.etape_operandes(op)?,
                Etat::Termine(fin) => return Ok(fin),
            };
        }
    }

    /* ------------------------ Étapes ------------------------ */

    fn etape_menu(&mut self) -> io::Result<Etat> {
        vue::ecrire_menu(&mut self.sortie)?;

        let selection = match self.lecteur.lire_selection()? {
            Some(s) => s,
            None => return Ok(Etat::Termine(Fin::FluxFerme)),
        };

        match selection {
            Selection::Invalide(jeton) => {
                tracing::debug!(jeton = %jeton, "sélection non numérique");
                self.lecteur.ignorer_ligne();
                vue::ecrire_ligne(&mut self.sortie, vue::MSG_SAISIE_INVALIDE)?;
                Ok(Etat::AttenteMenu)
            }
            Selection::Numero(n) => match Entree::depuis_selection(n) {
                Some(Entree::Quitter) => {
                    vue::ecrire_ligne(&mut self.sortie, vue::MSG_AU_REVOIR)?;
                    Ok(Etat::Termine(Fin::Quitter))
                }
                Some(Entree::Calcul(op)) => Ok(Etat::CollecteOperandes(op)),
                None => {
                    tracing::debug!(selection = n, "sélection hors menu");
                    vue::ecrire_ligne(&mut self.sortie, vue::MSG_SELECTION_INVALIDE)?;
                    Ok(Etat::AttenteMenu)
                }
            },
        }
    }

    fn etape_operandes(&mut self, op: Operation) -> io::Result<Etat> {
        let invites = vue::invites(op);
        debug_assert_eq!(invites.len(), op.arite().nb_operandes());

        let Some(valeur) = self.lecteur.lire_nombre(&mut self.sortie, invites[0])? else {
            return Ok(Etat::Termine(Fin::FluxFerme));
        };

        let operande = match op.arite() {
            Arite::Unaire => 0.0,
            Arite::Binaire => match self.lecteur.lire_nombre(&mut self.sortie, invites[1])? {
                Some(o) => o,
                None => return Ok(Etat::Termine(Fin::FluxFerme)),
            },
        };

        match op.appliquer(&mut self.calc, valeur, operande) {
            Ok(resultat) => {
                tracing::debug!(
                    ?op,
                    valeur = self.calc.valeur_courante(),
                    operande,
                    resultat,
                    "calcul"
                );
                vue::ecrire_resultat(&mut self.sortie, resultat, self.reglages.precision())?;
            }
            Err(e) => {
                tracing::debug!(
                    ?op,
                    valeur,
                    operande,
                    categorie = ?e.categorie(),
                    "calcul refusé"
                );
                vue::ecrire_erreur(&mut self.sortie, e)?;
            }
        }

        Ok(Etat::AttenteMenu)
    }
}
