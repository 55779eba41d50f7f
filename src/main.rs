// src/main.rs
//
// Calculatrice scientifique — point d’entrée console
// --------------------------------------------------
// But:
// - Journal (tracing) sur stderr uniquement : stdout reste la transcription exacte
// - stdin/stdout verrouillés une fois, passés à AppCalc
// - Sortie 13 ou fin de flux => statut succès ; erreur d’E/S => statut d’échec
//
// Filtre du journal : RUST_LOG (par défaut "warn", donc silencieux).

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod noyau;

use app::{AppCalc, Fin, Reglages};

/// Filtre utilisé si RUST_LOG est absent ou illisible.
const FILTRE_LOG_DEFAUT: &str = "warn";

fn installer_journal() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_LOG_DEFAUT));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    installer_journal();

    let reglages = Reglages::default();
    tracing::info!(precision = reglages.precision(), "calculatrice démarrée");

    let entree = io::stdin().lock();
    let sortie = io::stdout().lock();

    let fin = AppCalc::new(entree, sortie, reglages)
        .executer()
        .context("échec d’entrée/sortie sur la console")?;

    match fin {
        Fin::Quitter => tracing::info!("sortie demandée"),
        Fin::FluxFerme => tracing::warn!("fin de l’entrée standard, arrêt"),
    }

    Ok(())
}
