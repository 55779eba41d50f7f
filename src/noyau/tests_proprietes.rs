//! Tests de propriétés : balayage déterministe du moteur.
//!
//! - RNG déterministe (seed fixe), aucune dépendance
//! - valeurs tirées sur plusieurs ordres de grandeur + cas spéciaux (±0, ±∞, NaN)
//! - budget temps global
//! - invariants : domaines ln/√, division, partie fractionnaire ∈ [0, 1), pow standard

use std::time::{Duration, Instant};

use super::erreur::{Categorie, ErreurCalcul};
use super::moteur::CalculatriceScientifique;
use super::operation::Operation;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.state
    }

    /// [0, 1)
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Valeur finie signée, magnitude entre 1e-6 et 1e6.
    fn fini(&mut self) -> f64 {
        let mag = 10f64.powf(self.unit() * 12.0 - 6.0);
        if self.next_u64() & 1 == 1 {
            -mag
        } else {
            mag
        }
    }
}

const SPECIAUX: [f64; 9] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    0.5,
    -0.5,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::MIN_POSITIVE,
];

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn echantillon(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    let mut v: Vec<f64> = SPECIAUX.to_vec();
    v.extend((0..n).map(|_| rng.fini()));
    v
}

/* ------------------------ Domaines ------------------------ */

#[test]
fn prop_logarithme_domaine() {
    let start = Instant::now();
    let mut c = CalculatriceScientifique::<f64>::default();

    for v in echantillon(1, 5_000) {
        budget(start, Duration::from_secs(2));
        c.set_valeur_courante(v);
        match c.logarithme() {
            Ok(r) => {
                assert!(v > 0.0, "v={v}");
                assert_eq!(r, v.ln(), "v={v}");
            }
            Err(e) => {
                assert!(v <= 0.0, "v={v}");
                assert_eq!(e.categorie(), Categorie::Domaine);
            }
        }
    }
}

#[test]
fn prop_racine_domaine() {
    let start = Instant::now();
    let mut c = CalculatriceScientifique::<f64>::default();

    for v in echantillon(2, 5_000) {
        budget(start, Duration::from_secs(2));
        c.set_valeur_courante(v);
        match c.racine_carree() {
            Ok(r) => {
                assert!(v >= 0.0, "v={v}");
                assert_eq!(r, v.sqrt(), "v={v}");
            }
            Err(e) => {
                assert!(v < 0.0, "v={v}");
                assert_eq!(e, ErreurCalcul::RacineNegative);
            }
        }
    }
}

#[test]
fn prop_division() {
    let start = Instant::now();
    let mut c = CalculatriceScientifique::<f64>::default();
    let valeurs = echantillon(3, 400);

    for &v in &valeurs {
        c.set_valeur_courante(v);
        for &o in valeurs.iter().take(60) {
            budget(start, Duration::from_secs(2));
            let r = c.division(o);
            if o == 0.0 {
                assert_eq!(r, Err(ErreurCalcul::DivisionParZero), "v={v} o={o}");
                assert_eq!(ErreurCalcul::DivisionParZero.categorie(), Categorie::ArgumentInvalide);
            } else {
                let q = r.unwrap_or_else(|e| panic!("v={v} o={o} err={e}"));
                assert_eq!(q.to_bits(), (v / o).to_bits(), "v={v} o={o}");
            }
        }
    }
}

/* ------------------------ Partie fractionnaire / pow ------------------------ */

#[test]
fn prop_partie_fractionnaire_dans_0_1() {
    let start = Instant::now();
    let mut c = CalculatriceScientifique::<f64>::default();

    for v in echantillon(4, 10_000).into_iter().filter(|v| v.is_finite()) {
        budget(start, Duration::from_secs(2));
        c.set_valeur_courante(v);
        let f = c.partie_fractionnaire();
        assert_eq!(f, v - v.floor(), "v={v}");
        assert!((0.0..1.0).contains(&f), "v={v} f={f}");
    }
}

#[test]
fn prop_puissance_standard() {
    let start = Instant::now();
    let mut c = CalculatriceScientifique::<f64>::default();
    let valeurs = echantillon(5, 300);

    for &v in &valeurs {
        c.set_valeur_courante(v);
        for &o in valeurs.iter().take(40) {
            budget(start, Duration::from_secs(2));
            let r = c.puissance(o);
            let attendu = v.powf(o);
            assert!(
                r.to_bits() == attendu.to_bits() || (r.is_nan() && attendu.is_nan()),
                "v={v} o={o}"
            );
        }
    }

    c.set_valeur_courante(0.0);
    assert_eq!(c.puissance(0.0), 1.0);
    c.set_valeur_courante(-2.0);
    assert!(c.puissance(0.5).is_nan());
}

/* ------------------------ Dispatch ------------------------ */

#[test]
fn prop_dispatch_jamais_de_panique() {
    // Toutes les opérations, toutes les paires spéciales (NaN compris) : Ok ou erreur typée.
    let mut c = CalculatriceScientifique::<f64>::default();
    let mut valeurs = SPECIAUX.to_vec();
    valeurs.push(f64::NAN);

    for op in Operation::TOUTES {
        for &v in &valeurs {
            for &o in &valeurs {
                match op.appliquer(&mut c, v, o) {
                    Ok(_) => {}
                    Err(ErreurCalcul::LogarithmeNonPositif) => {
                        assert_eq!(op, Operation::Logarithme)
                    }
                    Err(ErreurCalcul::RacineNegative) => assert_eq!(op, Operation::RacineCarree),
                    Err(ErreurCalcul::DivisionParZero) => {
                        assert_eq!(op, Operation::Division);
                        assert_eq!(o, 0.0);
                    }
                }
            }
        }
    }
}
