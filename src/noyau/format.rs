// src/noyau/format.rs
//
// Affichage “par défaut” d’un flottant (style %g) :
// - `precision` chiffres significatifs (6 par défaut côté app)
// - notation fixe si −4 ≤ exposant < precision, sinon scientifique (1e+06)
// - zéros de queue et point final retirés
// - nan / inf / -inf, et -0 conservé

/* ------------------------ Helpers ------------------------ */

/// "2.50000" -> "2.5", "3.000" -> "3", "120" -> "120" (pas de point : intact).
fn retirer_zeros_queue(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Exposant décimal *après* arrondi à `precision` chiffres (999999.7 -> 6, pas 5).
fn mantisse_et_exposant(x: f64, precision: usize) -> (String, i32) {
    let sci = format!("{:.*e}", precision - 1, x);
    match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

/* ------------------------ API ------------------------ */

pub fn format_defaut(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let p = precision.max(1);
    let (mantisse, exp) = mantisse_et_exposant(x, p);

    if exp < -4 || exp >= p as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            retirer_zeros_queue(&mantisse),
            exp.unsigned_abs()
        );
    }

    let decimales = (p as i32 - 1 - exp) as usize;
    retirer_zeros_queue(&format!("{:.*}", decimales, x)).to_string()
}
