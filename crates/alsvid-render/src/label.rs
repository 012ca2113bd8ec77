//! Gate label formatting.

use std::f64::consts::PI;

/// Pretty-print a phase angle.
///
/// Angles of the form π/2^k come out as `π`, `π/2`, `π/4`, …; anything
/// else falls back to two decimal places.
pub(crate) fn format_angle(theta: f64) -> String {
    if theta == 0.0 {
        return "0".to_string();
    }
    let sign = if theta < 0.0 { "-" } else { "" };
    let magnitude = theta.abs();
    for k in 0..=52_i32 {
        let frac = PI / 2_f64.powi(k);
        if (magnitude - frac).abs() <= frac * 1e-9 {
            return if k == 0 {
                format!("{sign}π")
            } else {
                format!("{sign}π/{}", 1_u64 << k)
            };
        }
    }
    format!("{theta:.2}")
}
