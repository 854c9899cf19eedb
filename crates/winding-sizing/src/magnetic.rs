//! Pole pitch and magnetic flux from the core geometry.

/// π as used by the sizing tables this calculator reproduces.
pub const PI_APPROX: f64 = 3.14;

pub fn mm_to_cm(mm: f64) -> f64 {
    mm / 10.0
}

/// Pole pitch in cm: `tp = 3.14 × D / P`.
pub fn pole_pitch_cm(diameter_cm: f64, poles: u32) -> f64 {
    (PI_APPROX * diameter_cm) / f64::from(poles)
}

/// Flux per pole in Wb: `Φ = 5 × tp × L / 1000`.
pub fn flux_wb(pole_pitch_cm: f64, length_cm: f64) -> f64 {
    (5.0 * pole_pitch_cm * length_cm) / 1000.0
}
