//! Turns per phase and per coil.

/// EMF constant of the turns equation.
const EMF_CONSTANT: f64 = 2.22;

/// Turns per phase: `ZF = 50 V k k1 / (2.22 Φ f ζ)`.
pub fn turns_per_phase(
    voltage: f64,
    layer_coefficient: u32,
    k1: u32,
    flux_wb: f64,
    frequency_hz: f64,
    winding_factor: f64,
) -> f64 {
    (50.0 * voltage * f64::from(layer_coefficient) * f64::from(k1))
        / (EMF_CONSTANT * flux_wb * frequency_hz * winding_factor)
}

/// Turns per coil: `Z = round(3 ZF / S)`, ties to even.
pub fn turns_per_coil(turns_per_phase: f64, slots: u32) -> u32 {
    ((3.0 * turns_per_phase) / f64::from(slots)).round_ties_even() as u32
}
