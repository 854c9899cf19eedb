//! Phase current and conductor cross-section.

/// Assumed power factor.
pub const POWER_FACTOR: f64 = 0.9;

/// Assumed efficiency.
pub const EFFICIENCY: f64 = 0.9;

/// Watts per CV used for the electrical input power.
pub const WATTS_PER_CV: f64 = 736.0;

/// Electrical input power in W: `P / (0.9 × 0.9) × 736`.
pub fn adjusted_power_w(power_cv: f64) -> f64 {
    (power_cv / (POWER_FACTOR * EFFICIENCY)) * WATTS_PER_CV
}

/// Phase current in A: `P_adj / (3 × V)`.
pub fn phase_current_a(adjusted_power_w: f64, voltage: f64) -> f64 {
    adjusted_power_w / (3.0 * voltage)
}

/// Current density in A/mm² by rating bracket.
pub fn current_density(power_cv: f64) -> f64 {
    if power_cv <= 10.0 {
        7.0
    } else if power_cv <= 50.0 {
        5.5
    } else {
        5.0
    }
}

/// Conductor cross-section per parallel path in mm².
pub fn wire_area_mm2(current_a: f64, density: f64, k1: u32) -> f64 {
    current_a / (density * f64::from(k1))
}
