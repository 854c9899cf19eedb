//! Catalogue of nominal motor power ratings.

use serde::Serialize;

/// kW per CV (metric horsepower).
pub const KW_PER_CV: f64 = 0.7355;

/// Nominal ratings offered for selection, in CV.
pub const STANDARD_RATINGS_CV: [f64; 64] = [
    0.12, 0.16, 0.18, 0.25, 0.33, 0.37, 0.50, 0.55, 0.75, 0.84, 0.92, 1.0, 1.5, 2.0, 2.2, 3.0,
    3.7, 4.0, 4.5, 5.0, 5.5, 6.0, 7.5, 9.2, 10.0, 11.0, 12.5, 15.0, 18.5, 20.0, 22.0, 25.0, 30.0,
    37.0, 40.0, 45.0, 50.0, 55.0, 60.0, 75.0, 90.0, 100.0, 110.0, 125.0, 132.0, 150.0, 160.0,
    175.0, 185.0, 200.0, 220.0, 225.0, 250.0, 260.0, 270.0, 280.0, 300.0, 315.0, 330.0, 350.0,
    370.0, 400.0, 450.0, 500.0,
];

/// A nominal rating with its kW equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerRating {
    pub cv: f64,
    pub kw: f64,
}

impl PowerRating {
    pub fn from_cv(cv: f64) -> Self {
        Self {
            cv,
            kw: cv * KW_PER_CV,
        }
    }

    /// Label such as `7.5 CV - 5.516 kW`.
    pub fn label(&self) -> String {
        format!("{} CV - {:.3} kW", self.cv, self.kw)
    }
}

/// All standard ratings, smallest first.
pub fn standard_ratings() -> Vec<PowerRating> {
    STANDARD_RATINGS_CV
        .iter()
        .map(|&cv| PowerRating::from_cv(cv))
        .collect()
}
