//! Standard AWG sizes for solid enamelled magnet wire.
//!
//! Declared largest first for readability; [`crate::GaugeTable`] sorts the
//! entries ascending before any lookup. The 0-series sizes (1/0 to 4/0)
//! carry negative identifiers.

/// (cross-section mm², gauge id, label)
pub(crate) const STANDARD_AWG: [(f64, i32, &str); 44] = [
    (107.2190, -4, "4/0 AWG"),
    (85.0120, -3, "3/0 AWG"),
    (67.4350, -2, "2/0 AWG"),
    (53.4750, -1, "1/0 AWG"),
    (42.4140, 1, "1 AWG"),
    (33.6270, 2, "2 AWG"),
    (26.6730, 3, "3 AWG"),
    (21.1500, 4, "4 AWG"),
    (16.7720, 5, "5 AWG"),
    (13.3010, 6, "6 AWG"),
    (10.5480, 7, "7 AWG"),
    (8.36670, 8, "8 AWG"),
    (6.63320, 9, "9 AWG"),
    (5.26100, 10, "10 AWG"),
    (4.17280, 11, "11 AWG"),
    (3.30990, 12, "12 AWG"),
    (2.62470, 13, "13 AWG"),
    (2.08090, 14, "14 AWG"),
    (1.65070, 15, "15 AWG"),
    (1.30900, 16, "16 AWG"),
    (1.03790, 17, "17 AWG"),
    (0.82300, 18, "18 AWG"),
    (0.65270, 19, "19 AWG"),
    (0.51760, 20, "20 AWG"),
    (0.41050, 21, "21 AWG"),
    (0.32550, 22, "22 AWG"),
    (0.25800, 23, "23 AWG"),
    (0.20470, 24, "24 AWG"),
    (0.16240, 25, "25 AWG"),
    (0.12890, 26, "26 AWG"),
    (0.10230, 27, "27 AWG"),
    (0.08110, 28, "28 AWG"),
    (0.06430, 29, "29 AWG"),
    (0.05090, 30, "30 AWG"),
    (0.04040, 31, "31 AWG"),
    (0.03200, 32, "32 AWG"),
    (0.02540, 33, "33 AWG"),
    (0.02010, 34, "34 AWG"),
    (0.01590, 35, "35 AWG"),
    (0.01270, 36, "36 AWG"),
    (0.01000, 37, "37 AWG"),
    (0.00800, 38, "38 AWG"),
    (0.00630, 39, "39 AWG"),
    (0.00500, 40, "40 AWG"),
];
