//! Integration tests: sizing rows of the shipped dataset.

use std::path::PathBuf;

use winding_core::{ConfigKey, ConnectionType, Layer, SizingInput};
use winding_data::{load_dataset, ConfigurationDataset};
use winding_gauge::GaugeTable;
use winding_sizing::{SizingEngine, SizingError};

fn shipped_dataset() -> ConfigurationDataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/configurations.toml");
    let (dataset, _) = load_dataset(&path).expect("load shipped dataset");
    dataset
}

#[test]
fn recommended_24_slot_winding() {
    let ds = shipped_dataset();
    let table = GaugeTable::standard();
    let engine = SizingEngine::new(&table);
    let key = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 6);
    let input = SizingInput::new(380.0, 5.0, 110.0, 70.0).expect("valid input");

    let report = engine
        .compute_recipes(&ds, &key, &input)
        .expect("sizing succeeds");
    assert_eq!(report.winding_factor, 0.9659);
    assert_eq!(report.parallel_factors(), vec![1, 2, 4]);
    // 3 × ZF / 24 with ζ = 0.9659 gives 61.08 for k1 = 1.
    assert_eq!(report.options[0].turns_per_coil, 61);
    assert!(report
        .options
        .iter()
        .all(|o| o.coils_per_group == "1" && o.pitch == 6));
}

#[test]
fn every_row_sizes_without_error() {
    let ds = shipped_dataset();
    let table = GaugeTable::standard();
    let engine = SizingEngine::new(&table);
    let input = SizingInput::new(220.0, 7.5, 130.0, 90.0)
        .expect("valid input")
        .with_frequency(50.0)
        .expect("valid frequency");

    for row in ds.rows() {
        let report = engine
            .compute(row, &input)
            .unwrap_or_else(|e| panic!("{}: {e}", row.key));
        assert!(!report.options.is_empty(), "{}", row.key);
        assert!(report.options.len() <= 4, "{}", row.key);
        assert_eq!(report.options[0].k1, 1, "{}", row.key);
        for option in &report.options {
            assert_eq!(
                option.groups_in_series * option.groups_in_parallel,
                report.num_groups
            );
        }
    }
}

#[test]
fn thicker_wire_for_fewer_parallel_paths() {
    let ds = shipped_dataset();
    let table = GaugeTable::standard();
    let engine = SizingEngine::new(&table);
    let key = ConfigKey::new(36, 4, Layer::Double, ConnectionType::EndToEnd, 8);
    let input = SizingInput::new(440.0, 20.0, 180.0, 120.0).expect("valid input");

    let report = engine
        .compute_recipes(&ds, &key, &input)
        .expect("sizing succeeds");
    let areas: Vec<f64> = report
        .options
        .iter()
        .map(|o| o.wire.entry.area_mm2)
        .collect();
    assert!(areas.windows(2).all(|w| w[0] >= w[1]), "{areas:?}");
    assert_eq!(report.current_density, 5.5);
}

#[test]
fn absent_key_is_reported() {
    let ds = shipped_dataset();
    let table = GaugeTable::standard();
    let key = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 2);
    let input = SizingInput::new(380.0, 5.0, 110.0, 70.0).expect("valid input");
    assert!(matches!(
        SizingEngine::new(&table).compute_recipes(&ds, &key, &input),
        Err(SizingError::ConfigurationNotFound { .. })
    ));
}
