//! In-memory dataset accessor.
//!
//! Rows are keyed by [`ConfigKey`] in a `BTreeMap`, so every distinct-value
//! projection comes out in key order without extra sorting. The dataset is
//! read-only once built and can be shared freely between threads.

use std::collections::BTreeMap;

use winding_core::{ConfigKey, ConnectionType, Layer, WindingConfiguration};

use crate::error::{DataError, Result};
use crate::fingerprint::Fingerprint;

/// Partial key used to filter rows. Unset fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyFilter {
    pub slots: Option<u32>,
    pub poles: Option<u32>,
    pub layer: Option<Layer>,
    pub connection: Option<ConnectionType>,
    pub pitch: Option<u32>,
}

impl KeyFilter {
    /// Filter matching every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }

    pub fn poles(mut self, poles: u32) -> Self {
        self.poles = Some(poles);
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn connection(mut self, connection: ConnectionType) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn pitch(mut self, pitch: u32) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Whether `key` agrees with every set field.
    pub fn matches(&self, key: &ConfigKey) -> bool {
        self.slots.map_or(true, |s| s == key.slots)
            && self.poles.map_or(true, |p| p == key.poles)
            && self.layer.map_or(true, |l| l == key.layer)
            && self.connection.map_or(true, |c| c == key.connection)
            && self.pitch.map_or(true, |y| y == key.pitch)
    }
}

/// Read-only store of valid winding configurations.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationDataset {
    rows: BTreeMap<ConfigKey, WindingConfiguration>,
    fingerprint: Option<Fingerprint>,
}

impl ConfigurationDataset {
    /// Build a dataset from rows; on a repeated key the first row wins.
    ///
    /// Returns the dataset and the keys that were ignored as duplicates.
    pub fn from_rows(
        rows: impl IntoIterator<Item = WindingConfiguration>,
    ) -> (Self, Vec<ConfigKey>) {
        let mut dataset = Self::default();
        let mut duplicates = Vec::new();
        for row in rows {
            let key = row.key;
            if dataset.rows.contains_key(&key) {
                duplicates.push(key);
            } else {
                dataset.rows.insert(key, row);
            }
        }
        (dataset, duplicates)
    }

    pub(crate) fn with_fingerprint(mut self, fingerprint: Fingerprint) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    /// Fingerprint of the source the dataset was loaded from, if any.
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        self.fingerprint.as_ref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in key order.
    pub fn rows(&self) -> impl Iterator<Item = &WindingConfiguration> {
        self.rows.values()
    }

    /// Rows matching a partial key, in key order.
    pub fn configurations(&self, filter: &KeyFilter) -> Vec<&WindingConfiguration> {
        self.rows
            .values()
            .filter(|row| filter.matches(&row.key))
            .collect()
    }

    /// Distinct slot counts.
    pub fn distinct_slots(&self) -> Vec<u32> {
        let mut slots: Vec<u32> = self.rows.keys().map(|k| k.slots).collect();
        slots.dedup();
        slots
    }

    /// Distinct pole counts for `slots`, ascending.
    pub fn distinct_poles(&self, slots: u32) -> Vec<u32> {
        let mut poles: Vec<u32> = self
            .rows
            .keys()
            .filter(|k| k.slots == slots)
            .map(|k| k.poles)
            .collect();
        poles.dedup();
        poles
    }

    /// Distinct layers for (`slots`, `poles`), in key order.
    pub fn distinct_layers(&self, slots: u32, poles: u32) -> Vec<Layer> {
        let mut layers: Vec<Layer> = self
            .rows
            .keys()
            .filter(|k| k.slots == slots && k.poles == poles)
            .map(|k| k.layer)
            .collect();
        layers.dedup();
        layers
    }

    /// Distinct connection types for (`slots`, `poles`, `layer`), in key order.
    pub fn distinct_connections(&self, slots: u32, poles: u32, layer: Layer) -> Vec<ConnectionType> {
        let mut connections: Vec<ConnectionType> = self
            .rows
            .keys()
            .filter(|k| k.slots == slots && k.poles == poles && k.layer == layer)
            .map(|k| k.connection)
            .collect();
        connections.dedup();
        connections
    }

    /// Rows of one (S, P, layer, connection) group, best winding factor first.
    ///
    /// Rows with equal winding factors keep ascending pitch order.
    pub fn rows_for(
        &self,
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
    ) -> Vec<&WindingConfiguration> {
        let filter = KeyFilter::all()
            .slots(slots)
            .poles(poles)
            .layer(layer)
            .connection(connection);
        let mut rows = self.configurations(&filter);
        rows.sort_by(|a, b| b.winding_factor.total_cmp(&a.winding_factor));
        rows
    }

    /// Row for a full key, if present.
    pub fn get(&self, key: &ConfigKey) -> Option<&WindingConfiguration> {
        self.rows.get(key)
    }

    /// Row for a full key; a missing key is reported as
    /// [`DataError::ConfigurationNotFound`], never substituted.
    pub fn exact_row(&self, key: &ConfigKey) -> Result<&WindingConfiguration> {
        self.rows
            .get(key)
            .ok_or(DataError::ConfigurationNotFound { key: *key })
    }

    /// Highest winding factor row of a group.
    pub fn best_row(
        &self,
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
    ) -> Option<&WindingConfiguration> {
        self.rows_for(slots, poles, layer, connection)
            .into_iter()
            .next()
    }

    /// Recommended pitch of a group: the row whose note marks it, else the
    /// pitch of the best winding factor. `None` for an empty group.
    pub fn recommended_pitch(
        &self,
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
    ) -> Option<u32> {
        let rows = self.rows_for(slots, poles, layer, connection);
        rows.iter()
            .find(|row| row.is_recommended())
            .or_else(|| rows.first())
            .map(|row| row.key.pitch)
    }

    /// Excellent and good rows for (S, P), optionally narrowed by layer and
    /// connection, best winding factor first.
    pub fn recommended_rows(
        &self,
        slots: u32,
        poles: u32,
        layer: Option<Layer>,
        connection: Option<ConnectionType>,
    ) -> Vec<&WindingConfiguration> {
        let filter = KeyFilter {
            slots: Some(slots),
            poles: Some(poles),
            layer,
            connection,
            pitch: None,
        };
        let mut rows: Vec<_> = self
            .configurations(&filter)
            .into_iter()
            .filter(|row| row.quality.is_recommendable())
            .collect();
        rows.sort_by(|a, b| b.winding_factor.total_cmp(&a.winding_factor));
        rows
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use winding_core::{QType, QualityClass};

    pub(crate) fn row(
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
        pitch: u32,
        zeta: f64,
        note: &str,
    ) -> WindingConfiguration {
        WindingConfiguration {
            key: ConfigKey::new(slots, poles, layer, connection, pitch),
            q: f64::from(slots) / f64::from(3 * poles),
            q_type: QType::Integer,
            coils_per_group: "2".into(),
            winding_factor: zeta,
            quality: if zeta >= 0.95 {
                QualityClass::Excellent
            } else if zeta >= 0.9 {
                QualityClass::Good
            } else {
                QualityClass::Avoid
            },
            pitch_note: note.into(),
        }
    }

    pub(crate) fn sample() -> ConfigurationDataset {
        use ConnectionType::*;
        use Layer::*;
        let (dataset, _) = ConfigurationDataset::from_rows(vec![
            row(24, 4, Single, EndToEnd, 6, 0.9659, "recommended"),
            row(24, 4, Single, EndToEnd, 5, 0.933, ""),
            row(24, 4, Double, EndToEnd, 4, 0.8365, ""),
            row(24, 4, Double, EndToEnd, 5, 0.933, "recommended"),
            row(24, 4, Double, EndToEnd, 6, 0.9659, ""),
            row(24, 4, Double, EndToStart, 5, 0.933, ""),
            row(24, 4, Double, EndToStart, 6, 0.9659, ""),
            row(24, 2, Double, EndToEnd, 10, 0.9495, ""),
            row(36, 6, Double, EndToEnd, 5, 0.9452, ""),
        ]);
        dataset
    }

    #[test]
    fn distinct_projections_are_ordered() {
        let ds = sample();
        assert_eq!(ds.distinct_slots(), vec![24, 36]);
        assert_eq!(ds.distinct_poles(24), vec![2, 4]);
        assert_eq!(ds.distinct_layers(24, 4), vec![Layer::Single, Layer::Double]);
        assert_eq!(ds.distinct_layers(24, 2), vec![Layer::Double]);
        assert_eq!(
            ds.distinct_connections(24, 4, Layer::Double),
            vec![ConnectionType::EndToEnd, ConnectionType::EndToStart]
        );
        assert!(ds.distinct_poles(48).is_empty());
        assert!(ds.distinct_connections(24, 2, Layer::Single).is_empty());
    }

    #[test]
    fn rows_for_orders_by_descending_zeta() {
        let ds = sample();
        let rows = ds.rows_for(24, 4, Layer::Double, ConnectionType::EndToEnd);
        let pitches: Vec<u32> = rows.iter().map(|r| r.key.pitch).collect();
        assert_eq!(pitches, vec![6, 5, 4]);
    }

    #[test]
    fn exact_row_missing_is_not_found() {
        let ds = sample();
        let key = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 4);
        match ds.exact_row(&key) {
            Err(DataError::ConfigurationNotFound { key: missing }) => assert_eq!(missing, key),
            other => panic!("expected ConfigurationNotFound, got {other:?}"),
        }
        let present = ConfigKey::new(24, 4, Layer::Single, ConnectionType::EndToEnd, 5);
        assert_eq!(ds.exact_row(&present).unwrap().winding_factor, 0.933);
    }

    #[test]
    fn recommended_pitch_prefers_note_over_zeta() {
        let ds = sample();
        assert_eq!(
            ds.recommended_pitch(24, 4, Layer::Double, ConnectionType::EndToEnd),
            Some(5)
        );
        assert_eq!(
            ds.recommended_pitch(24, 4, Layer::Single, ConnectionType::EndToEnd),
            Some(6)
        );
        // No note in this group: best winding factor wins.
        assert_eq!(
            ds.recommended_pitch(24, 4, Layer::Double, ConnectionType::EndToStart),
            Some(6)
        );
        assert_eq!(
            ds.recommended_pitch(48, 4, Layer::Double, ConnectionType::EndToStart),
            None
        );
    }

    #[test]
    fn several_marked_rows_pick_highest_zeta() {
        use ConnectionType::EndToEnd;
        use Layer::Double;
        let (ds, _) = ConfigurationDataset::from_rows(vec![
            row(24, 4, Double, EndToEnd, 4, 0.8365, "recommended"),
            row(24, 4, Double, EndToEnd, 5, 0.933, "recommended"),
            row(24, 4, Double, EndToEnd, 6, 0.9659, ""),
        ]);
        assert_eq!(ds.recommended_pitch(24, 4, Double, EndToEnd), Some(5));
    }

    #[test]
    fn best_row_is_highest_zeta() {
        let ds = sample();
        let best = ds
            .best_row(24, 4, Layer::Double, ConnectionType::EndToEnd)
            .unwrap();
        assert_eq!(best.key.pitch, 6);
    }

    #[test]
    fn recommended_rows_filter_quality() {
        let ds = sample();
        let rows = ds.recommended_rows(24, 4, Some(Layer::Double), None);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.quality.is_recommendable()));
        assert_eq!(rows[0].winding_factor, 0.9659);
    }

    #[test]
    fn duplicates_keep_first() {
        let (ds, dups) = ConfigurationDataset::from_rows(vec![
            row(12, 2, Layer::Single, ConnectionType::EndToEnd, 6, 0.9659, ""),
            row(12, 2, Layer::Single, ConnectionType::EndToEnd, 6, 0.5, ""),
        ]);
        assert_eq!(ds.len(), 1);
        assert_eq!(dups.len(), 1);
        assert_eq!(ds.rows().next().unwrap().winding_factor, 0.9659);
    }

    #[test]
    fn filter_by_prefix() {
        let ds = sample();
        assert_eq!(ds.configurations(&KeyFilter::all()).len(), ds.len());
        assert_eq!(ds.configurations(&KeyFilter::all().slots(24)).len(), 8);
        assert_eq!(
            ds.configurations(&KeyFilter::all().slots(24).poles(4).layer(Layer::Single))
                .len(),
            2
        );
    }
}
