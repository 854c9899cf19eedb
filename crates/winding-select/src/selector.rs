//! Cascading selector over the configuration dataset.
//!
//! Stages are narrowed in key order: slots, poles, layer, connection,
//! pitch. The legal set of a stage is computed from the dataset given every
//! upstream value, so the selector never offers a value the dataset does
//! not contain. Changing a stage clears everything downstream of it and
//! hands back the fresh legal set of the next stage.

use std::fmt;

use tracing::debug;
use winding_core::{ConfigKey, ConnectionType, Layer, WindingConfiguration};
use winding_data::ConfigurationDataset;

use crate::choice::{Choice, Listing, PitchChoice, StageOptions};
use crate::error::{Result, SelectError};
use crate::stage::Stage;
use crate::state::SelectionState;

/// Power hint used when the caller gives none, in CV.
pub const DEFAULT_POWER_HINT_CV: f64 = 5.0;

/// Motors up to this rating are steered towards a single layer.
const SINGLE_LAYER_MAX_CV: f64 = 5.0;

/// Motors up to this rating are steered towards end-to-start groups.
const END_TO_START_MAX_CV: f64 = 3.0;

/// Result of setting one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The stage that was set.
    pub stage: Stage,
    /// Downstream stages that held a value and were reset.
    pub cleared: Vec<Stage>,
    /// What the next unset stage now offers.
    pub next: StageOptions,
}

impl Transition {
    pub fn resets_downstream(&self) -> bool {
        !self.cleared.is_empty()
    }
}

/// Computes legal values and recommendations for each stage.
#[derive(Debug, Clone, Copy)]
pub struct CascadingSelector<'a> {
    dataset: &'a ConfigurationDataset,
    power_hint_cv: f64,
}

impl<'a> CascadingSelector<'a> {
    pub fn new(dataset: &'a ConfigurationDataset) -> Self {
        Self {
            dataset,
            power_hint_cv: DEFAULT_POWER_HINT_CV,
        }
    }

    /// Set the intended power rating that drives the layer and connection
    /// recommendations.
    pub fn with_power_hint(mut self, power_cv: f64) -> Self {
        self.power_hint_cv = power_cv;
        self
    }

    pub fn power_hint_cv(&self) -> f64 {
        self.power_hint_cv
    }

    pub fn dataset(&self) -> &'a ConfigurationDataset {
        self.dataset
    }

    // === Legal sets ===

    pub fn legal_slots(&self) -> Listing<Choice<u32>> {
        Listing {
            choices: self
                .dataset
                .distinct_slots()
                .into_iter()
                .map(|s| Choice {
                    value: s,
                    label: format!("{s} slots"),
                    recommended: false,
                })
                .collect(),
            reason: None,
        }
    }

    pub fn legal_poles(&self, slots: u32) -> Listing<Choice<u32>> {
        Listing {
            choices: self
                .dataset
                .distinct_poles(slots)
                .into_iter()
                .map(|p| Choice {
                    value: p,
                    label: format!("{p} poles"),
                    recommended: false,
                })
                .collect(),
            reason: None,
        }
    }

    pub fn legal_layers(&self, slots: u32, poles: u32) -> Listing<Choice<Layer>> {
        let legal = self.dataset.distinct_layers(slots, poles);
        let pick = self.recommend_layer(&legal);
        Listing {
            choices: legal
                .iter()
                .map(|&layer| Choice {
                    value: layer,
                    label: layer.label().to_string(),
                    recommended: Some(layer) == pick,
                })
                .collect(),
            reason: pick.map(|layer| self.layer_reason(layer)),
        }
    }

    pub fn legal_connections(
        &self,
        slots: u32,
        poles: u32,
        layer: Layer,
    ) -> Listing<Choice<ConnectionType>> {
        let legal = self.dataset.distinct_connections(slots, poles, layer);
        let pick = self.recommend_connection(&legal);
        Listing {
            choices: legal
                .iter()
                .map(|&connection| Choice {
                    value: connection,
                    label: connection.label(),
                    recommended: Some(connection) == pick,
                })
                .collect(),
            reason: pick.map(|connection| self.connection_reason(connection)),
        }
    }

    /// Pitches of a group, best winding factor first.
    pub fn legal_pitches(
        &self,
        slots: u32,
        poles: u32,
        layer: Layer,
        connection: ConnectionType,
    ) -> Listing<PitchChoice> {
        let rows = self.dataset.rows_for(slots, poles, layer, connection);
        let pick = self
            .dataset
            .recommended_pitch(slots, poles, layer, connection);
        let reason = rows
            .iter()
            .find(|row| Some(row.pitch()) == pick)
            .map(|row| {
                if row.is_recommended() {
                    format!("marked recommended (ζ={})", row.winding_factor)
                } else {
                    format!("best winding factor (ζ={})", row.winding_factor)
                }
            });
        Listing {
            choices: rows
                .iter()
                .map(|row| PitchChoice {
                    pitch: row.pitch(),
                    label: format!("Pitch {} (ζ={})", row.pitch(), row.winding_factor),
                    recommended: Some(row.pitch()) == pick,
                    winding_factor: row.winding_factor,
                    coils_per_group: row.coils_per_group.clone(),
                    quality: row.quality,
                })
                .collect(),
            reason,
        }
    }

    // === Recommendations ===

    fn preferred_layer(&self) -> Layer {
        if self.power_hint_cv <= SINGLE_LAYER_MAX_CV {
            Layer::Single
        } else {
            Layer::Double
        }
    }

    fn preferred_connection(&self) -> ConnectionType {
        if self.power_hint_cv <= END_TO_START_MAX_CV {
            ConnectionType::EndToStart
        } else {
            ConnectionType::EndToEnd
        }
    }

    /// Preferred layer for the power hint if legal, else the first legal one.
    pub fn recommend_layer(&self, legal: &[Layer]) -> Option<Layer> {
        prefer(legal, self.preferred_layer())
    }

    /// Preferred connection for the power hint if legal, else the first
    /// legal one.
    pub fn recommend_connection(&self, legal: &[ConnectionType]) -> Option<ConnectionType> {
        prefer(legal, self.preferred_connection())
    }

    fn layer_reason(&self, picked: Layer) -> String {
        let preferred = self.preferred_layer();
        if picked != preferred {
            return format!("{} not available, first legal layer", preferred.label());
        }
        if self.power_hint_cv <= SINGLE_LAYER_MAX_CV {
            format!("recommended for motors up to {SINGLE_LAYER_MAX_CV} CV")
        } else {
            format!("recommended for motors above {SINGLE_LAYER_MAX_CV} CV")
        }
    }

    fn connection_reason(&self, picked: ConnectionType) -> String {
        let preferred = self.preferred_connection();
        if picked != preferred {
            return format!("{} not available, first legal connection", preferred.label());
        }
        if self.power_hint_cv <= END_TO_START_MAX_CV {
            format!("recommended for motors up to {END_TO_START_MAX_CV} CV")
        } else {
            format!("recommended for motors above {END_TO_START_MAX_CV} CV")
        }
    }

    // === State transitions ===

    /// Options of the first unset stage of `state`.
    pub fn options(&self, state: &SelectionState) -> StageOptions {
        match (
            state.slots,
            state.poles,
            state.layer,
            state.connection,
            state.pitch,
        ) {
            (None, ..) => StageOptions::Slots(self.legal_slots()),
            (Some(s), None, ..) => StageOptions::Poles(self.legal_poles(s)),
            (Some(s), Some(p), None, ..) => StageOptions::Layer(self.legal_layers(s, p)),
            (Some(s), Some(p), Some(l), None, _) => {
                StageOptions::Connection(self.legal_connections(s, p, l))
            }
            (Some(s), Some(p), Some(l), Some(c), None) => {
                StageOptions::Pitch(self.legal_pitches(s, p, l, c))
            }
            (Some(s), Some(p), Some(l), Some(c), Some(y)) => StageOptions::Complete {
                key: ConfigKey::new(s, p, l, c, y),
            },
        }
    }

    /// Whether the value at `stage` is legal given its upstream values.
    fn is_legal(&self, state: &SelectionState, stage: Stage) -> bool {
        let ds = self.dataset;
        match stage {
            Stage::Slots => state
                .slots
                .is_some_and(|s| ds.distinct_slots().contains(&s)),
            Stage::Poles => matches!(
                (state.slots, state.poles),
                (Some(s), Some(p)) if ds.distinct_poles(s).contains(&p)
            ),
            Stage::Layer => matches!(
                (state.slots, state.poles, state.layer),
                (Some(s), Some(p), Some(l)) if ds.distinct_layers(s, p).contains(&l)
            ),
            Stage::Connection => matches!(
                (state.slots, state.poles, state.layer, state.connection),
                (Some(s), Some(p), Some(l), Some(c))
                    if ds.distinct_connections(s, p, l).contains(&c)
            ),
            Stage::Pitch => state.key().is_some_and(|key| ds.get(&key).is_some()),
        }
    }

    /// Drop the first unset or illegal value and everything after it.
    ///
    /// Use this on a state assembled from outside (e.g. command-line
    /// flags). Returns the stages that held a value and were cleared.
    pub fn revalidate(&self, state: &mut SelectionState) -> Vec<Stage> {
        let mut cleared = Vec::new();
        for stage in Stage::ALL {
            if state.is_set(stage) && self.is_legal(state, stage) {
                continue;
            }
            if state.clear(stage) {
                cleared.push(stage);
            }
            cleared.extend(state.clear_downstream(stage));
            break;
        }
        if !cleared.is_empty() {
            debug!(?cleared, "selection revalidated");
        }
        cleared
    }

    fn set(
        &self,
        state: &mut SelectionState,
        stage: Stage,
        value: impl fmt::Display,
        apply: impl FnOnce(&mut SelectionState),
    ) -> Result<Transition> {
        if let Some(&missing) = stage.upstream().iter().find(|&&s| !state.is_set(s)) {
            return Err(SelectError::Incomplete { missing });
        }

        let mut candidate = *state;
        apply(&mut candidate);
        if !self.is_legal(&candidate, stage) {
            return Err(SelectError::IllegalValue {
                stage,
                value: value.to_string(),
            });
        }

        let cleared = if candidate == *state {
            Vec::new()
        } else {
            candidate.clear_downstream(stage)
        };
        *state = candidate;
        debug!(%stage, %value, ?cleared, "stage set");

        Ok(Transition {
            stage,
            cleared,
            next: self.options(state),
        })
    }

    pub fn set_slots(&self, state: &mut SelectionState, slots: u32) -> Result<Transition> {
        self.set(state, Stage::Slots, slots, |s| s.slots = Some(slots))
    }

    pub fn set_poles(&self, state: &mut SelectionState, poles: u32) -> Result<Transition> {
        self.set(state, Stage::Poles, poles, |s| s.poles = Some(poles))
    }

    pub fn set_layer(&self, state: &mut SelectionState, layer: Layer) -> Result<Transition> {
        self.set(state, Stage::Layer, layer, |s| s.layer = Some(layer))
    }

    pub fn set_connection(
        &self,
        state: &mut SelectionState,
        connection: ConnectionType,
    ) -> Result<Transition> {
        self.set(state, Stage::Connection, connection, |s| {
            s.connection = Some(connection)
        })
    }

    pub fn set_pitch(&self, state: &mut SelectionState, pitch: u32) -> Result<Transition> {
        self.set(state, Stage::Pitch, pitch, |s| s.pitch = Some(pitch))
    }

    /// The dataset row of a complete selection.
    pub fn resolve(&self, state: &SelectionState) -> Result<&'a WindingConfiguration> {
        let Some(key) = state.key() else {
            return Err(SelectError::Incomplete {
                missing: state.next_unset().unwrap_or(Stage::Slots),
            });
        };
        Ok(self.dataset.exact_row(&key)?)
    }
}

fn prefer<T: Copy + PartialEq>(legal: &[T], preferred: T) -> Option<T> {
    if legal.contains(&preferred) {
        Some(preferred)
    } else {
        legal.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winding_core::{QType, QualityClass};
    use winding_data::DataError;

    use winding_core::ConnectionType::{EndToEnd, EndToStart};
    use winding_core::Layer::{Double, Single};

    fn row(
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
            } else {
                QualityClass::Good
            },
            pitch_note: note.into(),
        }
    }

    fn dataset() -> ConfigurationDataset {
        let (ds, _) = ConfigurationDataset::from_rows(vec![
            row(24, 4, Single, EndToEnd, 5, 0.933, ""),
            row(24, 4, Single, EndToEnd, 6, 0.9659, "recommended"),
            row(24, 4, Single, EndToStart, 5, 0.933, ""),
            row(24, 4, Single, EndToStart, 6, 0.9659, "recommended"),
            row(24, 4, Double, EndToEnd, 5, 0.933, "recommended"),
            row(24, 4, Double, EndToEnd, 6, 0.9659, ""),
            row(24, 4, Double, EndToStart, 5, 0.933, ""),
            row(24, 4, Double, EndToStart, 6, 0.9659, ""),
            row(24, 6, Double, EndToEnd, 3, 0.8848, "recommended"),
            row(24, 6, Double, EndToEnd, 4, 0.9577, ""),
            row(12, 4, Single, EndToStart, 3, 1.0, "recommended"),
            row(36, 4, Double, EndToEnd, 7, 0.9452, ""),
        ]);
        ds
    }

    #[test]
    fn legal_sets_come_from_the_dataset() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let slots: Vec<u32> = sel.legal_slots().choices.iter().map(|c| c.value).collect();
        assert_eq!(slots, vec![12, 24, 36]);
        let poles = sel.legal_poles(24);
        assert_eq!(poles.choices[0].label, "4 poles");
        assert_eq!(poles.len(), 2);
        assert!(poles.recommended().is_none());
        assert!(sel.legal_poles(48).is_empty());
        assert!(sel.legal_connections(24, 6, Single).is_empty());
    }

    #[test]
    fn layer_follows_power_hint() {
        let ds = dataset();
        let small = CascadingSelector::new(&ds).with_power_hint(3.0);
        let listing = small.legal_layers(24, 4);
        assert_eq!(listing.recommended().map(|c| c.value), Some(Single));
        assert_eq!(listing.choices[0].label, "Single layer");

        let big = CascadingSelector::new(&ds).with_power_hint(7.5);
        assert_eq!(
            big.legal_layers(24, 4).recommended().map(|c| c.value),
            Some(Double)
        );
        // Boundary: exactly 5 CV still prefers single layer.
        let edge = CascadingSelector::new(&ds).with_power_hint(5.0);
        assert_eq!(edge.recommend_layer(&[Single, Double]), Some(Single));
    }

    #[test]
    fn layer_falls_back_to_first_legal() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds).with_power_hint(2.0);
        let listing = sel.legal_layers(24, 6);
        assert_eq!(listing.recommended().map(|c| c.value), Some(Double));
        assert!(listing.reason.unwrap().contains("not available"));
        assert_eq!(sel.recommend_layer(&[]), None);
    }

    #[test]
    fn connection_follows_power_hint() {
        let ds = dataset();
        let small = CascadingSelector::new(&ds).with_power_hint(3.0);
        let listing = small.legal_connections(24, 4, Double);
        assert_eq!(listing.recommended().map(|c| c.value), Some(EndToStart));
        assert_eq!(listing.choices[1].label, "g=P/2 (end-to-start)");

        let big = CascadingSelector::new(&ds).with_power_hint(5.0);
        assert_eq!(
            big.legal_connections(24, 4, Double)
                .recommended()
                .map(|c| c.value),
            Some(EndToEnd)
        );
        // Only end-to-start exists here, whatever the hint.
        assert_eq!(
            big.legal_connections(12, 4, Single)
                .recommended()
                .map(|c| c.value),
            Some(EndToStart)
        );
    }

    #[test]
    fn pitches_ordered_with_single_recommendation() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let listing = sel.legal_pitches(24, 6, Double, EndToEnd);
        let pitches: Vec<u32> = listing.choices.iter().map(|c| c.pitch).collect();
        assert_eq!(pitches, vec![4, 3]);
        assert_eq!(listing.choices[0].label, "Pitch 4 (ζ=0.9577)");
        let recommended: Vec<_> = listing.choices.iter().filter(|c| c.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].pitch, 3);
        assert!(listing.reason.unwrap().starts_with("marked recommended"));

        // No note: best winding factor is recommended.
        let listing = sel.legal_pitches(24, 4, Double, EndToStart);
        assert_eq!(listing.recommended().map(|c| c.pitch), Some(6));
        assert!(listing.reason.unwrap().starts_with("best winding factor"));
    }

    #[test]
    fn several_marked_pitches_offer_one_recommendation() {
        let (ds, _) = ConfigurationDataset::from_rows(vec![
            row(24, 4, Double, EndToEnd, 4, 0.8365, "recommended"),
            row(24, 4, Double, EndToEnd, 5, 0.933, "recommended"),
            row(24, 4, Double, EndToEnd, 6, 0.9659, ""),
        ]);
        let listing = CascadingSelector::new(&ds).legal_pitches(24, 4, Double, EndToEnd);
        let recommended: Vec<u32> = listing
            .choices
            .iter()
            .filter(|c| c.recommended)
            .map(|c| c.pitch)
            .collect();
        assert_eq!(recommended, vec![5]);
        assert_eq!(listing.reason.as_deref(), Some("marked recommended (ζ=0.933)"));
    }

    #[test]
    fn walk_the_cascade() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let mut state = SelectionState::new();

        let t = sel.set_slots(&mut state, 24).unwrap();
        assert!(!t.resets_downstream());
        assert_eq!(t.next.stage(), Some(Stage::Poles));

        sel.set_poles(&mut state, 4).unwrap();
        sel.set_layer(&mut state, Double).unwrap();
        let t = sel.set_connection(&mut state, EndToEnd).unwrap();
        match &t.next {
            StageOptions::Pitch(listing) => assert_eq!(listing.len(), 2),
            other => panic!("expected pitch options, got {other:?}"),
        }
        let t = sel.set_pitch(&mut state, 5).unwrap();
        assert!(matches!(t.next, StageOptions::Complete { .. }));

        let row = sel.resolve(&state).unwrap();
        assert_eq!(row.winding_factor, 0.933);
    }

    #[test]
    fn changing_upstream_resets_downstream() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let mut state = SelectionState::from_key(ConfigKey::new(24, 4, Double, EndToEnd, 5));

        // Same value: nothing is reset.
        let t = sel.set_poles(&mut state, 4).unwrap();
        assert!(t.cleared.is_empty());
        assert!(state.is_complete());

        let t = sel.set_poles(&mut state, 6).unwrap();
        assert_eq!(t.cleared, vec![Stage::Layer, Stage::Connection, Stage::Pitch]);
        assert_eq!(state.layer, None);
        match t.next {
            StageOptions::Layer(listing) => {
                assert_eq!(listing.choices.len(), 1);
                assert_eq!(listing.choices[0].value, Double);
            }
            other => panic!("expected layer options, got {other:?}"),
        }
    }

    #[test]
    fn illegal_and_out_of_order_values_are_rejected() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let mut state = SelectionState::new();

        assert!(matches!(
            sel.set_poles(&mut state, 4),
            Err(SelectError::Incomplete {
                missing: Stage::Slots
            })
        ));
        assert!(matches!(
            sel.set_slots(&mut state, 30),
            Err(SelectError::IllegalValue {
                stage: Stage::Slots,
                ..
            })
        ));
        sel.set_slots(&mut state, 12).unwrap();
        sel.set_poles(&mut state, 4).unwrap();
        let err = sel.set_layer(&mut state, Double).unwrap_err();
        assert_eq!(
            err.to_string(),
            "double is not a legal layer for the current selection"
        );
        // A rejected value leaves the state untouched.
        assert_eq!(state.layer, None);
        assert_eq!(state.poles, Some(4));
    }

    #[test]
    fn revalidate_drops_illegal_tail() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let mut state = SelectionState {
            slots: Some(24),
            poles: Some(6),
            layer: Some(Single),
            connection: Some(EndToEnd),
            pitch: Some(3),
        };
        let cleared = sel.revalidate(&mut state);
        assert_eq!(cleared, vec![Stage::Layer, Stage::Connection, Stage::Pitch]);
        assert_eq!(state.poles, Some(6));

        // A gap drops everything after it.
        let mut gapped = SelectionState {
            slots: Some(24),
            layer: Some(Single),
            ..SelectionState::default()
        };
        assert_eq!(sel.revalidate(&mut gapped), vec![Stage::Layer]);

        let mut valid = SelectionState::from_key(ConfigKey::new(24, 4, Single, EndToEnd, 6));
        assert!(sel.revalidate(&mut valid).is_empty());
        assert!(valid.is_complete());
    }

    #[test]
    fn resolve_requires_complete_selection() {
        let ds = dataset();
        let sel = CascadingSelector::new(&ds);
        let state = SelectionState {
            slots: Some(24),
            poles: Some(4),
            ..SelectionState::default()
        };
        assert!(matches!(
            sel.resolve(&state),
            Err(SelectError::Incomplete {
                missing: Stage::Layer
            })
        ));

        let absent = SelectionState::from_key(ConfigKey::new(24, 4, Single, EndToEnd, 4));
        assert!(matches!(
            sel.resolve(&absent),
            Err(SelectError::Data(DataError::ConfigurationNotFound { .. }))
        ));
    }
}
