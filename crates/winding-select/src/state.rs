//! Partial assignment of the five key dimensions.

use serde::{Deserialize, Serialize};
use winding_core::{ConfigKey, ConnectionType, Layer};

use crate::stage::Stage;

/// Selection made so far. Values are only legal given every upstream value,
/// which [`CascadingSelector`](crate::CascadingSelector) maintains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectionState {
    pub slots: Option<u32>,
    pub poles: Option<u32>,
    pub layer: Option<Layer>,
    pub connection: Option<ConnectionType>,
    pub pitch: Option<u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully assigned state.
    pub fn from_key(key: ConfigKey) -> Self {
        Self {
            slots: Some(key.slots),
            poles: Some(key.poles),
            layer: Some(key.layer),
            connection: Some(key.connection),
            pitch: Some(key.pitch),
        }
    }

    pub fn is_set(&self, stage: Stage) -> bool {
        match stage {
            Stage::Slots => self.slots.is_some(),
            Stage::Poles => self.poles.is_some(),
            Stage::Layer => self.layer.is_some(),
            Stage::Connection => self.connection.is_some(),
            Stage::Pitch => self.pitch.is_some(),
        }
    }

    /// Unset one stage. Returns whether it held a value.
    pub fn clear(&mut self, stage: Stage) -> bool {
        let was_set = self.is_set(stage);
        match stage {
            Stage::Slots => self.slots = None,
            Stage::Poles => self.poles = None,
            Stage::Layer => self.layer = None,
            Stage::Connection => self.connection = None,
            Stage::Pitch => self.pitch = None,
        }
        was_set
    }

    /// Unset every stage after `stage`, returning those that held a value.
    pub fn clear_downstream(&mut self, stage: Stage) -> Vec<Stage> {
        stage
            .downstream()
            .iter()
            .copied()
            .filter(|&s| self.clear(s))
            .collect()
    }

    /// First stage without a value.
    pub fn next_unset(&self) -> Option<Stage> {
        Stage::ALL.into_iter().find(|&s| !self.is_set(s))
    }

    pub fn is_complete(&self) -> bool {
        self.next_unset().is_none()
    }

    /// The full key, once every stage is set.
    pub fn key(&self) -> Option<ConfigKey> {
        Some(ConfigKey::new(
            self.slots?,
            self.poles?,
            self.layer?,
            self.connection?,
            self.pitch?,
        ))
    }
}
