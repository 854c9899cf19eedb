//! Legal values offered at each stage.

use serde::Serialize;
use winding_core::{ConfigKey, ConnectionType, Layer, QualityClass};

use crate::stage::Stage;

/// Something offered to the user at a stage.
pub trait Offered {
    fn label(&self) -> &str;
    fn is_recommended(&self) -> bool;
}

/// A legal value with its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
    pub recommended: bool,
}

impl<T> Offered for Choice<T> {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }
}

/// A legal pitch, with the row metadata shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchChoice {
    pub pitch: u32,
    pub label: String,
    pub recommended: bool,
    pub winding_factor: f64,
    pub coils_per_group: String,
    pub quality: QualityClass,
}

impl Offered for PitchChoice {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_recommended(&self) -> bool {
        self.recommended
    }
}

/// Legal values of one stage plus why the recommended one was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<C> {
    pub choices: Vec<C>,
    pub reason: Option<String>,
}

impl<C: Offered> Listing<C> {
    pub fn recommended(&self) -> Option<&C> {
        self.choices.iter().find(|c| c.is_recommended())
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// What the next unset stage offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum StageOptions {
    Slots(Listing<Choice<u32>>),
    Poles(Listing<Choice<u32>>),
    Layer(Listing<Choice<Layer>>),
    Connection(Listing<Choice<ConnectionType>>),
    Pitch(Listing<PitchChoice>),
    /// Every stage is set.
    Complete { key: ConfigKey },
}

impl StageOptions {
    /// The stage these options belong to; `None` when complete.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            StageOptions::Slots(_) => Some(Stage::Slots),
            StageOptions::Poles(_) => Some(Stage::Poles),
            StageOptions::Layer(_) => Some(Stage::Layer),
            StageOptions::Connection(_) => Some(Stage::Connection),
            StageOptions::Pitch(_) => Some(Stage::Pitch),
            StageOptions::Complete { .. } => None,
        }
    }

    /// Labels with their recommended flag, in offer order.
    pub fn labels(&self) -> Vec<(&str, bool)> {
        fn collect<C: Offered>(listing: &Listing<C>) -> Vec<(&str, bool)> {
            listing
                .choices
                .iter()
                .map(|c| (c.label(), c.is_recommended()))
                .collect()
        }
        match self {
            StageOptions::Slots(l) | StageOptions::Poles(l) => collect(l),
            StageOptions::Layer(l) => collect(l),
            StageOptions::Connection(l) => collect(l),
            StageOptions::Pitch(l) => collect(l),
            StageOptions::Complete { .. } => Vec::new(),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            StageOptions::Slots(l) | StageOptions::Poles(l) => l.reason.as_deref(),
            StageOptions::Layer(l) => l.reason.as_deref(),
            StageOptions::Connection(l) => l.reason.as_deref(),
            StageOptions::Pitch(l) => l.reason.as_deref(),
            StageOptions::Complete { .. } => None,
        }
    }
}
