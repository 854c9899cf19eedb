//! The five selection stages, in cascade order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One dimension of the configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Slots,
    Poles,
    Layer,
    Connection,
    Pitch,
}

impl Stage {
    /// All stages, upstream first.
    pub const ALL: [Stage; 5] = [
        Stage::Slots,
        Stage::Poles,
        Stage::Layer,
        Stage::Connection,
        Stage::Pitch,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Stages whose legal sets depend on this one.
    pub fn downstream(self) -> &'static [Stage] {
        &Self::ALL[self.index() + 1..]
    }

    /// Stages this one depends on.
    pub fn upstream(self) -> &'static [Stage] {
        &Self::ALL[..self.index()]
    }

    /// The stage that follows, if any.
    pub fn next(self) -> Option<Stage> {
        self.downstream().first().copied()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Slots => write!(f, "slots"),
            Stage::Poles => write!(f, "poles"),
            Stage::Layer => write!(f, "layer"),
            Stage::Connection => write!(f, "connection"),
            Stage::Pitch => write!(f, "pitch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_order() {
        assert_eq!(
            Stage::Layer.downstream(),
            &[Stage::Connection, Stage::Pitch]
        );
        assert_eq!(Stage::Layer.upstream(), &[Stage::Slots, Stage::Poles]);
        assert!(Stage::Pitch.downstream().is_empty());
        assert!(Stage::Slots.upstream().is_empty());
        assert_eq!(Stage::Slots.next(), Some(Stage::Poles));
        assert_eq!(Stage::Pitch.next(), None);
    }
}
