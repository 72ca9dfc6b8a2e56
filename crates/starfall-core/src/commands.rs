//! Player intents delivered to the simulation each tick.
//!
//! Intents are consumed at the next tick boundary. Raw input from adapters
//! is clamped into these types before it reaches the engine.

use serde::{Deserialize, Serialize};

/// One movement axis of the intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Axis {
    /// Clamp an arbitrary integer to its sign.
    pub fn from_signum(value: i64) -> Self {
        match value.signum() {
            -1 => Axis::Negative,
            1 => Axis::Positive,
            _ => Axis::Neutral,
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Axis::Negative => -1.0,
            Axis::Neutral => 0.0,
            Axis::Positive => 1.0,
        }
    }
}

/// Discrete input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub move_x: Axis,
    pub move_y: Axis,
    pub fire: bool,
    pub restart: bool,
}

impl Intent {
    /// No movement, no actions.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Self::default()
        }
    }

    pub fn moving(move_x: Axis, move_y: Axis) -> Self {
        Self {
            move_x,
            move_y,
            ..Self::default()
        }
    }

    /// Fold a later intent submitted before the same tick into this one.
    /// Movement follows the latest submission; actions are sticky.
    pub fn merge(&mut self, later: Intent) {
        self.move_x = later.move_x;
        self.move_y = later.move_y;
        self.fire |= later.fire;
        self.restart |= later.restart;
    }
}
