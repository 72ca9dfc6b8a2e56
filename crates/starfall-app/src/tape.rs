//! Recorded input tapes.
//!
//! A tape is a JSON-lines file with one frame per tick:
//!
//! ```text
//! {"move_x":-1,"move_y":0,"fire":true,"restart":false}
//! ```
//!
//! Every field is optional. Movement values are reduced to their sign.
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use starfall_core::commands::{Axis, Intent};
use starfall_core::state::GameStateSnapshot;

use crate::pilot::InputSource;

/// One line of a tape file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapeFrame {
    pub move_x: i64,
    pub move_y: i64,
    pub fire: bool,
    pub restart: bool,
}

impl From<TapeFrame> for Intent {
    fn from(frame: TapeFrame) -> Self {
        Intent {
            move_x: Axis::from_signum(frame.move_x),
            move_y: Axis::from_signum(frame.move_y),
            fire: frame.fire,
            restart: frame.restart,
        }
    }
}

impl From<Intent> for TapeFrame {
    fn from(intent: Intent) -> Self {
        TapeFrame {
            move_x: intent.move_x.as_f32() as i64,
            move_y: intent.move_y.as_f32() as i64,
            fire: intent.fire,
            restart: intent.restart,
        }
    }
}

/// A sequence of intents replayed one per tick, idle once exhausted.
#[derive(Debug, Clone, Default)]
pub struct Tape {
    frames: Vec<Intent>,
    cursor: usize,
}

impl Tape {
    pub fn from_intents(frames: Vec<Intent>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Parse tape text. Errors name the offending line (1-based).
    pub fn parse(text: &str) -> Result<Self> {
        let mut frames = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let frame: TapeFrame = serde_json::from_str(line)
                .with_context(|| format!("invalid tape frame on line {}", index + 1))?;
            frames.push(frame.into());
        }
        Ok(Self::from_intents(frames))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read tape: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in tape {}", path.display()))
    }

    /// Serialize intents back into tape text.
    pub fn encode(intents: &[Intent]) -> Result<String> {
        let mut text = String::new();
        for intent in intents {
            text.push_str(&serde_json::to_string(&TapeFrame::from(*intent))?);
            text.push('\n');
        }
        Ok(text)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames not yet replayed.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl InputSource for Tape {
    fn next_intent(&mut self, _last: Option<&GameStateSnapshot>) -> Intent {
        match self.frames.get(self.cursor) {
            Some(intent) => {
                self.cursor += 1;
                *intent
            }
            None => Intent::idle(),
        }
    }
}
