//! Score and level counters tracked by the engine.

use starfall_core::constants::{ENEMY_CAP_BASE, ENEMY_KILL_SCORE, LEVEL_SCORE_STEP};

/// Running score state for the current session.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub score: u32,
    pub level: u32,
    /// Survives restarts; never persisted.
    pub best_score: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            best_score: 0,
            enemies_destroyed: 0,
            shots_fired: 0,
        }
    }
}

impl ScoreState {
    /// Zero the session counters, keeping the best score.
    pub fn reset_session(&mut self) {
        *self = Self {
            best_score: self.best_score.max(self.score),
            ..Self::default()
        };
    }

    /// Credit one enemy kill.
    pub fn award_kill(&mut self) {
        self.score = self.score.saturating_add(ENEMY_KILL_SCORE);
        self.enemies_destroyed += 1;
        self.best_score = self.best_score.max(self.score);
    }

    /// Advance at most one level if the score has reached the current
    /// level's threshold. Returns the new level when it changed.
    ///
    /// A single large score jump crossing several thresholds still only
    /// advances one level per call.
    pub fn check_level_up(&mut self) -> Option<u32> {
        if self.score >= self.level.saturating_mul(LEVEL_SCORE_STEP) {
            self.level += 1;
            Some(self.level)
        } else {
            None
        }
    }

    /// Maximum concurrent enemies at the current level.
    pub fn enemy_cap(&self) -> usize {
        (ENEMY_CAP_BASE + self.level) as usize
    }
}
