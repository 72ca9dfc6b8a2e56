//! Input sources that produce one intent per tick.

use starfall_core::commands::{Axis, Intent};
use starfall_core::enums::GamePhase;
use starfall_core::state::{BulletView, GameStateSnapshot, PlayerView};
use starfall_core::types::PlayArea;

/// Anything that can decide the next tick's intent from the last snapshot.
///
/// `last` is `None` before the first tick.
pub trait InputSource {
    fn next_intent(&mut self, last: Option<&GameStateSnapshot>) -> Intent;
}

/// How far above the ship an enemy bullet is treated as incoming.
const DODGE_LOOKAHEAD: f32 = 150.0;

/// A scripted pilot: lines up under the nearest enemy, sidesteps bullets
/// coming down on it, and keeps firing.
#[derive(Debug, Clone)]
pub struct Autopilot {
    area: PlayArea,
    auto_restart: bool,
}

impl Autopilot {
    pub fn new(area: PlayArea, auto_restart: bool) -> Self {
        Self { area, auto_restart }
    }

    fn steer(&self, player: &PlayerView, snapshot: &GameStateSnapshot) -> Axis {
        let ship_center = player.position.x + player.width / 2.0;

        if let Some(bullet) = incoming_bullet(player, &snapshot.enemy_bullets) {
            let away = if bullet.position.x >= ship_center {
                Axis::Negative
            } else {
                Axis::Positive
            };
            let pinned_left = player.position.x <= 0.0 && away == Axis::Negative;
            let pinned_right = player.position.x >= self.area.width - player.width && away == Axis::Positive;
            return match (pinned_left, pinned_right) {
                (true, _) => Axis::Positive,
                (_, true) => Axis::Negative,
                _ => away,
            };
        }

        let target = snapshot
            .enemies
            .iter()
            .map(|enemy| enemy.position.x + enemy.width / 2.0)
            .min_by(|a, b| (a - ship_center).abs().total_cmp(&(b - ship_center).abs()));

        match target {
            Some(x) if (x - ship_center).abs() > player.speed => {
                if x > ship_center {
                    Axis::Positive
                } else {
                    Axis::Negative
                }
            }
            _ => Axis::Neutral,
        }
    }
}

/// The closest enemy bullet falling into the ship's column.
fn incoming_bullet<'a>(player: &PlayerView, bullets: &'a [BulletView]) -> Option<&'a BulletView> {
    let ship_center = player.position.x + player.width / 2.0;
    bullets
        .iter()
        .filter(|b| (b.position.x - ship_center).abs() < player.width / 2.0 + b.radius)
        .filter(|b| b.position.y < player.position.y + player.height)
        .filter(|b| player.position.y - b.position.y < DODGE_LOOKAHEAD)
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
}

impl InputSource for Autopilot {
    fn next_intent(&mut self, last: Option<&GameStateSnapshot>) -> Intent {
        let Some(snapshot) = last else {
            return Intent::idle();
        };
        if snapshot.phase == GamePhase::GameOver {
            return if self.auto_restart {
                Intent::restart()
            } else {
                Intent::idle()
            };
        }
        let Some(player) = &snapshot.player else {
            return Intent::idle();
        };

        Intent {
            move_x: self.steer(player, snapshot),
            move_y: Axis::Neutral,
            // The cooldown drops by one before the fire check.
            fire: player.shoot_cooldown <= 1 && !snapshot.enemies.is_empty(),
            restart: false,
        }
    }
}
