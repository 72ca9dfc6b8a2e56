//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{AREA_HEIGHT, AREA_WIDTH, DT};

/// 2D position in play-area units. y grows downward.
///
/// For rectangular bodies this is the top-left corner; for circular bodies
/// it is the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Per-tick displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Bounding extent of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// Dimensions of the visible play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Shape {
    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        match *self {
            Shape::Rect { width, .. } => width,
            Shape::Circle { radius } => radius * 2.0,
        }
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        match *self {
            Shape::Rect { height, .. } => height,
            Shape::Circle { radius } => radius * 2.0,
        }
    }

    /// Center of a body with this shape anchored at `pos`.
    pub fn center(&self, pos: &Position) -> Position {
        match *self {
            Shape::Rect { width, height } => Position::new(pos.x + width / 2.0, pos.y + height / 2.0),
            Shape::Circle { .. } => *pos,
        }
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a rect's top-left corner so the rect stays fully inside the area.
    pub fn clamp_rect(&self, pos: Position, width: f32, height: f32) -> Position {
        Position::new(
            pos.x.clamp(0.0, (self.width - width).max(0.0)),
            pos.y.clamp(0.0, (self.height - height).max(0.0)),
        )
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
