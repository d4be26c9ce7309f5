// src/animation/state.rs
//
// Per-node animation progress. A node is idle (dir == 0) or sweeping its
// scale toward prev_scale + dir; settlement snaps the scale and commits it.

use super::scale::{self, LINES};

#[derive(Debug, Clone, Default)]
pub struct ScaleState {
    scale: f32,
    dir: f32,
    prev_scale: f32,
}

impl ScaleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Advances one tick. Returns true when the half-cycle settles:
    /// the scale snaps to its target, direction resets to idle and the
    /// new value is committed.
    pub fn update(&mut self) -> bool {
        self.scale += scale::update_value(self.scale, self.dir, 1.0, LINES as f32);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return true;
        }
        false
    }

    /// Begins a half-cycle away from the committed value. Returns false
    /// without touching anything if a sweep is already running.
    pub fn start(&mut self) -> bool {
        if self.dir == 0.0 {
            self.dir = 1.0 - 2.0 * self.prev_scale;
            return true;
        }
        false
    }
}
