// src/render/renderer.rs
//
// Composes the node row with its tick source. A tap arms the animator only
// when the active node is idle; ticks then drive the row until the current
// half-cycle settles, at which point the animator stops and the system waits
// for the next tap.

use crate::animation::Animator;
use crate::draw::NodeSurface;
use crate::views::NodeRow;

pub struct Renderer {
    row: NodeRow,
    animator: Animator,
}

impl Renderer {
    pub fn new(node_count: usize, tick_period: f32) -> Self {
        Self {
            row: NodeRow::new(node_count),
            animator: Animator::new(tick_period),
        }
    }

    pub fn row(&self) -> &NodeRow {
        &self.row
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    /// Repaints the whole row onto the given surface.
    pub fn render(&self, surface: &mut dyn NodeSurface) {
        self.row.draw(surface);
    }

    /// Accepts a tap only when the active node is idle; a tap mid-animation
    /// is ignored. Returns whether the tap started a half-cycle.
    pub fn handle_tap(&mut self) -> bool {
        if self.row.start_updating() {
            self.animator.start();
            return true;
        }
        false
    }

    /// Drains elapsed ticks and advances the row, stopping the animator on
    /// settlement. Returns true when at least one tick fired, i.e. the
    /// caller should repaint.
    pub fn update(&mut self, dt: f32) -> bool {
        let ticks = self.animator.tick(dt);
        for _ in 0..ticks {
            if self.row.update() {
                self.animator.stop();
                break;
            }
        }
        ticks > 0
    }
}
