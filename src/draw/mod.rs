// src/draw/mod.rs
//
// The node drawing module. The animation core only ever talks to the
// NodeSurface trait; node_draw holds the nannou implementation.

pub mod node_draw;

pub use node_draw::{NannouSurface, NodeLayout};

use nannou::prelude::*;

/// What the animation core needs from a drawing backend: paint the cluster
/// for one node. Must accept any scale the core produces (roughly 0..1.2).
pub trait NodeSurface {
    fn draw_node(&mut self, index: usize, scale: f32);
}

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb(0.404, 0.227, 0.718),
            stroke_weight: 8.0,
        }
    }
}
