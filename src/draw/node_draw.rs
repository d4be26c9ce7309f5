// src/draw/node_draw.rs
//
// Draws one node's cluster of rotating segments. Geometry is computed in the
// original top-left, y-down canvas frame and converted to nannou's centered,
// y-up coordinates at the last step.

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{DrawParams, NodeSurface};
use crate::animation::scale::{self, LINES};

/// Screen-space layout for the row, derived from the window size once at
/// startup instead of read from globals.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub size: f32,
}

impl NodeLayout {
    pub fn new(width: f32, height: f32, node_count: usize, size_factor: f32) -> Self {
        let gap = width / (node_count + 1) as f32;
        Self {
            width,
            height,
            gap,
            size: gap / size_factor,
        }
    }

    fn to_screen(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

/// One segment, anchored at its lower end and swung by up to a quarter turn.
fn draw_segment(
    draw: &Draw,
    layout: &NodeLayout,
    params: &DrawParams,
    origin: Vec2,
    sf: f32,
    sif: f32,
    seg_scale: f32,
) {
    let s = layout.size * sf;
    let theta = FRAC_PI_2 * seg_scale * sif;
    let start = origin + vec2(0.0, -s);
    let end = origin + vec2(-s * theta.sin(), s * theta.cos() - s);
    draw.line()
        .points(layout.to_screen(start), layout.to_screen(end))
        .color(params.color)
        .stroke_weight(params.stroke_weight)
        .caps_round();
}

/// Canvas-frame position of a node's cluster center: below the bottom edge
/// while idle, rising to mid-screen as the second sub-scale sweeps in.
pub fn node_center(layout: &NodeLayout, index: usize, sc2: f32) -> Vec2 {
    vec2(
        layout.gap * (index + 1) as f32,
        (layout.height + layout.size) - (layout.height / 2.0 + layout.size) * sc2,
    )
}

pub fn draw_node(draw: &Draw, layout: &NodeLayout, params: &DrawParams, index: usize, scale: f32) {
    let sc2 = scale::divide_scale(scale, 1, 2);
    let center = node_center(layout, index, sc2);
    for j in 0..LINES / 2 {
        let sf = 1.0 - 2.0 * j as f32;
        let scj = scale::divide_scale(sc2, j, LINES);
        for k in 0..LINES / 2 {
            let sif = 1.0 - 2.0 * k as f32;
            draw_segment(draw, layout, params, center, sf, sif, scj);
        }
    }
}

/// NodeSurface over a nannou Draw context.
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    layout: &'a NodeLayout,
    params: &'a DrawParams,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, layout: &'a NodeLayout, params: &'a DrawParams) -> Self {
        Self {
            draw,
            layout,
            params,
        }
    }
}

impl NodeSurface for NannouSurface<'_> {
    fn draw_node(&mut self, index: usize, scale: f32) {
        draw_node(self.draw, self.layout, self.params, index, scale);
    }
}
