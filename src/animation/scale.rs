// src/animation/scale.rs
//
// Pure scale arithmetic shared by the state machine and the draw routine.
// Everything here is deterministic; the draw tests rely on exact outputs.

/// Number of node positions in the row.
pub const NODES: usize = 5;

/// Segment pairs drawn per node.
pub const LINES: usize = 4;

/// Per-tick scale increment.
pub const SCALE_GAP: f32 = 0.05;

/// Threshold dividing the outbound and mirrored sweep of a half-cycle.
pub const SCALE_DIV: f32 = 0.51;

/// Shifts a global progress value into the window for slot `i` of `n`,
/// floored at zero.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Per-slot scale in [0, 1]: stays 0 until the global scale passes `i/n`,
/// saturates at 1 once past `(i+1)/n`. Staggers `n` slots across one sweep.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    max_scale(scale, i, n).min(1.0 / n as f32) * n as f32
}

/// 0 before the mirror threshold, 1 after it.
pub fn scale_factor(scale: f32) -> f32 {
    (scale / SCALE_DIV).floor()
}

/// Blends between the reciprocals of two rates, switching at the mirror
/// threshold. Makes the return sweep of a half-cycle run at a different
/// speed than the outbound sweep.
pub fn mirror_value(scale: f32, a: f32, b: f32) -> f32 {
    let k = scale_factor(scale);
    (1.0 - k) / a + k / b
}

/// The signed per-tick delta applied to a node's scale.
pub fn update_value(scale: f32, dir: f32, a: f32, b: f32) -> f32 {
    mirror_value(scale, a, b) * dir * SCALE_GAP
}
