// src/config/config_types.rs
//
// Config types for the app. The animation constants themselves are fixed in
// animation::scale; these cover the window and the look of the row.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub fore_color: [f32; 3],
    pub back_color: [f32; 3],
    pub stroke_factor: f32,
    pub size_factor: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: [0.404, 0.227, 0.718],
            back_color: [0.741, 0.741, 0.741],
            stroke_factor: 90.0,
            size_factor: 2.9,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub tick_interval: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval: 0.05,
        }
    }
}
