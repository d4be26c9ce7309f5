// src/animation/mod.rs

pub mod animator;
pub mod scale;
pub mod state;

pub use animator::Animator;
pub use state::ScaleState;
