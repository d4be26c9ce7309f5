// src/views/mod.rs

pub mod row;

pub use row::NodeRow;
