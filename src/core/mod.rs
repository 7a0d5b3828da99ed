// src/core/mod.rs
pub mod merger;
pub mod normalize;
pub mod types;
