// src/services/mod.rs
pub mod gemini;
pub mod model;
pub mod normalizer;
