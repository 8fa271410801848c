// File: src/core/mod.rs
pub mod alphabet;
pub mod articulation;
pub mod converter;
pub mod engine;
pub mod maheshwara;
pub mod syllable;
pub mod types;
