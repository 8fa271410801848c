// src/lib.rs
//! Phoneme-level processing of Devanagari Sanskrit: syllables, varna
//! decomposition, pratyaharas and articulation classes.

pub mod config;
pub mod core;
pub mod error;
pub mod normalize;

pub use crate::config::Config;
pub use crate::core::articulation::{Dimension, Signature};
pub use crate::core::converter::split_varna_word;
pub use crate::core::engine::{
    flatten, join_varna, split_varna, split_varna_flat, syllables, VarnaEngine,
};
pub use crate::core::maheshwara::{MaheshwaraIndex, Pratyahara};
pub use crate::core::syllable::syllabify;
pub use crate::core::types::{Nested, Varna};
pub use crate::error::{RangeError, Result, VarnaError};
pub use crate::normalize::{clean, fix_anuswara, CleanOptions};
