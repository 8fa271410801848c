// File: src/config.rs
use crate::error::Result;
use crate::normalize::CleanOptions;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Run-time settings shared by the command-line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clean: CleanOptions,
    /// Keep vowel signs and marks as separate tokens.
    pub technical: bool,
    /// Label categories with their short tags instead of Sanskrit names.
    pub abbrev: bool,
}

impl Config {
    /// Loads a JSON config. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
