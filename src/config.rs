// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::errors::ClustalError;

pub const CONFIG_FILE_NAME: &str = ".clustalparse.json";

/// Options for the Clustal parser.
///
/// In strict mode (the default), a line that looks like sequence data but cannot be split into a
/// label and a fragment is an error. Otherwise such lines are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { strict: true }
    }
}

impl ParserConfig {
    pub fn lax() -> Self {
        ParserConfig { strict: false }
    }

    pub fn from_json(text: &str) -> Result<Self, ClustalError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClustalError> {
        let text = fs::read_to_string(path.as_ref())?;
        debug!("Read parser config from {}", path.as_ref().display());
        Self::from_json(&text)
    }
}

// $HOME first, then the working directory.
fn config_search_dirs() -> Vec<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .into_iter()
        .chain(std::env::current_dir().ok())
        .collect()
}

/// First `.clustalparse.json` found in `dirs`, in order.
pub fn find_config_file_in<P: AsRef<Path>>(dirs: &[P]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.as_ref().join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(&config_search_dirs())
}
