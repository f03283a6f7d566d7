// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum ClustalError {
    Io(io::Error),
    Config(String),
    // A line that looks like sequence data but has no label/fragment split. Line numbers start
    // at 1.
    Record { line_no: usize, line: String },
}

// These allow conversion to ClustalError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for ClustalError {
    fn from(e: io::Error) -> Self {
        ClustalError::Io(e)
    }
}

impl From<serde_json::Error> for ClustalError {
    fn from(e: serde_json::Error) -> Self {
        ClustalError::Config(e.to_string())
    }
}

impl fmt::Display for ClustalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClustalError::Io(e) => write!(f, "I/O error: {}", e),
            ClustalError::Config(msg) => write!(f, "Config error: {}", msg),
            ClustalError::Record { line_no, line } => {
                write!(f, "Record error: failed to parse line {}: '{}'", line_no, line)
            }
        }
    }
}

impl error::Error for ClustalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ClustalError::Io(e) => Some(e),
            _ => None,
        }
    }
}
