// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

//! Minimal Clustal reader.
//!
//! A Clustal file is a header line followed by blocks. Each block has one line per sequence
//! (label, residues, and optionally a running position counter), and may end with an indented
//! conservation line. Labels may contain spaces, so a sequence line is split on its *last*
//! whitespace boundary.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use itertools::Itertools;
use log::{debug, warn};
use regex::Regex;

use crate::config::ParserConfig;
use crate::errors::ClustalError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

// MUSCLE writes its own name instead of CLUSTAL in the header of its Clustal output.
const HEADER_PREFIXES: [&str; 2] = ["CLUSTAL", "MUSCLE"];

/// Labels in order of first appearance, and for each label its fragments in block order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClustalAlignment {
    fragments: HashMap<String, Vec<String>>,
    labels: Vec<String>,
}

impl ClustalAlignment {
    fn push(&mut self, label: String, fragment: String) {
        self.fragments
            .entry(label.clone())
            .or_insert_with(|| {
                self.labels.push(label);
                Vec::new()
            })
            .push(fragment);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn fragments(&self, label: &str) -> Option<&[String]> {
        self.fragments.get(label).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn into_parts(self) -> (HashMap<String, Vec<String>>, Vec<String>) {
        (self.fragments, self.labels)
    }

    /// Joins each label's fragments into one aligned sequence, in label order.
    pub fn to_seq_file(&self) -> SeqFile {
        self.labels
            .iter()
            .map(|label| SeqRecord {
                header: label.clone(),
                sequence: self
                    .fragments
                    .get(label)
                    .map(|frags| frags.concat())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// True iff `line` holds sequence data, i.e. is not blank, not a header, and not indented
/// (conservation lines are).
pub fn is_clustal_seq_line(line: &str) -> bool {
    if line.trim_end().is_empty() {
        return false;
    }
    if HEADER_PREFIXES.iter().any(|hdr| line.starts_with(hdr)) {
        return false;
    }
    !line.starts_with(char::is_whitespace)
}

/// Splits on the last run of whitespace: everything before it (whitespace runs squeezed to one
/// space), and the last token. A line with a single token gives just that token.
pub fn last_space(line: &str) -> Vec<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, init)) if !init.is_empty() => {
            vec![init.iter().join(" "), last.to_string()]
        }
        _ => tokens.into_iter().map(String::from).collect(),
    }
}

fn trailing_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*\S)\s+[0-9]+\s*$").expect("valid regex"))
}

/// Removes a trailing all-digit token (the position counter) and the whitespace before it.
pub fn delete_trailing_number(line: &str) -> String {
    match trailing_number_re().captures(line) {
        Some(caps) => caps[1].to_string(),
        None => line.to_string(),
    }
}

fn split_seq_line(line: &str) -> Option<(String, String)> {
    let mut fields = last_space(&delete_trailing_number(line)).into_iter();
    match (fields.next(), fields.next()) {
        (Some(label), Some(fragment)) => Some((label, fragment)),
        _ => None,
    }
}

/// Parses pre-split lines of a Clustal alignment.
///
/// Headers, blank lines and conservation lines are skipped. A line that looks like sequence data
/// but has no label/fragment split is an error if `config.strict`, and is skipped otherwise.
pub fn parse_clustal_lines<I, S>(
    lines: I,
    config: &ParserConfig,
) -> Result<ClustalAlignment, ClustalError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut alignment = ClustalAlignment::default();
    let mut num_seq_lines = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if !is_clustal_seq_line(line) {
            continue;
        }
        match split_seq_line(line) {
            Some((label, fragment)) => {
                alignment.push(label, fragment);
                num_seq_lines += 1;
            }
            None if config.strict => {
                return Err(ClustalError::Record {
                    line_no: idx + 1,
                    line: line.to_string(),
                });
            }
            None => warn!("Skipping malformed line {}: '{}'", idx + 1, line),
        }
    }

    debug!("{} sequence lines, {} labels", num_seq_lines, alignment.len());
    Ok(alignment)
}

pub fn parse_clustal_str(
    text: &str,
    config: &ParserConfig,
) -> Result<ClustalAlignment, ClustalError> {
    parse_clustal_lines(text.lines(), config)
}

pub fn read_clustal_file<P: AsRef<Path>>(
    path: P,
    config: &ParserConfig,
) -> Result<ClustalAlignment, ClustalError> {
    let file = File::open(path)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()?;
    parse_clustal_lines(lines, config)
}
