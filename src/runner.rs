// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use log::info;

use clap::Parser;

use crate::config::{find_config_file, ParserConfig};
use crate::errors::ClustalError;
use crate::seq::clustal::{read_clustal_file, ClustalAlignment};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Clustal alignment file
    aln_fname: PathBuf,

    /// Skip malformed sequence lines instead of failing
    #[arg(short, long)]
    lax: bool,

    /// Parser config (JSON); default: ~/.clustalparse.json, then ./.clustalparse.json
    #[arg(short, long = "config")]
    config: Option<PathBuf>,
}

// An explicit config path wins over the default locations; --lax wins over any config.
fn resolve_config(config_path: Option<&Path>, lax: bool) -> Result<ParserConfig, ClustalError> {
    let mut config = match config_path.map(Path::to_path_buf).or_else(find_config_file) {
        Some(path) => {
            info!("Using parser config {}", path.display());
            ParserConfig::from_file(&path)?
        }
        None => ParserConfig::default(),
    };
    if lax {
        config.strict = false;
    }
    Ok(config)
}

// One `label<TAB>fragments<TAB>aligned length` line per label, then the sequence count.
fn summary(alignment: &ClustalAlignment) -> String {
    let mut lines: Vec<String> = alignment
        .to_seq_file()
        .iter()
        .map(|rec| {
            let num_frags = alignment.fragments(&rec.header).map_or(0, |f| f.len());
            format!("{}\t{}\t{}", rec.header, num_frags, rec.aligned_len())
        })
        .collect();
    lines.push(format!("{} sequences", alignment.len()));
    lines.join("\n")
}

pub fn run() -> Result<(), ClustalError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.lax)?;

    info!("Reading {} (strict: {})", cli.aln_fname.display(), config.strict);
    let alignment = read_clustal_file(&cli.aln_fname, &config)?;
    println!("{}", summary(&alignment));

    Ok(())
}
