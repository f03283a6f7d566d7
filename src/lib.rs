pub mod config;
pub mod errors;
mod runner;
pub mod seq;

use crate::errors::ClustalError;

pub use crate::config::ParserConfig;
pub use crate::seq::clustal::{
    delete_trailing_number, is_clustal_seq_line, last_space, parse_clustal_lines,
    parse_clustal_str, read_clustal_file, ClustalAlignment,
};

pub fn run() -> Result<(), ClustalError> {
    runner::run()
}
