//! Command handlers for the Rill CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod lex;

pub use lex::{lex_file, parse_lex_options, render_lex, LexOptions, OptionError};

use crate::input::read_source;

/// Read a source file, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
