//! `rill lex`: tokenize a file and print the token list.

use rill_lexer::{lex_with_config, LexConfig, UnknownLexemePolicy};

use super::read_file;

/// Options accepted by `rill lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: LexConfig,
}

/// A flag `rill lex` does not understand.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown value '{0}' for --on-unknown (expected 'drop' or 'error')")]
    UnknownPolicy(String),
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
}

/// Parse the flags following the file path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, OptionError> {
    let mut options = LexOptions::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--on-unknown=") {
            options.config.unknown_lexemes = UnknownLexemePolicy::from_name(value)
                .ok_or_else(|| OptionError::UnknownPolicy(value.to_string()))?;
        } else {
            return Err(OptionError::UnknownFlag(arg.clone()));
        }
    }
    Ok(options)
}

/// Lex `source` and return the rendered token list.
///
/// Unrecognized lexemes are logged at `warn`; they only appear in the output
/// under [`UnknownLexemePolicy::ErrorToken`].
pub fn render_lex(source: &str, options: &LexOptions) -> String {
    let output = lex_with_config(source, &options.config);
    for err in &output.errors {
        tracing::warn!(line = err.line, span = %err.span, text = %err.text, "unrecognized lexeme");
    }
    output.render()
}

/// Lex a file and print its token list to stdout.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    println!("{}", render_lex(&content, options));
}
