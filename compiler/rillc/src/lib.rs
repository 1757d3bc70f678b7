//! Rill command-line front end.
//!
//! ```text
//! file on disk
//!     │ read_source (normalize line endings)
//!     ▼
//! String buffer
//!     │ rill_lexer::lex_with_config
//!     ▼
//! LexOutput ──► "[LET, IDENT x, ..., EOF]" on stdout
//! ```

pub mod commands;
pub mod input;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rill_lexer=trace` or
/// `RUST_LOG=rillc=debug`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
