//! Lurry - SQL templates written in a small scripting language.
//!
//! This crate ties the pipeline together:
//!
//! ```text
//! source --lurry_lexer--> tokens --lurry_parse--> AST --lurry_eval--> Value
//! ```
//!
//! - [`compile`]: source text to a program
//! - [`QueryProcessor`]: named templates per entity, compiled once and cached,
//!   run with parameters ([`QueryProcessor::prepare`]) or applied to rows
//!   through a mapper ([`QueryProcessor::map_rows`])
//! - [`init_tracing`]: opt-in logging through `RUST_LOG`

mod error;
mod processor;

use std::sync::Once;

use lurry_ir::Stmt;

pub use error::Error;
pub use processor::{Query, QueryProcessor, QueryProcessorBuilder};

pub use lurry_diagnostic::{Diagnostic, ErrorCode};
pub use lurry_eval::{
    buffer_handler, silent_handler, stdout_handler, EvalError, HostRegistry, HostType,
    Interpreter, MemoryRow, Row, SharedPrintHandler, SqlType, TypeResolver, Value,
};
pub use lurry_fmt::{format_program, program_sexpr};
pub use lurry_lexer::LexError;
pub use lurry_parse::ParseError;

/// Tokenize and parse a template.
pub fn compile(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = lurry_lexer::tokenize(source)?;
    Ok(lurry_parse::parse(&tokens)?)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=lurry_eval=trace cargo test -p lurry
/// RUST_LOG=lurry=debug,lurry_parse=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
