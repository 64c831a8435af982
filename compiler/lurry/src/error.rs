use lurry_diagnostic::Diagnostic;
use lurry_eval::EvalError;
use lurry_lexer::LexError;
use lurry_parse::ParseError;

/// Any failure while compiling or running a query template.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("not found query [entity='{entity}', queryName={query}]")]
    QueryNotFound { entity: String, query: String },

    #[error("query [entity='{entity}', queryName={query}] declares no mapper")]
    NoMapper { entity: String, query: String },

    #[error("mapper '{mapper}' not found in query [entity='{entity}', queryName={query}]")]
    MapperNotFound {
        entity: String,
        query: String,
        mapper: String,
    },

    #[error("'{name}' is a {type_name}, not a mapper")]
    NotAMapper { name: String, type_name: String },
}

impl Error {
    /// Source-located report for stage errors; `None` for lookup failures,
    /// which have no position in a template.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Error::Lex(e) => Some(e.to_diagnostic()),
            Error::Parse(e) => Some(e.to_diagnostic()),
            Error::Eval(e) => Some(e.to_diagnostic()),
            Error::QueryNotFound { .. }
            | Error::NoMapper { .. }
            | Error::MapperNotFound { .. }
            | Error::NotAMapper { .. } => None,
        }
    }
}
