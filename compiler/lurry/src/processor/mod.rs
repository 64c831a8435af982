//! Named query templates, compiled on first use.
//!
//! Templates are registered per `(entity, query)` pair. The first
//! [`QueryProcessor::prepare`] or [`QueryProcessor::map_rows`] call for a
//! pair compiles its text; the program is cached under that pair and
//! reused afterwards. Every run gets a fresh [`Interpreter`], so nothing a
//! template defines leaks into the next run.

use std::rc::Rc;

use lurry_eval::{
    stdout_handler, HostRegistry, Interpreter, Row, SharedPrintHandler, TypeResolver, Value,
};
use lurry_ir::Stmt;
use rustc_hash::FxHashMap;
use tracing::{debug, error};

use crate::{compile, Error};

/// One registered template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub entity: String,
    pub name: String,
    pub source: String,
    /// Name of the mapper declared in `source`, used by `map_rows`.
    pub mapper: Option<String>,
}

impl Query {
    pub fn new(
        entity: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Query {
            entity: entity.into(),
            name: name.into(),
            source: source.into(),
            mapper: None,
        }
    }

    #[must_use]
    pub fn with_mapper(mut self, mapper: impl Into<String>) -> Self {
        self.mapper = Some(mapper.into());
        self
    }

    fn key(&self) -> QueryKey {
        query_key(&self.entity, &self.name)
    }
}

/// Entity and query name, kept apart so no pair can alias another.
type QueryKey = (String, String);

fn query_key(entity: &str, query: &str) -> QueryKey {
    (entity.to_owned(), query.to_owned())
}

pub struct QueryProcessorBuilder {
    print_handler: Option<SharedPrintHandler>,
    types: Option<Rc<dyn TypeResolver>>,
}

impl QueryProcessorBuilder {
    pub fn new() -> Self {
        QueryProcessorBuilder {
            print_handler: None,
            types: None,
        }
    }

    /// Where template `println` output goes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Host types visible to `import`. Defaults to an empty registry.
    #[must_use]
    pub fn types(mut self, types: Rc<dyn TypeResolver>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn build(self) -> QueryProcessor {
        QueryProcessor {
            queries: FxHashMap::default(),
            compiled: FxHashMap::default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            types: self
                .types
                .unwrap_or_else(|| Rc::new(HostRegistry::new())),
        }
    }
}

impl Default for QueryProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct QueryProcessor {
    queries: FxHashMap<QueryKey, Query>,
    compiled: FxHashMap<QueryKey, Rc<[Stmt]>>,
    print_handler: SharedPrintHandler,
    types: Rc<dyn TypeResolver>,
}

impl QueryProcessor {
    pub fn new() -> Self {
        QueryProcessorBuilder::new().build()
    }

    pub fn builder() -> QueryProcessorBuilder {
        QueryProcessorBuilder::new()
    }

    /// Register a template, replacing any earlier one for the same pair
    /// and dropping its compiled program.
    pub fn register(&mut self, query: Query) {
        let key = query.key();
        self.compiled.remove(&key);
        self.queries.insert(key, query);
    }

    pub fn query(&self, entity: &str, query: &str) -> Option<&Query> {
        self.queries.get(&query_key(entity, query))
    }

    /// Number of templates compiled so far.
    pub fn compiled_count(&self) -> usize {
        self.compiled.len()
    }

    /// Run a template with `params` bound as globals and return the display
    /// text of its final value.
    pub fn prepare<K, I>(&mut self, entity: &str, query: &str, params: I) -> Result<String, Error>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let program = self.program(entity, query)?;
        let mut interpreter = self.interpreter();
        for (name, value) in params {
            interpreter.define(name, value);
        }
        match interpreter.execute(&program) {
            Ok(value) => Ok(value.to_string()),
            Err(e) => {
                error!(entity, query, error = %e, "template evaluation failed");
                Err(e.into())
            }
        }
    }

    /// Run a template, then apply its declared mapper to every row.
    pub fn map_rows<R: Row>(
        &mut self,
        entity: &str,
        query: &str,
        rows: &[R],
    ) -> Result<Vec<Value>, Error> {
        let mapper_name = self
            .query(entity, query)
            .ok_or_else(|| query_not_found(entity, query))?
            .mapper
            .clone()
            .ok_or_else(|| Error::NoMapper {
                entity: entity.to_owned(),
                query: query.to_owned(),
            })?;
        let program = self.program(entity, query)?;
        let mut interpreter = self.interpreter();
        interpreter.execute(&program)?;

        let mapper = interpreter
            .lookup(&mapper_name)
            .map_err(|_| Error::MapperNotFound {
                entity: entity.to_owned(),
                query: query.to_owned(),
                mapper: mapper_name.clone(),
            })?;
        if !matches!(mapper, Value::Mapper(_)) {
            return Err(Error::NotAMapper {
                name: mapper_name,
                type_name: mapper.type_name().to_owned(),
            });
        }

        debug!(entity, query, rows = rows.len(), "mapping rows");
        rows.iter()
            .map(|row| interpreter.map_row(&mapper, row).map_err(Error::from))
            .collect()
    }

    fn program(&mut self, entity: &str, query: &str) -> Result<Rc<[Stmt]>, Error> {
        let key = query_key(entity, query);
        if let Some(program) = self.compiled.get(&key) {
            debug!(entity, query, "template cache hit");
            return Ok(Rc::clone(program));
        }
        let source = &self
            .queries
            .get(&key)
            .ok_or_else(|| query_not_found(entity, query))?
            .source;
        debug!(entity, query, "template cache miss");
        let program: Rc<[Stmt]> = match compile(source) {
            Ok(program) => program.into(),
            Err(e) => {
                error!(entity, query, error = %e, "template failed to compile");
                return Err(e);
            }
        };
        self.compiled.insert(key, Rc::clone(&program));
        Ok(program)
    }

    fn interpreter(&self) -> Interpreter {
        Interpreter::builder()
            .print_handler(SharedPrintHandler::clone(&self.print_handler))
            .types(Rc::clone(&self.types))
            .build()
    }
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn query_not_found(entity: &str, query: &str) -> Error {
    Error::QueryNotFound {
        entity: entity.to_owned(),
        query: query.to_owned(),
    }
}
