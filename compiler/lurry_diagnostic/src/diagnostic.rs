use std::fmt;

use lurry_ir::Position;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A located, coded report of one template error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub pos: Position,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with the given code.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            pos: Position::NONE,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render against the template source, quoting the offending line.
    ///
    /// Falls back to the plain header when the position is unknown or lies
    /// outside `source`.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        if self.pos.is_none() {
            return out;
        }
        let line_no = self.pos.line as usize;
        let Some(line) = source.split('\n').nth(line_no.saturating_sub(1)) else {
            return out;
        };
        let line = line.strip_suffix('\r').unwrap_or(line);
        // After the first line, a newline owns column 0 and text starts at 1.
        let offset = if line_no <= 1 {
            self.pos.column as usize
        } else {
            (self.pos.column as usize).saturating_sub(1)
        };
        let gutter = line_no.to_string();
        let pad = " ".repeat(gutter.len());
        let marker = " ".repeat(offset.min(line.len()));
        out.push_str(&format!("\n{pad} |\n{gutter} | {line}\n{pad} | {marker}^"));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if !self.pos.is_none() {
            write!(f, "\n  --> {}", self.pos)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
