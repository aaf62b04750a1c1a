use jslex_lib::{line_col, SyntaxError};
use std::fmt;
use std::io;
use std::path::Path;

/// Shows `path` relative to the working directory when it lies below it.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}

/// A lexical error resolved against the source it came from.
#[derive(Debug)]
pub struct SourceError {
    pub error: SyntaxError,
    pub line: usize,
    pub column: usize,
    pub file_path: Option<String>,
}

impl SourceError {
    pub fn new(error: SyntaxError, source: &str, file_path: Option<String>) -> Self {
        let (line, column) = line_col(source, error.from);
        Self {
            error,
            line,
            column,
            file_path,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file_path {
            write!(
                f,
                "Syntax error in {} at line {}, column {}: {}",
                display_path(Path::new(file)),
                self.line,
                self.column,
                self.error.message
            )
        } else {
            write!(
                f,
                "Syntax error at line {}, column {}: {}",
                self.line, self.column, self.error.message
            )
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[derive(Debug)]
pub enum JslexError {
    Io(io::Error),
    /// The source path is missing or is not a regular file.
    File(String),
    Syntax(SourceError),
}

impl fmt::Display for JslexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JslexError::Io(err) => write!(f, "IO error: {err}"),
            JslexError::File(msg) => write!(f, "{msg}"),
            JslexError::Syntax(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for JslexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JslexError::Io(err) => Some(err),
            JslexError::Syntax(err) => Some(err),
            JslexError::File(_) => None,
        }
    }
}

impl From<io::Error> for JslexError {
    fn from(err: io::Error) -> Self {
        JslexError::Io(err)
    }
}

impl From<SourceError> for JslexError {
    fn from(err: SourceError) -> Self {
        JslexError::Syntax(err)
    }
}
