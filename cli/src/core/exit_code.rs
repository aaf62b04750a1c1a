use crate::core::error::JslexError;

/// Exit codes for the jslex CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// Lexical error in the source
    SyntaxError = 2,
    /// File not found or IO error
    FileError = 4,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(jslex_error) = error.downcast_ref::<JslexError>() {
            match jslex_error {
                JslexError::Io(_) | JslexError::File(_) => ExitCode::FileError,
                JslexError::Syntax(_) => ExitCode::SyntaxError,
            }
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
