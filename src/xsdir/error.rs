use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while reading the xsdir or writing its Serpent variant.
#[derive(Debug)]
pub enum XsdirError {
    /// The input path does not exist. Checked before any read.
    NotFound(PathBuf),
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for XsdirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XsdirError::NotFound(path) => write!(f, "File '{}' not found.", path.display()),
            XsdirError::Read { path, source } => {
                write!(f, "Error reading file '{}': {}", path.display(), source)
            }
            XsdirError::Write { path, source } => {
                write!(f, "Error writing file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for XsdirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XsdirError::NotFound(_) => None,
            XsdirError::Read { source, .. } | XsdirError::Write { source, .. } => Some(source),
        }
    }
}
