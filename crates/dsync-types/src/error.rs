use std::fmt;

/// Result type for dsync-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scope input was an absolute path
    ScopeNotRelative,

    /// Scope input escapes the root after lexical cleaning
    ScopeTraversal,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ScopeNotRelative => write!(f, "scope must be a relative path"),
            Error::ScopeTraversal => write!(f, "scope must not traverse outside the root"),
        }
    }
}

impl std::error::Error for Error {}
