use std::fmt;

/// Result type for dsync-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by scope resolution and argument building. All are
/// terminal for the current invocation; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// --use-link-paths given for a bare endpoint target
    LinkPathsWithoutLink,

    /// --use-link-paths combined with an explicit relative_path argument
    LinkPathsWithScope,

    /// --use-link-paths combined with --all
    LinkPathsWithAll,

    /// Batch requested but the link has no configured paths
    NoConfiguredPaths { link: String },

    /// A partial_only link resolved to full root (explicit scope, CWD
    /// inference at the root, or the empty fallback)
    PartialOnlyFullRoot { link: String },

    /// A partial_only link was asked for full root via --all
    PartialOnlyForbidden { link: String },

    /// Scope normalization failed
    Scope(dsync_types::Error),

    /// Sync spec failed builder validation
    Spec(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LinkPathsWithoutLink => {
                write!(f, "--use-link-paths is only valid with --link")
            }
            Error::LinkPathsWithScope => {
                write!(f, "--use-link-paths conflicts with a relative_path argument")
            }
            Error::LinkPathsWithAll => write!(f, "--use-link-paths conflicts with --all"),
            Error::NoConfiguredPaths { link } => {
                write!(f, "link \"{link}\" has no configured paths")
            }
            Error::PartialOnlyFullRoot { link } => write!(
                f,
                "link \"{link}\" is partial_only; provide a non-empty scope or use --use-link-paths"
            ),
            Error::PartialOnlyForbidden { link } => write!(
                f,
                "link \"{link}\" is partial_only; full-root operations are forbidden"
            ),
            Error::Scope(err) => write!(f, "{err}"),
            Error::Spec(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Scope(err) => Some(err),
            _ => None,
        }
    }
}

impl From<dsync_types::Error> for Error {
    fn from(err: dsync_types::Error) -> Self {
        Error::Scope(err)
    }
}
