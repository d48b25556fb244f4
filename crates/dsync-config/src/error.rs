use std::fmt;
use std::path::PathBuf;

/// Result type for dsync-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating, reading, or validating the
/// configuration file.
#[derive(Debug)]
pub enum Error {
    /// No configuration file exists at any searched location
    NotFound { searched: Vec<PathBuf> },

    /// Configuration file exists but is semantically invalid; every
    /// discovered issue is listed, not just the first
    Validation { issues: Vec<String> },

    /// IO operation failed
    Io(std::io::Error),

    /// TOML deserialization failed
    Toml(toml::de::Error),

    /// Home directory could not be resolved
    Home,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { searched } => {
                if searched.is_empty() {
                    write!(f, "config not found (run 'dsync init' to create one)")
                } else {
                    let list: Vec<String> =
                        searched.iter().map(|p| p.display().to_string()).collect();
                    write!(
                        f,
                        "config not found (searched: {}). Run 'dsync init' to create one.",
                        list.join(", ")
                    )
                }
            }
            Error::Validation { issues } => {
                write!(f, "config validation failed:")?;
                for issue in issues {
                    write!(f, "\n- {issue}")?;
                }
                Ok(())
            }
            Error::Io(err) => write!(f, "IO error: {err}"),
            Error::Toml(err) => write!(f, "parse config: {err}"),
            Error::Home => write!(f, "unable to resolve home directory"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Toml(err) => Some(err),
            Error::NotFound { .. } | Error::Validation { .. } | Error::Home => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}
