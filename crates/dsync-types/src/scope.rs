use std::fmt;

use crate::error::{Error, Result};

/// An operation scope below an endpoint root.
///
/// `FullRoot` means the operation covers the entire root. It is a distinct
/// alternative rather than an empty path so that "root" and "no scope
/// computed" can never be confused; `as_str` still yields `""` for it so
/// downstream consumers can append any scope to a root uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    FullRoot,
    Scoped(String),
}

impl Scope {
    /// Normalize raw user input into a scope.
    ///
    /// Whitespace is trimmed, `.` segments and repeated separators are
    /// dropped, and `..` folds into its parent. An input that cleans to
    /// nothing (empty, `.`, `./`) is the full root, not an error. Absolute
    /// paths and paths that still begin with `..` after cleaning are
    /// rejected.
    pub fn parse(raw: &str) -> Result<Scope> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Scope::FullRoot);
        }
        if raw.starts_with('/') {
            return Err(Error::ScopeNotRelative);
        }

        let mut parts: Vec<&str> = Vec::new();
        for comp in raw.split('/') {
            match comp {
                "" | "." => {}
                ".." => match parts.last() {
                    None | Some(&"..") => parts.push(".."),
                    Some(_) => {
                        parts.pop();
                    }
                },
                comp => parts.push(comp),
            }
        }

        match parts.first() {
            None => Ok(Scope::FullRoot),
            Some(&"..") => Err(Error::ScopeTraversal),
            Some(_) => Ok(Scope::Scoped(parts.join("/"))),
        }
    }

    /// The scope as an appendable path segment; `""` for the full root.
    pub fn as_str(&self) -> &str {
        match self {
            Scope::FullRoot => "",
            Scope::Scoped(path) => path,
        }
    }

    pub fn is_full_root(&self) -> bool {
        matches!(self, Scope::FullRoot)
    }

    /// Human-facing label used in plan output.
    pub fn label(&self) -> &str {
        match self {
            Scope::FullRoot => "full-root",
            Scope::Scoped(path) => path,
        }
    }
}

/// Where a resolved scope came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeSource {
    /// Explicit relative_path argument
    Cli,
    /// Inferred from the current working directory
    Cwd,
    /// The link's configured paths batch
    LinkPaths,
    /// Nothing supplied or inferable; full root
    Empty,
}

impl fmt::Display for ScopeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeSource::Cli => write!(f, "cli"),
            ScopeSource::Cwd => write!(f, "cwd"),
            ScopeSource::LinkPaths => write!(f, "link_paths"),
            ScopeSource::Empty => write!(f, "empty"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Warn => write!(f, "warn"),
        }
    }
}

/// An advisory message attached to a resolution, with optional remediation
/// hint lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub hints: Vec<String>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warn,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }
}

/// The outcome of scope resolution for one command invocation.
///
/// Constructed fresh per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeResolution {
    /// Ordered scopes the operation applies to; a single element unless
    /// `batch` is set.
    pub scopes: Vec<Scope>,
    pub source: ScopeSource,
    pub batch: bool,
    pub full_root: bool,
    pub notices: Vec<Notice>,
}

impl ScopeResolution {
    /// A single-scope resolution; `full_root` tracks the scope.
    pub fn single(scope: Scope, source: ScopeSource) -> Self {
        let full_root = scope.is_full_root();
        ScopeResolution {
            scopes: vec![scope],
            source,
            batch: false,
            full_root,
            notices: Vec::new(),
        }
    }

    /// A batch resolution over configured link paths. Batches are never
    /// full-root: configured paths are validated non-empty at load time.
    pub fn batch(scopes: Vec<Scope>, source: ScopeSource) -> Self {
        ScopeResolution {
            scopes,
            source,
            batch: true,
            full_root: false,
            notices: Vec::new(),
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
