//! rsync argument planning. The output is a literal argument vector for
//! the external rsync executable; nothing here runs it.

use dsync_types::{Scope, ensure_trailing_slash};

use crate::error::{Error, Result};

/// Staging directory rsync uses for interrupted transfers.
pub const PARTIAL_DIR: &str = ".dsync-partial";

/// A fully resolved transfer: roots with contents semantics plus the
/// transport flags that shape the argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSpec {
    pub source: String,
    pub dest: String,
    pub use_ssh: bool,
    /// Delete extraneous destination files.
    pub mirror: bool,
    /// Exclude patterns, configuration-level before link-level.
    pub excludes: Vec<String>,
    pub dry_run: bool,
}

/// Build the rsync argument vector for one transfer.
///
/// Source and destination must already carry contents semantics (trailing
/// `/`); the builder refuses anything else rather than guessing.
pub fn build_args(spec: &SyncSpec) -> Result<Vec<String>> {
    if spec.source.is_empty() {
        return Err(Error::Spec("source is required".to_string()));
    }
    if spec.dest.is_empty() {
        return Err(Error::Spec("dest is required".to_string()));
    }
    if !spec.source.ends_with('/') {
        return Err(Error::Spec(format!(
            "source must end with '/' (contents semantics): {:?}",
            spec.source
        )));
    }
    if !spec.dest.ends_with('/') {
        return Err(Error::Spec(format!(
            "dest must end with '/' (contents semantics): {:?}",
            spec.dest
        )));
    }

    let mut args: Vec<String> = [
        "-a",
        "--no-owner",
        "--no-group",
        "--mkpath",
        "--protect-args",
        "--partial",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.push(format!("--partial-dir={PARTIAL_DIR}"));
    args.extend(
        ["--human-readable", "--stats", "--itemize-changes"]
            .iter()
            .map(|s| s.to_string()),
    );

    if spec.mirror {
        args.push("--delete".to_string());
        args.push("--delete-delay".to_string());
    }

    if spec.use_ssh {
        args.push("-e".to_string());
        args.push("ssh".to_string());
    }

    for exclude in &spec.excludes {
        let exclude = exclude.trim();
        if exclude.is_empty() {
            continue;
        }
        args.push("--exclude".to_string());
        args.push(exclude.to_string());
    }

    if spec.dry_run {
        args.push("--dry-run".to_string());
    }

    args.push(spec.source.clone());
    args.push(spec.dest.clone());
    Ok(args)
}

/// Build the preview (dry-run) and apply vectors for the same spec. The
/// two differ by exactly the `--dry-run` element.
pub fn build_preview_apply(spec: &SyncSpec) -> Result<(Vec<String>, Vec<String>)> {
    let preview = build_args(&SyncSpec {
        dry_run: true,
        ..spec.clone()
    })?;
    let apply = build_args(&SyncSpec {
        dry_run: false,
        ..spec.clone()
    })?;
    Ok((preview, apply))
}

/// Join a root with a scope under contents semantics; the result always
/// ends in `/`. A full-root scope appends nothing.
pub fn append_scope(root: &str, scope: &Scope) -> String {
    let root = ensure_trailing_slash(root);
    match scope {
        Scope::FullRoot => root,
        Scope::Scoped(path) => format!("{root}{path}/"),
    }
}
