//! Scope resolution: decide what subset of a tree an operation applies to.
//!
//! Precedence is an explicit ordered chain of early-return guards:
//! mutual-exclusion checks, then explicit relative path, then configured
//! batch paths, then forced full root, then CWD inference, then the
//! full-root fallback. Each guard either returns a complete resolution or
//! fails; later guards never revisit earlier decisions.

use dsync_types::{Link, Notice, Scope, ScopeResolution, ScopeSource, relative_to};

use crate::error::{Error, Result};

/// Input signals for one resolution. Everything is borrowed; resolution is
/// a pure function of this plus the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRequest<'a> {
    /// Invoking command name (`pull`/`push`), used verbatim in hints.
    pub command: &'a str,
    /// Explicit relative_path argument, when one was given.
    pub relative_path: Option<&'a str>,
    pub use_link_paths: bool,
    /// Force a full-root operation (`--all`).
    pub all: bool,
    /// Caller's current working directory, for scope inference.
    pub cwd: Option<&'a str>,
}

/// Resolve the scope for a bare endpoint target. Endpoints have no batch
/// paths, no CWD inference, and no partial-only concept; only an explicit
/// scope or the full-root fallback applies.
pub fn resolve_for_endpoint(req: &ResolveRequest) -> Result<ScopeResolution> {
    if req.use_link_paths {
        return Err(Error::LinkPathsWithoutLink);
    }

    if let Some(raw) = req.relative_path {
        return resolve_explicit(None, raw, req);
    }
    Ok(ScopeResolution::single(Scope::FullRoot, ScopeSource::Empty))
}

/// Resolve the scope for a link target.
pub fn resolve_for_link(link: &Link, req: &ResolveRequest) -> Result<ScopeResolution> {
    if req.use_link_paths {
        return resolve_batch(link, req);
    }
    if let Some(raw) = req.relative_path {
        return resolve_explicit(Some(link), raw, req);
    }
    if req.all {
        return resolve_forced_full_root(link);
    }
    if let Some(cwd) = req.cwd
        && let Some(res) = infer_from_cwd(link, cwd, req)?
    {
        return Ok(res);
    }
    resolve_fallback(link)
}

/// An explicit relative_path wins over everything else. A path that cleans
/// to nothing is a full-root request, not an error.
fn resolve_explicit(
    link: Option<&Link>,
    raw: &str,
    req: &ResolveRequest,
) -> Result<ScopeResolution> {
    let scope = Scope::parse(raw)?;
    let mut res = ScopeResolution::single(scope, ScopeSource::Cli);

    if req.all && !res.full_root {
        res.push_notice(Notice::info(
            "Ignoring --all because a non-empty scope was provided",
        ));
    }

    if let Some(link) = link {
        if res.full_root && link.partial_only {
            return Err(Error::PartialOnlyFullRoot {
                link: link.name.clone(),
            });
        }
        append_ignored_paths_notice(&mut res, link, req);
    }
    Ok(res)
}

fn resolve_batch(link: &Link, req: &ResolveRequest) -> Result<ScopeResolution> {
    if req.relative_path.is_some() {
        return Err(Error::LinkPathsWithScope);
    }
    if req.all {
        return Err(Error::LinkPathsWithAll);
    }
    if link.paths.is_empty() {
        return Err(Error::NoConfiguredPaths {
            link: link.name.clone(),
        });
    }

    let scopes = link.paths.iter().cloned().map(Scope::Scoped).collect();
    let mut res = ScopeResolution::batch(scopes, ScopeSource::LinkPaths);
    res.push_notice(Notice::info(
        "Using configured link paths; ignoring CWD scope inference",
    ));
    Ok(res)
}

/// --all without a scope makes the full-root intent explicit in the plan;
/// it does not by itself grant permission to apply.
fn resolve_forced_full_root(link: &Link) -> Result<ScopeResolution> {
    if link.partial_only {
        return Err(Error::PartialOnlyForbidden {
            link: link.name.clone(),
        });
    }
    let mut res = ScopeResolution::single(Scope::FullRoot, ScopeSource::Empty);
    res.push_notice(Notice::info(
        "Full-root operation explicitly requested via --all",
    ));
    Ok(res)
}

/// Infer the scope from the CWD's position under the link's local root.
/// A CWD outside the root skips inference without comment and the caller
/// falls through to the fallback.
fn infer_from_cwd(
    link: &Link,
    cwd: &str,
    req: &ResolveRequest,
) -> Result<Option<ScopeResolution>> {
    let Some(scope) = relative_to(&link.local.path, cwd) else {
        return Ok(None);
    };

    if scope.is_full_root() && link.partial_only {
        return Err(Error::PartialOnlyFullRoot {
            link: link.name.clone(),
        });
    }

    let mut res = ScopeResolution::single(scope, ScopeSource::Cwd);
    append_ignored_paths_notice(&mut res, link, req);
    Ok(Some(res))
}

fn resolve_fallback(link: &Link) -> Result<ScopeResolution> {
    if link.partial_only {
        return Err(Error::PartialOnlyFullRoot {
            link: link.name.clone(),
        });
    }
    Ok(ScopeResolution::single(Scope::FullRoot, ScopeSource::Empty))
}

/// When a user scope (CLI or inferred) shadows configured link paths, say
/// so and show how to use them instead.
fn append_ignored_paths_notice(res: &mut ScopeResolution, link: &Link, req: &ResolveRequest) {
    if link.paths.is_empty() || req.command.is_empty() {
        return;
    }

    let cmd_use = format!("dsync {} --link {} --use-link-paths", req.command, link.name);
    let cmd_all = format!("dsync {} --link {} --all", req.command, link.name);
    res.push_notice(
        Notice::info(format!(
            "Link \"{}\" has configured paths ({}) that were ignored for this run",
            link.name,
            link.paths.len()
        ))
        .with_hints(vec![
            "To sync the configured link paths instead:".to_string(),
            cmd_use,
            "To sync the full link root (mirror/delete across everything):".to_string(),
            cmd_all,
        ]),
    );
}
