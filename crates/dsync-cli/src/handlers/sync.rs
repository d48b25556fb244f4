use anyhow::{Context, Result, bail};
use dsync_config::Config;
use dsync_engine::{
    ResolveRequest, SyncSpec, append_scope, build_preview_apply, resolve_for_endpoint,
    resolve_for_link,
};
use dsync_types::{Endpoint, EndpointKind, Link, ScopeResolution, clean_abs, ensure_trailing_slash};

use crate::args::SyncArgs;
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Push,
}

impl Direction {
    pub fn command(self) -> &'static str {
        match self {
            Direction::Pull => "pull",
            Direction::Push => "push",
        }
    }
}

pub fn handle(direction: Direction, args: &SyncArgs) -> Result<i32> {
    let cmd = direction.command();

    let cwd = std::env::current_dir().context("unable to resolve cwd")?;
    let cwd = cwd.to_string_lossy().into_owned();

    let cfg = Config::load()?;

    let req = ResolveRequest {
        command: cmd,
        relative_path: args.relative_path.as_deref(),
        use_link_paths: args.use_link_paths,
        all: args.all,
        cwd: Some(&cwd),
    };

    if args.link {
        let Some(link) = cfg.links.get(&args.name) else {
            bail!("unknown link \"{}\"", args.name);
        };

        let res = resolve_for_link(link, &req)?;
        views::print_scope_plan(cmd, "link", &args.name, &res);
        print_link_plans(&cfg, link, direction, &res)?;
        finish(
            cmd,
            args,
            &res,
            "hint: re-run with --all, or provide a scope (relative_path or CWD inference)",
        )
    } else {
        let Some(ep) = cfg.endpoints.get(&args.name) else {
            bail!("unknown endpoint \"{}\"", args.name);
        };

        let res = resolve_for_endpoint(&req)?;
        views::print_scope_plan(cmd, "endpoint", &args.name, &res);
        print_endpoint_plans(&cfg, ep, direction, &res, &cwd)?;
        finish(
            cmd,
            args,
            &res,
            "hint: re-run with --all, or provide a scope (relative_path)",
        )
    }
}

/// The plan is always printed; what happens next depends on the flags.
/// Applying a full-root operation needs the explicit --all opt-in, and
/// execution itself is still unimplemented.
fn finish(cmd: &str, args: &SyncArgs, res: &ScopeResolution, full_root_hint: &str) -> Result<i32> {
    if !args.dry_run && res.full_root && !args.all {
        eprintln!("{cmd}: full-root operation requires --all");
        eprintln!("{full_root_hint}");
        return Ok(2);
    }

    if args.dry_run {
        println!("{cmd}: dry-run only (rsync execution not implemented yet)");
        return Ok(0);
    }
    eprintln!("{cmd}: rsync execution not implemented yet (use --dry-run for planning)");
    Ok(2)
}

fn print_link_plans(
    cfg: &Config,
    link: &Link,
    direction: Direction,
    res: &ScopeResolution,
) -> Result<()> {
    let (src_ep, dst_ep) = match direction {
        Direction::Pull => (&link.remote, &link.local),
        Direction::Push => (&link.local, &link.remote),
    };

    let mut excludes = cfg.global.excludes.clone();
    excludes.extend(link.excludes.iter().cloned());

    let use_ssh = src_ep.kind == EndpointKind::Ssh || dst_ep.kind == EndpointKind::Ssh;

    for scope in &res.scopes {
        let src = append_scope(&src_ep.rsync_root(), scope);
        let dst = append_scope(&dst_ep.rsync_root(), scope);

        let (preview, apply) = build_preview_apply(&SyncSpec {
            source: src.clone(),
            dest: dst.clone(),
            use_ssh,
            mirror: link.mirror,
            excludes: excludes.clone(),
            dry_run: false,
        })?;
        views::print_rsync_plan(scope, &src, &dst, &preview, &apply);
    }
    Ok(())
}

/// Bare-endpoint operations pair the endpoint root with the caller's CWD
/// and always mirror.
fn print_endpoint_plans(
    cfg: &Config,
    ep: &Endpoint,
    direction: Direction,
    res: &ScopeResolution,
    cwd: &str,
) -> Result<()> {
    let cwd_root = ensure_trailing_slash(&clean_abs(cwd));

    for scope in &res.scopes {
        let (src_root, dst_root) = match direction {
            Direction::Pull => (ep.rsync_root(), cwd_root.clone()),
            Direction::Push => (cwd_root.clone(), ep.rsync_root()),
        };

        let src = append_scope(&src_root, scope);
        let dst = append_scope(&dst_root, scope);

        let (preview, apply) = build_preview_apply(&SyncSpec {
            source: src.clone(),
            dest: dst.clone(),
            use_ssh: ep.kind == EndpointKind::Ssh,
            mirror: true,
            excludes: cfg.global.excludes.clone(),
            dry_run: false,
        })?;
        views::print_rsync_plan(scope, &src, &dst, &preview, &apply);
    }
    Ok(())
}
