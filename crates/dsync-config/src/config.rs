use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use dsync_types::{Endpoint, EndpointKind, Link, Scope, clean_abs};

use crate::discovery::find_config_file;
use crate::error::{Error, Result};

/// Settings applied to every operation regardless of link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Global {
    pub excludes: Vec<String>,
}

/// The fully validated configuration: cross-referenced endpoints and links.
/// Loaded fresh per command invocation; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The file this configuration was loaded from, when it came from disk.
    pub file_path: Option<PathBuf>,
    pub global: Global,
    pub endpoints: BTreeMap<String, Endpoint>,
    pub links: BTreeMap<String, Link>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    global: RawGlobal,
    #[serde(default)]
    endpoints: BTreeMap<String, RawEndpoint>,
    #[serde(default)]
    links: BTreeMap<String, RawLink>,
}

#[derive(Debug, Default, Deserialize)]
struct RawGlobal {
    #[serde(default)]
    excludes: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEndpoint {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    host: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawLink {
    #[serde(default)]
    local: String,
    #[serde(default)]
    remote: String,
    mirror: Option<bool>,
    partial_only: Option<bool>,
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
}

impl Config {
    /// Discover and load the configuration file.
    pub fn load() -> Result<Config> {
        let path = find_config_file()?;
        Self::load_from(&path)
    }

    /// Load and validate one explicit file.
    pub fn load_from(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)?;
        let mut cfg = Self::parse(&text)?;
        cfg.file_path = Some(path.to_path_buf());
        Ok(cfg)
    }

    /// Parse and validate configuration text. Validation collects every
    /// issue in the file and reports them together.
    pub fn parse(text: &str) -> Result<Config> {
        let raw: RawConfig = toml::from_str(text)?;
        normalize(&raw)
    }
}

fn normalize(raw: &RawConfig) -> Result<Config> {
    let mut issues = Vec::new();

    let mut endpoints = BTreeMap::new();
    for (name, raw_ep) in &raw.endpoints {
        let (ep, ep_issues) = normalize_endpoint(name, raw_ep);
        issues.extend(ep_issues);
        if let Some(ep) = ep {
            endpoints.insert(ep.name.clone(), ep);
        }
    }
    if endpoints.is_empty() {
        issues.push("no endpoints defined (missing [endpoints.<name>] sections)".to_string());
    }

    let mut links = BTreeMap::new();
    for (name, raw_link) in &raw.links {
        let (link, link_issues) = normalize_link(name, raw_link, &endpoints);
        issues.extend(link_issues);
        if let Some(link) = link {
            links.insert(link.name.clone(), link);
        }
    }

    if !issues.is_empty() {
        return Err(Error::Validation { issues });
    }

    Ok(Config {
        file_path: None,
        global: Global {
            excludes: raw.global.excludes.clone(),
        },
        endpoints,
        links,
    })
}

/// Validate one endpoint section. Returns the endpoint only when no issue
/// was found, so links never reference a half-valid endpoint.
fn normalize_endpoint(name: &str, raw: &RawEndpoint) -> (Option<Endpoint>, Vec<String>) {
    let mut issues = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        return (None, vec!["endpoint name cannot be empty".to_string()]);
    }

    let kind_raw = raw.kind.trim().to_lowercase();
    let path = raw.path.trim();
    let host = raw.host.trim();

    let kind = match kind_raw.as_str() {
        "local" => {
            if !host.is_empty() {
                issues.push(format!("endpoints.{name}.host is set but type is local"));
            }
            Some(EndpointKind::Local)
        }
        "ssh" => {
            if host.is_empty() {
                issues.push(format!("endpoints.{name}.host is required for ssh endpoints"));
            }
            Some(EndpointKind::Ssh)
        }
        _ => {
            issues.push(format!("endpoints.{name}.type must be 'local' or 'ssh'"));
            None
        }
    };

    if path.is_empty() {
        issues.push(format!("endpoints.{name}.path is required"));
        return (None, issues);
    }
    if !path.starts_with('/') {
        issues.push(format!("endpoints.{name}.path must be an absolute path"));
        return (None, issues);
    }

    let clean = clean_abs(path);
    if clean == "/" {
        issues.push(format!("endpoints.{name}.path must not be '/'"));
        return (None, issues);
    }

    match kind {
        Some(kind) if issues.is_empty() => {
            let host = (kind == EndpointKind::Ssh).then(|| host.to_string());
            let root_path = format!("{clean}/");
            (
                Some(Endpoint {
                    name: name.to_string(),
                    kind,
                    host,
                    path: clean,
                    root_path,
                }),
                issues,
            )
        }
        _ => (None, issues),
    }
}

fn normalize_link(
    name: &str,
    raw: &RawLink,
    endpoints: &BTreeMap<String, Endpoint>,
) -> (Option<Link>, Vec<String>) {
    let mut issues = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        return (None, vec!["link name cannot be empty".to_string()]);
    }

    let local_name = raw.local.trim();
    let remote_name = raw.remote.trim();
    if local_name.is_empty() {
        issues.push(format!("links.{name}.local is required"));
    }
    if remote_name.is_empty() {
        issues.push(format!("links.{name}.remote is required"));
    }

    let local_ep = endpoints.get(local_name);
    if !local_name.is_empty() && local_ep.is_none() {
        issues.push(format!(
            "links.{name}.local references unknown endpoint \"{local_name}\""
        ));
    }
    let remote_ep = endpoints.get(remote_name);
    if !remote_name.is_empty() && remote_ep.is_none() {
        issues.push(format!(
            "links.{name}.remote references unknown endpoint \"{remote_name}\""
        ));
    }

    if let Some(ep) = local_ep
        && ep.kind != EndpointKind::Local
    {
        issues.push(format!(
            "links.{name}.local endpoint \"{local_name}\" must be type local"
        ));
    }
    if let Some(ep) = remote_ep
        && ep.kind != EndpointKind::Ssh
    {
        issues.push(format!(
            "links.{name}.remote endpoint \"{remote_name}\" must be type ssh"
        ));
    }

    // Exactly one remote side per link.
    if let (Some(local), Some(remote)) = (local_ep, remote_ep) {
        if local.kind == remote.kind {
            issues.push(format!(
                "links.{name} must connect one local endpoint and one ssh endpoint"
            ));
        }
        if local_name == remote_name {
            issues.push(format!(
                "links.{name}.local and links.{name}.remote must be different endpoints"
            ));
        }
    }

    let mirror = raw.mirror.unwrap_or(true);
    let partial_only = raw.partial_only.unwrap_or(false);

    let (paths, path_issues) = normalize_link_paths(name, &raw.paths);
    issues.extend(path_issues);

    if !issues.is_empty() {
        return (None, issues);
    }
    let (Some(local), Some(remote)) = (local_ep, remote_ep) else {
        return (None, issues);
    };

    (
        Some(Link {
            name: name.to_string(),
            local_name: local_name.to_string(),
            remote_name: remote_name.to_string(),
            mirror,
            partial_only,
            paths,
            excludes: raw.excludes.clone(),
            local: local.clone(),
            remote: remote.clone(),
        }),
        issues,
    )
}

/// Configured link scopes go through the same normalization as CLI scopes,
/// at load time, with one extra rule: a path that cleans to the full root
/// is an issue here rather than a request.
fn normalize_link_paths(link_name: &str, raw_paths: &[String]) -> (Vec<String>, Vec<String>) {
    let mut out = Vec::with_capacity(raw_paths.len());
    let mut issues = Vec::new();

    for (i, raw) in raw_paths.iter().enumerate() {
        if raw.trim().is_empty() {
            issues.push(format!("links.{link_name}.paths[{i}] must not be empty"));
            continue;
        }
        match Scope::parse(raw) {
            Ok(Scope::Scoped(path)) => out.push(path),
            Ok(Scope::FullRoot) => issues.push(format!(
                "links.{link_name}.paths[{i}] resolves to empty scope ('.'); omit it to use full-root with --all"
            )),
            Err(dsync_types::Error::ScopeNotRelative) => issues.push(format!(
                "links.{link_name}.paths[{i}] must be a relative path"
            )),
            Err(dsync_types::Error::ScopeTraversal) => issues.push(format!(
                "links.{link_name}.paths[{i}] must not traverse outside the root"
            )),
        }
    }
    (out, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[global]
excludes = [".DS_Store"]

[endpoints.laptop]
type = "local"
path = "/tmp/photos"

[endpoints.server]
type = "ssh"
host = "photo-box"
path = "/srv/photos/"

[links.photos]
local = "laptop"
remote = "server"
# mirror omitted on purpose (defaults true)
"#;

    #[test]
    fn parse_normalizes_defaults_and_roots() {
        let cfg = Config::parse(VALID).unwrap();

        let laptop = &cfg.endpoints["laptop"];
        assert_eq!(laptop.root_path, "/tmp/photos/");
        assert_eq!(laptop.path, "/tmp/photos");

        let server = &cfg.endpoints["server"];
        assert_eq!(server.root_path, "/srv/photos/");
        assert_eq!(server.rsync_root(), "photo-box:/srv/photos/");

        let link = &cfg.links["photos"];
        assert!(link.mirror, "mirror defaults to true");
        assert!(!link.partial_only, "partial_only defaults to false");
        assert!(link.excludes.is_empty());
        assert_eq!(link.local.name, "laptop");
        assert_eq!(link.remote.name, "server");
    }

    #[test]
    fn parse_rejects_endpoint_root_slash() {
        let toml = r#"
[endpoints.bad]
type = "local"
path = "/"
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(err.to_string().contains("must not be '/'"), "got: {err}");
    }

    #[test]
    fn parse_rejects_missing_host_for_ssh() {
        let toml = r#"
[endpoints.server]
type = "ssh"
path = "/srv/photos"
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("host is required for ssh endpoints"),
            "got: {err}"
        );
    }

    #[test]
    fn parse_rejects_host_on_local_endpoint() {
        let toml = r#"
[endpoints.laptop]
type = "local"
host = "nope"
path = "/tmp/photos"
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("host is set but type is local"),
            "got: {err}"
        );
    }

    #[test]
    fn parse_rejects_link_with_wrong_endpoint_kinds() {
        let toml = r#"
[endpoints.a]
type = "ssh"
host = "x"
path = "/srv/a"

[endpoints.b]
type = "local"
path = "/tmp/b"

[links.l]
local = "a"
remote = "b"
"#;
        let err = Config::parse(toml).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("must be type local"), "got: {msg}");
        assert!(msg.contains("must be type ssh"), "got: {msg}");
    }

    #[test]
    fn parse_rejects_link_paths_that_traverse_up() {
        let toml = r#"
[endpoints.laptop]
type = "local"
path = "/tmp/photos"

[endpoints.server]
type = "ssh"
host = "photo-box"
path = "/srv/photos"

[links.photos]
local = "laptop"
remote = "server"
paths = ["../oops"]
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(err.to_string().contains("must not traverse"), "got: {err}");
    }

    #[test]
    fn parse_normalizes_link_paths() {
        let toml = r#"
[endpoints.laptop]
type = "local"
path = "/tmp/photos"

[endpoints.server]
type = "ssh"
host = "photo-box"
path = "/srv/photos"

[links.photos]
local = "laptop"
remote = "server"
paths = ["./2026/portraits/", "2026/events"]
"#;
        let cfg = Config::parse(toml).unwrap();
        assert_eq!(
            cfg.links["photos"].paths,
            vec!["2026/portraits".to_string(), "2026/events".to_string()]
        );
    }

    #[test]
    fn parse_collects_every_issue_in_one_report() {
        let toml = r#"
[endpoints.bad]
type = "floppy"
path = "relative/path"

[links.l]
local = "missing"
remote = "also-missing"
paths = ["..", ""]
"#;
        let err = Config::parse(toml).unwrap_err();
        let Error::Validation { issues } = &err else {
            panic!("expected validation error, got: {err}");
        };
        let joined = issues.join("\n");
        assert!(joined.contains("endpoints.bad.type must be 'local' or 'ssh'"));
        assert!(joined.contains("endpoints.bad.path must be an absolute path"));
        assert!(joined.contains("no endpoints defined"));
        assert!(joined.contains("links.l.local references unknown endpoint \"missing\""));
        assert!(joined.contains("links.l.paths[0] must not traverse outside the root"));
        assert!(joined.contains("links.l.paths[1] must not be empty"));
    }

    #[test]
    fn parse_rejects_empty_file() {
        let err = Config::parse("").unwrap_err();
        assert!(err.to_string().contains("no endpoints defined"), "got: {err}");
    }

    #[test]
    fn load_from_records_the_file_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, VALID).unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.file_path.as_deref(), Some(path.as_path()));
        assert_eq!(cfg.endpoints.len(), 2);
        assert_eq!(cfg.links.len(), 1);
    }
}
