/// Starter configuration written by `dsync init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# dsync config (starter template)

[global]
excludes = [
  ".DS_Store",
  ".git/",
  "node_modules/",
  ".dsync-partial/",
]

# Endpoints are named directory roots.
# Note: dsync uses rsync "contents semantics" (trailing /): roots represent directory contents.

[endpoints.example_local]
type = "local"
path = "/Users/you/photos"

[endpoints.example_remote]
type = "ssh"
host = "photo-box" # ssh-config Host alias
path = "/srv/photos"

# Links are 1:1 mappings between one local and one remote endpoint.
[links.photos]
local = "example_local"
remote = "example_remote"
mirror = true
partial_only = false
paths = []
excludes = ["*.tmp"]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn template_parses_and_validates() {
        let cfg = Config::parse(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg.endpoints.len(), 2);
        assert_eq!(cfg.links.len(), 1);
        assert!(cfg.links["photos"].mirror);
    }
}
