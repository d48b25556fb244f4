use crate::scope::Scope;

/// Lexically clean an absolute path: collapse repeated separators, drop `.`
/// segments, and fold `..` into its parent. The input is treated as rooted,
/// so leading `..` segments cannot escape `/`. No filesystem access.
pub fn clean_abs(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for comp in path.split('/') {
        match comp {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            comp => parts.push(comp),
        }
    }
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Append a trailing `/` unless the string already ends in one or is empty.
pub fn ensure_trailing_slash(s: &str) -> String {
    if s.is_empty() || s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}

/// Compute the scope of `path` relative to `root`, comparing the lexically
/// cleaned forms of both. Returns `None` when `path` lies outside `root`.
pub fn relative_to(root: &str, path: &str) -> Option<Scope> {
    if root.is_empty() || path.is_empty() {
        return None;
    }

    let root = clean_abs(root);
    let path = clean_abs(path);
    if path == root {
        return Some(Scope::FullRoot);
    }

    let prefix = ensure_trailing_slash(&root);
    path.strip_prefix(&prefix)
        .map(|rest| Scope::Scoped(rest.to_string()))
}
