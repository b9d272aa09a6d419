//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Checks whether an identifier follows the component naming convention
/// (first character is an ASCII uppercase letter).
///
/// # Examples
///
/// ```
/// use cua::utils::is_component_name;
///
/// assert!(is_component_name("Button"));
/// assert!(is_component_name("API"));
/// assert!(!is_component_name("button"));
/// assert!(!is_component_name("_Button"));
/// assert!(!is_component_name(""));
/// ```
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Stricter check used for JSX tag segments: `^[A-Z][a-zA-Z0-9]*$`.
pub fn is_component_tag(name: &str) -> bool {
    is_component_name(name) && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Render a path with forward slashes regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexically normalize a path, folding `.` and `..` components.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`, using forward slashes.
///
/// Paths under `base` have the prefix stripped. Paths outside `base` get
/// leading `..` segments; those are the only results that start with `..`.
pub fn relative_path(path: &Path, base: &Path) -> String {
    let path = normalize_path(path);
    let base = normalize_path(base);

    if let Ok(stripped) = path.strip_prefix(&base) {
        return to_slash(stripped);
    }

    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (e.g. another drive): nothing sensible to relativize.
    if common == 0 {
        return to_slash(&path);
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }
    to_slash(&rel)
}

/// Strip the final extension from a slash-separated path (`app/Home.tsx` -> `app/Home`).
pub fn strip_extension(path: &str) -> &str {
    let file_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..file_start + dot],
        _ => path,
    }
}
