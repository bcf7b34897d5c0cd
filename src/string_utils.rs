//! String utility functions for titles and relative paths.

/// Upper-case the first character of a string, leaving the rest unchanged.
///
/// # Example
///
/// ```
/// use doctoc::string_utils::capitalize;
///
/// assert_eq!(capitalize("guides"), "Guides");
/// assert_eq!(capitalize("api-v2"), "Api-v2");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join a child name onto a relative directory path using `/`.
///
/// The root directory is written `.` and is dropped when joining, so
/// children of the root are addressed by their bare name.
pub fn join_rel(parent: &str, name: &str) -> String {
    if parent == "." || parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Last `/`-separated segment of a relative path (`.` for the root).
pub fn base_name(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}

/// Part of a filename before its first `.`.
///
/// `guide.v2.md` yields `guide`; a dotfile such as `.md` yields an empty string.
pub fn stem_before_first_dot(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
