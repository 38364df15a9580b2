// File/image URL resolution

/// Resolve a backend file path against `origin`.
///
/// Absolute inputs (anything starting with `http`) are returned unchanged;
/// relative ones are joined to the origin with exactly one `/`.
pub fn ensure_absolute_url(path: Option<&str>, origin: &str) -> Option<String> {
    let path = path?;
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}
