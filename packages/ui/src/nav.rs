//! Active navigation link detection.

/// Reduce a path or link target to the form used for comparison:
/// no query, no anchor, no trailing slash, and `""`/`/index.html` as `/`.
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    let path = path.trim_end_matches('/');
    match path {
        "" | "/index.html" => "/".to_string(),
        p if p.starts_with('/') => p.to_string(),
        p => format!("/{p}"),
    }
}

/// Exact match after normalization. The root link only matches the root path.
pub fn is_active(current_path: &str, link_target: &str) -> bool {
    normalize_path(current_path) == normalize_path(link_target)
}

/// Indices of the links that should carry the active indicator.
pub fn active_indices<'a>(
    current_path: &str,
    targets: impl IntoIterator<Item = &'a str>,
) -> Vec<usize> {
    let current = normalize_path(current_path);
    targets
        .into_iter()
        .enumerate()
        .filter(|(_, target)| normalize_path(target) == current)
        .map(|(i, _)| i)
        .collect()
}
