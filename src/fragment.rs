//! Permalinks travel in the URL fragment as `#pj:<data>`.

pub const PERMALINK_FRAGMENT_PREFIX: &str = "#pj:";

/// Replaces any fragment on `base` with the permalink fragment for `data`.
pub fn permalink_url(base: &str, data: &str) -> String {
    let base = base.split('#').next().unwrap_or_default();
    format!("{}{}{}", base, PERMALINK_FRAGMENT_PREFIX, data)
}

/// Extracts permalink data from a full URL or a bare `#...` fragment.
/// Returns `None` when there is no `#pj:` fragment.
pub fn permalink_from_fragment(location: &str) -> Option<&str> {
    let hash = location.find('#').map(|i| &location[i..])?;
    hash.strip_prefix(PERMALINK_FRAGMENT_PREFIX)
}
