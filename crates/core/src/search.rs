//! Title search pattern building.

/// Build an `ILIKE` pattern matching `query` anywhere in a title.
///
/// Returns `None` for an empty query, meaning "no filter". LIKE
/// metacharacters in the user's text are escaped so they match literally
/// (Postgres uses `\` as the default escape character).
pub fn contains_pattern(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
