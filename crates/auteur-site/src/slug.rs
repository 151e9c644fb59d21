//! Page slugs.

/// Convert a title to a kebab-case slug.
///
/// Words are split on any non-alphanumeric character and on case changes
/// (`fooBar`, `HTTPServer`), lowercased and joined with `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut result = String::with_capacity(chars.len());
    let mut pending_dash = false;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            pending_dash = !result.is_empty();
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() {
                pending_dash = true;
            }
        }

        if pending_dash {
            result.push('-');
            pending_dash = false;
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Whether two slugs name the same page.
pub(crate) fn same_slug(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
