//! Filename-to-metadata derivation: slug ids and humanized titles.

/// Lowercases the stem and reduces everything that is not alphanumeric to a
/// single hyphen. Yields `"item"` when nothing usable remains, so the record
/// always has an id.
pub fn slugify(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    let mut pending_sep = false;
    for c in stem.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }
    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}

/// Turns a filename stem into a display title: underscores and hyphen runs
/// become single spaces, and each word gets an uppercase first letter.
pub fn humanize_title(stem: &str) -> String {
    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    spaced
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
