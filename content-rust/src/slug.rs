use crate::PublishMeta;

/// Derives a URL-safe slug from an article title: ASCII alphanumerics
/// lowercased, everything else collapsed into single hyphens.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// The slug an article will carry once published: derived from the
/// title when `derive_slug_from_title` is set, otherwise the stored
/// slug as-is.
#[must_use]
pub fn publication_slug(title: &str, meta: &PublishMeta) -> String {
    if meta.derive_slug_from_title {
        slugify(title)
    } else {
        meta.slug.clone()
    }
}
