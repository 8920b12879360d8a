//! Display names for directory slugs.
//!
//! Every product, tab, and named group in the navigation is labelled from the
//! slug of its directory. The label comes from one of two places:
//!
//! 1. The per-language override table in [`Labels`], used verbatim.
//! 2. A generic title-case transform of the slug:
//!    - `getting-started` → "Getting Started"
//!    - `api__reference` → "Api Reference"
//!    - `faq` → "Faq"
//!
//! Overrides are looked up for the requested language only. An unknown
//! language never borrows another language's overrides; it gets the
//! title-case fallback for every slug.

use crate::labels::Labels;

/// Resolve the display label for `slug` in `language`.
///
/// An empty slug is returned unchanged.
pub fn display_name(slug: &str, language: &str, labels: &Labels) -> String {
    if slug.is_empty() {
        return String::new();
    }
    match labels.display_name_override(language, slug) {
        Some(name) => name.to_string(),
        None => title_case(slug),
    }
}

/// Split on runs of `-`/`_`, uppercase the first character of each token,
/// and join with single spaces. Empty tokens are dropped.
pub fn title_case(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
