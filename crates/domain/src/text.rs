//! Text normalisation helpers.

/// Literal used wherever a name cannot be derived.
pub const UNKNOWN: &str = "unknown";

/// Normalise `text` into an identifier-friendly slug.
///
/// Unicode is folded to ASCII, letters are lowercased and every run of
/// other characters collapses into a single `_`. A text that folds to
/// nothing yields [`UNKNOWN`].
#[must_use]
pub fn slugify(text: &str) -> String {
    let slug = ::slug::slugify(text).replace('-', "_");
    if slug.is_empty() {
        UNKNOWN.to_string()
    } else {
        slug
    }
}
