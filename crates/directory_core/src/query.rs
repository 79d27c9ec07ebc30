//! Client-side view transforms: name search, field sort and the derivation
//! that composes them over the accumulated records.
use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::User;

/// Case-insensitive substring filter on `User::name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.needle.is_empty() || user.name.to_lowercase().contains(&self.needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Arrival order.
    #[default]
    None,
    Name,
    Email,
}

impl SortKey {
    fn field<'a>(&self, user: &'a User) -> Option<&'a str> {
        match self {
            SortKey::None => None,
            SortKey::Name => Some(&user.name),
            SortKey::Email => Some(&user.email),
        }
    }
}

/// Sort key approximating a root-locale collation.
///
/// Levels compare in order: base letters (accents stripped, lowercased),
/// accented lowercase form, then the raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let secondary = text.to_lowercase();
        let primary = secondary
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        Self {
            primary,
            secondary,
            tertiary: text.to_owned(),
        }
    }
}

/// Locale-aware ascending comparison used by the field sorts.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Indices into `records` that make up the displayed sequence.
///
/// Filtering always runs before sorting, and the sort is stable so equal keys
/// keep arrival order.
pub fn derive_indices(records: &[User], query: &SearchQuery, sort: SortKey) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, user)| query.matches(user))
        .map(|(idx, _)| idx)
        .collect();

    if sort != SortKey::None {
        indices.sort_by_cached_key(|&idx| sort.field(&records[idx]).map(CollationKey::new));
    }
    indices
}
