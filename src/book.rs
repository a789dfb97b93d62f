use std::fmt;

/// A book known to the club, identified for lookups by its title
///
/// Books have no equality of their own: the club looks them up by title,
/// ignoring case, and removes them by reference.
#[derive(Debug, Clone)]
pub struct Book {
    /// Title as given at construction, never changed afterwards
    title: String,
}

impl Book {
    /// Create a book with the given title
    ///
    /// Empty and whitespace-only titles are accepted as-is.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Get the title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check whether this book's title equals `title`, ignoring case
    ///
    /// Characters are folded one at a time, so a letter's case never depends
    /// on its neighbours (a trailing capital sigma matches `σ`).
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        let folded = title.chars().flat_map(char::to_lowercase);
        self.title.chars().flat_map(char::to_lowercase).eq(folded)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
