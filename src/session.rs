use std::sync::Arc;

use crate::book::Book;

/// A scheduled club meeting, discussing at most one book
///
/// A session starts empty. Scheduling it again replaces the book.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The book this session is about, if one has been scheduled
    book: Option<Arc<Book>>,
}

impl Session {
    /// Create a session with no book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `book` with this session, replacing any previous one
    ///
    /// Taking `Arc<Book>` rather than an optional keeps an absent book from
    /// ever reaching the session; absence is rejected by the club instead.
    pub fn set_book(&mut self, book: Arc<Book>) {
        self.book = Some(book);
    }

    /// Get the book this session is scheduled for
    #[must_use]
    pub fn book(&self) -> Option<&Arc<Book>> {
        self.book.as_ref()
    }

    /// Check whether a book has been scheduled
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.book.is_some()
    }
}
