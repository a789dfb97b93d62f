use std::{fmt, sync::Arc};

use crate::{
    book::Book,
    error::{ClubError, MISSING_BOOK, MISSING_SCHEDULE_ARGUMENT},
    observers::ClubObserver,
    session::Session,
};

/// An ordered collection of books with session scheduling
///
/// Books are kept in insertion order and may appear more than once. The club
/// shares each book with its callers; removal matches by reference, lookups
/// match by title ignoring case.
#[derive(Default)]
pub struct BookClub {
    /// Books in insertion order, duplicates allowed
    books: Vec<Arc<Book>>,
    /// Registered change observers
    observers: Vec<Box<dyn ClubObserver>>,
}

// Observers are trait objects without Debug
impl fmt::Debug for BookClub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookClub")
            .field("books", &self.books)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl BookClub {
    /// Create an empty club with no observers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer to be notified of club changes
    pub fn register_observer(&mut self, observer: Box<dyn ClubObserver>) {
        self.observers.push(observer);
    }

    /// Append a book to the end of the club
    ///
    /// # Errors
    ///
    /// Returns `ClubError::InvalidArgument` if `book` is absent. The club is
    /// left unchanged in that case.
    pub fn add_book(&mut self, book: Option<Arc<Book>>) -> Result<(), ClubError> {
        let book = book.ok_or(ClubError::InvalidArgument { reason: MISSING_BOOK })?;

        tracing::debug!(title = book.title(), "adding book");
        self.books.push(Arc::clone(&book));
        self.notify(|observer| observer.on_book_added(&book));
        Ok(())
    }

    /// Remove the first entry that is the same reference as `book`
    ///
    /// Removing a book that is not in the club does nothing.
    pub fn remove_book(&mut self, book: &Arc<Book>) {
        let Some(pos) = self.books.iter().position(|b| Arc::ptr_eq(b, book)) else {
            return;
        };

        let removed = self.books.remove(pos);
        tracing::debug!(title = removed.title(), "removed book");
        self.notify(|observer| observer.on_book_removed(&removed));
    }

    /// Schedule `session` to discuss `book`
    ///
    /// The book does not have to be a member of the club.
    ///
    /// # Errors
    ///
    /// Returns `ClubError::InvalidArgument` if either the book or the session
    /// is absent. Neither the club nor the session changes in that case.
    pub fn schedule_session(
        &self,
        book: Option<Arc<Book>>,
        session: Option<&mut Session>,
    ) -> Result<(), ClubError> {
        let (Some(book), Some(session)) = (book, session) else {
            return Err(ClubError::InvalidArgument { reason: MISSING_SCHEDULE_ARGUMENT });
        };

        session.set_book(Arc::clone(&book));
        tracing::info!(title = book.title(), "session scheduled");
        self.notify(|observer| observer.on_session_scheduled(&book));
        Ok(())
    }

    /// Find the first book whose title matches `title`, ignoring case
    #[must_use]
    pub fn find_book_by_title(&self, title: &str) -> Option<Arc<Book>> {
        self.books.iter().find(|b| b.matches_title(title)).cloned()
    }

    /// Get a copy of all books in the club, in order
    ///
    /// The returned vector is independent of the club.
    #[must_use]
    pub fn list_all_books(&self) -> Vec<Arc<Book>> {
        self.books.clone()
    }

    /// Check whether a book with `title` is in the club, ignoring case
    #[must_use]
    pub fn is_book_in_club(&self, title: &str) -> bool {
        self.books.iter().any(|b| b.matches_title(title))
    }

    /// Number of entries in the club, counting duplicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check whether the club has no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Run `hook` against every registered observer
    fn notify(&self, hook: impl Fn(&dyn ClubObserver)) {
        for observer in &self.observers {
            hook(observer.as_ref());
        }
    }
}

// One title per line, in club order
impl fmt::Display for BookClub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for book in &self.books {
            writeln!(f, "{book}")?;
        }
        Ok(())
    }
}
