//! Thread-safe handle over a [`BookClub`].
//!
//! The club itself is single-threaded. Hosts that need to reach one club
//! from several threads wrap it here: commands take the write lock, so
//! there is one writer at a time, and queries take the read lock, so a
//! reader always sees a complete snapshot.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{book::Book, club::BookClub, error::ClubError, session::Session};

/// Cloneable, thread-safe handle to one book club
#[derive(Debug, Clone, Default)]
pub struct SharedBookClub {
    /// The club behind a single reader-writer lock
    inner: Arc<RwLock<BookClub>>,
}

impl SharedBookClub {
    /// Create a handle to a new empty club
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing club, keeping its books and observers
    #[must_use]
    pub fn from_club(club: BookClub) -> Self {
        Self { inner: Arc::new(RwLock::new(club)) }
    }

    /// Append a book to the club
    ///
    /// # Errors
    ///
    /// Returns `ClubError::InvalidArgument` if `book` is absent.
    pub fn add_book(&self, book: Option<Arc<Book>>) -> Result<(), ClubError> {
        self.write().add_book(book)
    }

    /// Remove the first entry that is the same reference as `book`
    pub fn remove_book(&self, book: &Arc<Book>) {
        self.write().remove_book(book);
    }

    /// Schedule `session` to discuss `book`
    ///
    /// # Errors
    ///
    /// Returns `ClubError::InvalidArgument` if either argument is absent.
    pub fn schedule_session(
        &self,
        book: Option<Arc<Book>>,
        session: Option<&mut Session>,
    ) -> Result<(), ClubError> {
        self.read().schedule_session(book, session)
    }

    /// Find the first book whose title matches `title`, ignoring case
    #[must_use]
    pub fn find_book_by_title(&self, title: &str) -> Option<Arc<Book>> {
        self.read().find_book_by_title(title)
    }

    /// Get a snapshot of all books in the club, in order
    #[must_use]
    pub fn list_all_books(&self) -> Vec<Arc<Book>> {
        self.read().list_all_books()
    }

    /// Check whether a book with `title` is in the club, ignoring case
    #[must_use]
    pub fn is_book_in_club(&self, title: &str) -> bool {
        self.read().is_book_in_club(title)
    }

    /// Number of entries in the club
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check whether the club has no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Take the read lock
    ///
    /// A panic while holding the lock cannot leave the book list half
    /// updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, BookClub> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the write lock, recovering from poisoning like [`Self::read`]
    fn write(&self) -> RwLockWriteGuard<'_, BookClub> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
