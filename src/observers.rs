use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use crate::book::Book;

/// Trait for observing changes made through a book club
///
/// Every hook defaults to doing nothing, so observers implement only the
/// notifications they care about.
pub trait ClubObserver: Send + Sync {
    /// Called after a book has been appended to the club
    fn on_book_added(&self, _book: &Book) {}

    /// Called after a book has been taken out of the club
    fn on_book_removed(&self, _book: &Book) {}

    /// Called after a session has been scheduled for a book
    fn on_session_scheduled(&self, _book: &Book) {}
}

/// Announces scheduled sessions, one line each, on the given writer
#[derive(Debug)]
pub struct SessionAnnouncer<W> {
    /// Where announcements are written
    out: Mutex<W>,
}

impl<W: Write> SessionAnnouncer<W> {
    /// Create an announcer writing to `out`
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Give back the writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ClubObserver for SessionAnnouncer<W> {
    fn on_session_scheduled(&self, book: &Book) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "Session scheduled for: {}", book.title()) {
            tracing::warn!(%err, title = book.title(), "failed to announce session");
        }
    }
}
