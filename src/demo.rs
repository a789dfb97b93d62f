//! The fixed demo sequence run by the `book-club` binary.
//!
//! Each step is its own small function, read top to bottom: add the two
//! demo books, list them, ask about one title, schedule a session, remove a
//! book and list again.

use std::{io::Write, sync::Arc};

use crate::{book::Book, club::BookClub, error::DemoError, session::Session};

/// Title the demo asks the club about
pub const SEARCH_TITLE: &str = "Clean Code";

/// What a demo run left behind, for inspection after the report
#[derive(Debug)]
pub struct DemoOutcome {
    /// The session scheduled during the run
    pub session: Session,
    /// Answer to the membership check for [`SEARCH_TITLE`]
    pub search_title_found: bool,
    /// Books left in the club after the removal
    pub remaining: Vec<Arc<Book>>,
}

/// Run the demo against `club`, writing the report to `out`
///
/// Session confirmations are not part of the report; they reach whatever
/// observers are registered on `club`.
///
/// # Errors
///
/// Returns `DemoError::Club` if a club command rejects its arguments and
/// `DemoError::Io` if the report cannot be written.
pub fn run_demo(club: &mut BookClub, out: &mut impl Write) -> Result<DemoOutcome, DemoError> {
    let clean_code = Arc::new(Book::new("Clean Code"));
    let clean_architecture = Arc::new(Book::new("Clean Architecture"));

    add_demo_books(club, &[&clean_code, &clean_architecture])?;
    report_books(out, "Books in the club:", &club.list_all_books())?;

    let search_title_found = report_membership(club, out)?;
    let session = schedule_first_session(club, &clean_code)?;

    club.remove_book(&clean_code);
    let remaining = club.list_all_books();
    let heading = format!("After removing '{}':", clean_code.title());
    report_books(out, &heading, &remaining)?;

    Ok(DemoOutcome { session, search_title_found, remaining })
}

/// Add every book in `books` to the club, in order
fn add_demo_books(club: &mut BookClub, books: &[&Arc<Book>]) -> Result<(), DemoError> {
    for book in books {
        club.add_book(Some(Arc::clone(book)))?;
    }
    Ok(())
}

/// Write a heading followed by one title per line
fn report_books(
    out: &mut impl Write,
    heading: &str,
    books: &[Arc<Book>],
) -> Result<(), DemoError> {
    writeln!(out, "{heading}")?;
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// Ask whether [`SEARCH_TITLE`] is in the club and report the answer
fn report_membership(club: &BookClub, out: &mut impl Write) -> Result<bool, DemoError> {
    let found = club.is_book_in_club(SEARCH_TITLE);
    writeln!(out, "Is '{SEARCH_TITLE}' in the club? {found}")?;
    Ok(found)
}

/// Create a session and schedule it for `book`
fn schedule_first_session(club: &BookClub, book: &Arc<Book>) -> Result<Session, DemoError> {
    let mut session = Session::new();
    club.schedule_session(Some(Arc::clone(book)), Some(&mut session))?;
    Ok(session)
}
