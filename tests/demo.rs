//! End-to-end run of the demo sequence against an in-memory report.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use book_club::{
    Book, BookClub,
    demo::{SEARCH_TITLE, run_demo},
    observers::{ClubObserver, SessionAnnouncer},
};

/// Writer whose clones all append to one buffer
#[derive(Debug, Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, as text
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Observer that keeps the titles of scheduled sessions
#[derive(Debug)]
struct ScheduledTitles(Arc<Mutex<Vec<String>>>);

impl ClubObserver for ScheduledTitles {
    fn on_session_scheduled(&self, book: &Book) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(book.title().to_string());
    }
}

#[test]
#[allow(clippy::expect_used)]
fn demo_report_matches_expected_lines() {
    let mut club = BookClub::new();
    let mut report = Vec::new();

    let outcome = run_demo(&mut club, &mut report).expect("demo should run");

    let report = String::from_utf8(report).expect("report should be UTF-8");
    assert_eq!(
        report,
        "Books in the club:\n\
         Clean Code\n\
         Clean Architecture\n\
         Is 'Clean Code' in the club? true\n\
         After removing 'Clean Code':\n\
         Clean Architecture\n"
    );
    assert!(outcome.search_title_found);
}

#[test]
#[allow(clippy::expect_used)]
fn demo_transcript_announces_session_between_query_and_removal() {
    let transcript = SharedBuffer::default();
    let mut club = BookClub::new();
    club.register_observer(Box::new(SessionAnnouncer::new(transcript.clone())));

    run_demo(&mut club, &mut transcript.clone()).expect("demo should run");

    assert_eq!(
        transcript.contents(),
        "Books in the club:\n\
         Clean Code\n\
         Clean Architecture\n\
         Is 'Clean Code' in the club? true\n\
         Session scheduled for: Clean Code\n\
         After removing 'Clean Code':\n\
         Clean Architecture\n"
    );
}

#[test]
#[allow(clippy::expect_used)]
fn demo_schedules_the_removed_book() {
    let scheduled = Arc::new(Mutex::new(Vec::new()));
    let mut club = BookClub::new();
    club.register_observer(Box::new(ScheduledTitles(Arc::clone(&scheduled))));

    let outcome = run_demo(&mut club, &mut io::sink()).expect("demo should run");

    // The session keeps its book after the club drops it
    let session_book = outcome.session.book().expect("session should be scheduled");
    assert_eq!(session_book.title(), SEARCH_TITLE);
    assert!(!club.is_book_in_club(SEARCH_TITLE));

    let scheduled = scheduled.lock().unwrap_or_else(PoisonError::into_inner).clone();
    assert_eq!(scheduled, ["Clean Code"]);
}

#[test]
#[allow(clippy::expect_used)]
fn demo_leaves_only_clean_architecture() {
    let mut club = BookClub::new();

    let outcome = run_demo(&mut club, &mut io::sink()).expect("demo should run");

    let titles: Vec<&str> = outcome.remaining.iter().map(|b| b.title()).collect();
    assert_eq!(titles, ["Clean Architecture"]);
    assert_eq!(club.list_all_books().len(), 1);
}
