//! Book club registry used to walk through function design from
//! "Clean Code" chapter 3.
//!
//! This crate provides a small in-memory registry of books, sessions that
//! reference a book, and a fixed demo sequence that exercises both.

pub mod book;
pub mod club;
pub mod demo;
pub mod error;
pub mod observers;
pub mod session;
pub mod shared;

pub use book::Book;
pub use club::BookClub;
pub use error::ClubError;
pub use session::Session;
pub use shared::SharedBookClub;
