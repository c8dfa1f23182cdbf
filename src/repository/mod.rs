//! In-memory stores: the catalog (books, members) and the borrowing ledger

pub mod books;
pub mod borrowings;
pub mod members;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{Borrowing, NewBorrowing},
};

/// Next id is the largest existing id plus one (1 for an empty store).
/// Gaps are never filled; a deleted maximum can be handed out again.
pub(crate) fn next_id<V>(records: &IndexMap<i32, V>) -> AppResult<i32> {
    records
        .keys()
        .max()
        .copied()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::Internal("id space exhausted".to_string()))
}

/// Owns every record collection
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub borrowings: borrowings::BorrowingsRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a borrowing after checking both references resolve
    pub fn borrowings_create(&mut self, new: NewBorrowing) -> AppResult<Borrowing> {
        if !self.books.contains(new.book_id) {
            return Err(AppError::Validation(format!(
                "Borrowing references unknown book {}",
                new.book_id
            )));
        }
        if !self.members.contains(new.member_id) {
            return Err(AppError::Validation(format!(
                "Borrowing references unknown member {}",
                new.member_id
            )));
        }
        self.borrowings.create(new)
    }
}
