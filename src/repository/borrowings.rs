//! Borrowing ledger.
//!
//! A plain store: it records borrowings and closes them, but does not decide
//! whether a borrow or a return is allowed. Records are never deleted.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, ConflictKind, RecordKind},
    models::{
        borrowing::{Borrowing, NewBorrowing},
        enums::BorrowingStatus,
    },
};

use super::next_id;

#[derive(Debug, Clone, Default)]
pub struct BorrowingsRepository {
    borrowings: IndexMap<i32, Borrowing>,
}

impl BorrowingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an active borrowing. References are checked by the caller.
    pub(super) fn create(&mut self, new: NewBorrowing) -> AppResult<Borrowing> {
        let id = next_id(&self.borrowings)?;
        let created = Borrowing {
            id,
            book_id: new.book_id,
            member_id: new.member_id,
            borrow_date: new.borrow_date,
            due_date: new.due_date,
            return_date: None,
            status: BorrowingStatus::Borrowed,
        };
        self.borrowings.insert(id, created.clone());
        Ok(created)
    }

    /// Get borrowing by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Borrowing> {
        self.borrowings
            .get(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Borrowing, id))
    }

    /// Close an active borrowing
    pub fn mark_returned(&mut self, id: i32, return_date: NaiveDate) -> AppResult<Borrowing> {
        let borrowing = self
            .borrowings
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Borrowing, id))?;

        if !borrowing.is_active() {
            return Err(AppError::conflict(
                ConflictKind::AlreadyReturned,
                format!("Borrowing {} has already been returned", id),
            ));
        }

        borrowing.return_date = Some(return_date);
        borrowing.status = BorrowingStatus::Returned;
        Ok(borrowing.clone())
    }

    /// Borrowings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Borrowing> {
        self.borrowings.values()
    }

    pub fn list(&self) -> Vec<Borrowing> {
        self.borrowings.values().cloned().collect()
    }

    pub fn active(&self) -> impl Iterator<Item = &Borrowing> {
        self.borrowings.values().filter(|b| b.is_active())
    }

    pub fn for_book(&self, book_id: i32) -> impl Iterator<Item = &Borrowing> {
        self.borrowings.values().filter(move |b| b.book_id == book_id)
    }

    pub fn for_member(&self, member_id: i32) -> impl Iterator<Item = &Borrowing> {
        self.borrowings.values().filter(move |b| b.member_id == member_id)
    }

    pub fn has_active_for_book(&self, book_id: i32) -> bool {
        self.active().any(|b| b.book_id == book_id)
    }

    pub fn has_active_for_member(&self, member_id: i32) -> bool {
        self.active().any(|b| b.member_id == member_id)
    }

    pub fn len(&self) -> usize {
        self.borrowings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borrowings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_borrowing(book_id: i32, member_id: i32) -> NewBorrowing {
        NewBorrowing {
            book_id,
            member_id,
            borrow_date: date("2024-01-01"),
            due_date: date("2024-01-15"),
        }
    }

    #[test]
    fn test_mark_returned_is_terminal() {
        let mut ledger = BorrowingsRepository::new();
        let b = ledger.create(new_borrowing(1, 1)).unwrap();
        assert!(ledger.has_active_for_book(1));
        assert!(ledger.has_active_for_member(1));

        let returned = ledger.mark_returned(b.id, date("2024-01-20")).unwrap();
        assert_eq!(returned.status, BorrowingStatus::Returned);
        assert_eq!(returned.return_date, Some(date("2024-01-20")));
        assert!(!ledger.has_active_for_book(1));

        let again = ledger.mark_returned(b.id, date("2024-01-21"));
        assert!(matches!(
            again,
            Err(AppError::Conflict { kind: ConflictKind::AlreadyReturned, .. })
        ));
        assert_eq!(ledger.get_by_id(b.id).unwrap().return_date, Some(date("2024-01-20")));
    }

    #[test]
    fn test_filters_by_reference() {
        let mut ledger = BorrowingsRepository::new();
        ledger.create(new_borrowing(1, 1)).unwrap();
        ledger.create(new_borrowing(2, 1)).unwrap();
        ledger.create(new_borrowing(3, 2)).unwrap();
        assert_eq!(ledger.for_member(1).count(), 2);
        assert_eq!(ledger.for_book(3).count(), 1);
        assert_eq!(ledger.active().count(), 3);
    }

    #[test]
    fn test_unknown_borrowing() {
        let mut ledger = BorrowingsRepository::new();
        assert!(matches!(
            ledger.mark_returned(9, date("2024-01-01")),
            Err(AppError::NotFound { kind: RecordKind::Borrowing, id: 9 })
        ));
    }
}
