//! Borrowing lifecycle.
//!
//! A book is either `Available` or `Borrowed`; a borrowing record goes from
//! `Borrowed` to `Returned` and stays there. The book is `Borrowed` exactly
//! while one active borrowing references it. Both transitions run under the
//! repository write lock, so they are serialized and either fully apply or
//! leave every record untouched.

use chrono::{Days, NaiveDate};

use crate::{
    error::{AppError, AppResult, ConflictKind},
    models::{
        borrowing::{BorrowRequest, Borrowing, NewBorrowing, ReturnAction, ReturnReport, ReturnRequest},
        enums::BookStatus,
    },
    repository::Repository,
};

use super::SharedRepository;

/// Active and past its due date relative to `today`
pub fn is_overdue(borrowing: &Borrowing, today: NaiveDate) -> bool {
    borrowing.is_active() && borrowing.due_date < today
}

/// Whole days past due, `None` when the borrowing is not overdue
pub fn days_overdue(borrowing: &Borrowing, today: NaiveDate) -> Option<i64> {
    is_overdue(borrowing, today).then(|| (today - borrowing.due_date).num_days())
}

/// A book may be deleted only while no active borrowing references it
pub fn can_delete_book(repository: &Repository, book_id: i32) -> bool {
    !repository.borrowings.has_active_for_book(book_id)
}

/// A member may be deleted only while they hold no active borrowing
pub fn can_delete_member(repository: &Repository, member_id: i32) -> bool {
    !repository.borrowings.has_active_for_member(member_id)
}

#[derive(Clone)]
pub struct BorrowingsService {
    repository: SharedRepository,
    default_loan_days: u64,
}

impl BorrowingsService {
    pub fn new(repository: SharedRepository, default_loan_days: u64) -> Self {
        Self {
            repository,
            default_loan_days,
        }
    }

    /// Lend a book to a member
    pub async fn borrow(&self, request: BorrowRequest) -> AppResult<Borrowing> {
        let borrow_date = request.borrow_date.to_date()?;
        let due_date = match &request.due_date {
            Some(due) => due.to_date()?,
            None => borrow_date
                .checked_add_days(Days::new(self.default_loan_days))
                .ok_or_else(|| AppError::Validation("Due date out of range".to_string()))?,
        };
        if due_date < borrow_date {
            return Err(AppError::Validation(format!(
                "Due date {} is before borrow date {}",
                due_date, borrow_date
            )));
        }

        let mut repo = self.repository.write().await;

        let book = repo.books.get_by_id(request.book_id)?;
        let member = repo.members.get_by_id(request.member_id)?;

        if !book.is_available() {
            tracing::warn!(book_id = book.id, "Borrow rejected: book is not available");
            return Err(AppError::conflict(
                ConflictKind::BookNotAvailable,
                format!("Book {} is not available", book.id),
            ));
        }
        if !member.is_active() {
            tracing::warn!(member_id = member.id, "Borrow rejected: member is inactive");
            return Err(AppError::conflict(
                ConflictKind::MemberInactive,
                format!("Member {} is not active", member.id),
            ));
        }

        let borrowing = repo.borrowings_create(NewBorrowing {
            book_id: request.book_id,
            member_id: request.member_id,
            borrow_date,
            due_date,
        })?;
        repo.books.set_status(borrowing.book_id, BookStatus::Borrowed)?;

        tracing::info!(
            borrowing_id = borrowing.id,
            book_id = borrowing.book_id,
            member_id = borrowing.member_id,
            due_date = %borrowing.due_date,
            "Book borrowed"
        );
        Ok(borrowing)
    }

    /// Close a borrowing. Returning an already returned record changes
    /// nothing and comes back with a warning instead of an error.
    pub async fn return_borrowing(&self, id: i32, request: ReturnRequest) -> AppResult<ReturnReport> {
        let return_date = request.return_date.to_date()?;

        let mut repo = self.repository.write().await;

        let current = repo.borrowings.get_by_id(id)?.clone();
        if !current.is_active() {
            tracing::warn!(borrowing_id = id, "Return ignored: already returned");
            return Ok(ReturnReport {
                action: ReturnAction::AlreadyReturned,
                borrowing: current,
                warnings: vec!["This book has already been returned".to_string()],
            });
        }
        if return_date < current.borrow_date {
            return Err(AppError::Validation(format!(
                "Return date {} is before borrow date {}",
                return_date, current.borrow_date
            )));
        }

        let borrowing = repo.borrowings.mark_returned(id, return_date)?;

        let mut warnings = Vec::new();
        if repo.borrowings.has_active_for_book(borrowing.book_id) {
            // Another active borrowing owns the book now
            tracing::warn!(
                borrowing_id = id,
                book_id = borrowing.book_id,
                "Book has a newer active borrowing; availability left unchanged"
            );
            warnings.push(format!(
                "Book {} is still out on another borrowing",
                borrowing.book_id
            ));
        } else if repo.books.contains(borrowing.book_id) {
            repo.books.set_status(borrowing.book_id, BookStatus::Available)?;
        }

        tracing::info!(
            borrowing_id = id,
            book_id = borrowing.book_id,
            return_date = %return_date,
            "Book returned"
        );
        Ok(ReturnReport {
            action: ReturnAction::Returned,
            borrowing,
            warnings,
        })
    }

    /// Get borrowing by ID
    pub async fn get_borrowing(&self, id: i32) -> AppResult<Borrowing> {
        let repo = self.repository.read().await;
        repo.borrowings.get_by_id(id).cloned()
    }

    /// All borrowings in the order they were made
    pub async fn list_borrowings(&self) -> Vec<Borrowing> {
        self.repository.read().await.borrowings.list()
    }

    pub async fn can_delete_book(&self, book_id: i32) -> bool {
        can_delete_book(&*self.repository.read().await, book_id)
    }

    pub async fn can_delete_member(&self, member_id: i32) -> bool {
        can_delete_member(&*self.repository.read().await, member_id)
    }
}
