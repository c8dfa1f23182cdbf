//! Borrowing (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{date::DateInput, enums::BorrowingStatus};

/// Borrowing record held by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrowing {
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: BorrowingStatus,
}

impl Borrowing {
    /// Not yet returned
    pub fn is_active(&self) -> bool {
        self.status == BorrowingStatus::Borrowed
    }
}

/// Ledger insert; dates are already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBorrowing {
    pub book_id: i32,
    pub member_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Borrow request as received from the presentation layer
#[derive(Debug, Clone, Deserialize)]
pub struct BorrowRequest {
    pub book_id: i32,
    pub member_id: i32,
    pub borrow_date: DateInput,
    /// Defaults to `borrow_date` plus the configured loan length
    #[serde(default)]
    pub due_date: Option<DateInput>,
}

/// Return request
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRequest {
    pub return_date: DateInput,
}

/// Borrowing with display fields from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowingDetails {
    #[serde(flatten)]
    pub borrowing: Borrowing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
}

/// What a return call did
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReturnAction {
    Returned,
    /// The record was already closed; nothing changed
    AlreadyReturned,
}

/// Report returned alongside the borrowing after a return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnReport {
    pub action: ReturnAction,
    pub borrowing: Borrowing,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
