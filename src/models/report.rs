//! Read-only report shapes

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    book::{Book, BookShort},
    borrowing::{Borrowing, BorrowingDetails},
    member::Member,
};

/// One line of the overdue report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueEntry {
    #[serde(flatten)]
    pub borrowing: Borrowing,
    pub book_title: String,
    pub book_author: String,
    pub member_name: String,
    pub member_email: String,
    pub member_phone: String,
    /// Whole days between the due date and the report date
    pub days_overdue: i64,
}

/// Available books, optionally narrowed to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableReport {
    pub books: Vec<Book>,
    /// Distinct categories across the whole catalog, sorted
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
}

/// Home page figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub total_members: usize,
    pub overdue_count: usize,
    pub recent_borrowings: Vec<BorrowingDetails>,
}

/// A member with their borrowing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub member: Member,
    pub borrowings: Vec<BorrowingDetails>,
    pub total_borrowed: usize,
    pub currently_borrowed: usize,
    pub overdue_books: usize,
}

/// A book with every borrowing that ever referenced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookHistory {
    pub book: Book,
    pub borrowings: Vec<BorrowingDetails>,
}

/// What can be offered on a borrow form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowChoices {
    pub books: Vec<BookShort>,
    pub members: Vec<MemberChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberChoice {
    pub id: i32,
    pub name: String,
}

impl From<&Member> for MemberChoice {
    fn from(member: &Member) -> Self {
        MemberChoice {
            id: member.id,
            name: member.name.clone(),
        }
    }
}
