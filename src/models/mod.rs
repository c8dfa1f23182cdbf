//! Data models for the library ledger

pub mod book;
pub mod borrowing;
pub mod date;
pub mod enums;
pub mod member;
pub mod report;

// Re-export commonly used types
pub use book::{Book, BookQuery, BookShort, CreateBook, UpdateBook};
pub use borrowing::{
    BorrowRequest, Borrowing, BorrowingDetails, NewBorrowing, ReturnAction, ReturnReport,
    ReturnRequest,
};
pub use date::DateInput;
pub use enums::{BookStatus, BorrowingStatus, MembershipStatus};
pub use member::{CreateMember, Member, UpdateMember};
pub use report::{AvailableReport, BookHistory, BorrowChoices, Dashboard, MemberSummary, OverdueEntry};
