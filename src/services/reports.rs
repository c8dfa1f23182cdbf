//! Read-only queries and reports.
//!
//! The free functions are pure projections over a `Repository`; the service
//! wraps them behind the shared read lock. Every date-dependent report takes
//! the reference date from the caller.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, BookShort},
        borrowing::{Borrowing, BorrowingDetails},
        member::{member_matches, Member},
        report::{
            AvailableReport, BookHistory, BorrowChoices, Dashboard, MemberChoice, MemberSummary,
            OverdueEntry,
        },
    },
    repository::Repository,
};

use super::{
    borrowings::{days_overdue, is_overdue},
    SharedRepository,
};

/// Number of borrowings shown on the dashboard
pub const DASHBOARD_RECENT: usize = 5;

fn details(repository: &Repository, borrowing: &Borrowing) -> BorrowingDetails {
    BorrowingDetails {
        borrowing: borrowing.clone(),
        book_title: repository
            .books
            .get_by_id(borrowing.book_id)
            .ok()
            .map(|b| b.title.clone()),
        member_name: repository
            .members
            .get_by_id(borrowing.member_id)
            .ok()
            .map(|m| m.name.clone()),
    }
}

fn newest_first(borrowings: &mut [BorrowingDetails]) {
    // stable: equal dates keep insertion order
    borrowings.sort_by(|a, b| b.borrowing.borrow_date.cmp(&a.borrowing.borrow_date));
}

pub fn search_books(repository: &Repository, query: &BookQuery) -> Vec<Book> {
    repository
        .books
        .iter()
        .filter(|b| query.matches(b))
        .cloned()
        .collect()
}

pub fn search_members(repository: &Repository, query: Option<&str>) -> Vec<Member> {
    let query = query.unwrap_or_default();
    repository
        .members
        .iter()
        .filter(|m| member_matches(m, query))
        .cloned()
        .collect()
}

/// The `limit` most recent borrowings by borrow date
pub fn recent_borrowings(repository: &Repository, limit: usize) -> Vec<BorrowingDetails> {
    let mut all: Vec<_> = repository
        .borrowings
        .iter()
        .map(|b| details(repository, b))
        .collect();
    newest_first(&mut all);
    all.truncate(limit);
    all
}

/// Active borrowings past due, most overdue first
pub fn overdue_report(repository: &Repository, today: NaiveDate) -> Vec<OverdueEntry> {
    let mut entries: Vec<OverdueEntry> = repository
        .borrowings
        .active()
        .filter_map(|b| {
            let days = days_overdue(b, today)?;
            let book = repository.books.get_by_id(b.book_id).ok()?;
            let member = repository.members.get_by_id(b.member_id).ok()?;
            Some(OverdueEntry {
                borrowing: b.clone(),
                book_title: book.title.clone(),
                book_author: book.author.clone(),
                member_name: member.name.clone(),
                member_email: member.email.clone(),
                member_phone: member.phone.clone(),
                days_overdue: days,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.days_overdue.cmp(&a.days_overdue));
    entries
}

pub fn available_by_category(repository: &Repository, category: Option<&str>) -> AvailableReport {
    let category = category.filter(|c| !c.is_empty());
    let books = repository
        .books
        .iter()
        .filter(|b| b.is_available())
        .filter(|b| category.map_or(true, |c| b.category == c))
        .cloned()
        .collect();
    let categories: BTreeSet<&str> = repository.books.iter().map(|b| b.category.as_str()).collect();

    AvailableReport {
        books,
        categories: categories.into_iter().map(String::from).collect(),
        selected_category: category.map(String::from),
    }
}

pub fn dashboard(repository: &Repository, today: NaiveDate) -> Dashboard {
    let total_books = repository.books.len();
    let available_books = repository.books.iter().filter(|b| b.is_available()).count();

    Dashboard {
        today,
        total_books,
        available_books,
        borrowed_books: total_books - available_books,
        total_members: repository.members.len(),
        overdue_count: repository
            .borrowings
            .iter()
            .filter(|b| is_overdue(b, today))
            .count(),
        recent_borrowings: recent_borrowings(repository, DASHBOARD_RECENT),
    }
}

pub fn book_history(repository: &Repository, book_id: i32) -> AppResult<BookHistory> {
    let book = repository.books.get_by_id(book_id)?.clone();
    let borrowings = repository
        .borrowings
        .for_book(book_id)
        .map(|b| details(repository, b))
        .collect();
    Ok(BookHistory { book, borrowings })
}

pub fn member_summary(repository: &Repository, member_id: i32, today: NaiveDate) -> AppResult<MemberSummary> {
    let member = repository.members.get_by_id(member_id)?.clone();
    let own: Vec<&Borrowing> = repository.borrowings.for_member(member_id).collect();

    Ok(MemberSummary {
        member,
        total_borrowed: own.len(),
        currently_borrowed: own.iter().filter(|b| b.is_active()).count(),
        overdue_books: own.iter().filter(|b| is_overdue(b, today)).count(),
        borrowings: own.into_iter().map(|b| details(repository, b)).collect(),
    })
}

/// Borrowings whose book and member still exist, newest first
pub fn borrowings_with_details(repository: &Repository) -> Vec<BorrowingDetails> {
    let mut all: Vec<_> = repository
        .borrowings
        .iter()
        .map(|b| details(repository, b))
        .filter(|d| d.book_title.is_some() && d.member_name.is_some())
        .collect();
    newest_first(&mut all);
    all
}

/// Available books and active members
pub fn borrow_choices(repository: &Repository) -> BorrowChoices {
    BorrowChoices {
        books: repository
            .books
            .iter()
            .filter(|b| b.is_available())
            .map(BookShort::from)
            .collect(),
        members: repository
            .members
            .iter()
            .filter(|m| m.is_active())
            .map(MemberChoice::from)
            .collect(),
    }
}

#[derive(Clone)]
pub struct ReportsService {
    repository: SharedRepository,
}

impl ReportsService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    pub async fn search_books(&self, query: &BookQuery) -> Vec<Book> {
        search_books(&*self.repository.read().await, query)
    }

    pub async fn search_members(&self, query: Option<&str>) -> Vec<Member> {
        search_members(&*self.repository.read().await, query)
    }

    pub async fn recent_borrowings(&self, limit: usize) -> Vec<BorrowingDetails> {
        recent_borrowings(&*self.repository.read().await, limit)
    }

    pub async fn overdue_report(&self, today: NaiveDate) -> Vec<OverdueEntry> {
        let report = overdue_report(&*self.repository.read().await, today);
        tracing::debug!(%today, overdue = report.len(), "Overdue report built");
        report
    }

    pub async fn available_by_category(&self, category: Option<&str>) -> AvailableReport {
        available_by_category(&*self.repository.read().await, category)
    }

    pub async fn dashboard(&self, today: NaiveDate) -> Dashboard {
        dashboard(&*self.repository.read().await, today)
    }

    pub async fn book_history(&self, book_id: i32) -> AppResult<BookHistory> {
        book_history(&*self.repository.read().await, book_id)
    }

    pub async fn member_summary(&self, member_id: i32, today: NaiveDate) -> AppResult<MemberSummary> {
        member_summary(&*self.repository.read().await, member_id, today)
    }

    pub async fn borrowings_with_details(&self) -> Vec<BorrowingDetails> {
        borrowings_with_details(&*self.repository.read().await)
    }

    pub async fn borrow_choices(&self) -> BorrowChoices {
        borrow_choices(&*self.repository.read().await)
    }
}
