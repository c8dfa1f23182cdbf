//! Catalog management service

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ConflictKind},
    models::book::{check_published_year, Book, CreateBook, UpdateBook},
};

use super::{borrowings::can_delete_book, SharedRepository};

#[derive(Clone)]
pub struct CatalogService {
    repository: SharedRepository,
}

impl CatalogService {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    /// Add a book. `today` bounds the publication year.
    pub async fn add_book(&self, book: CreateBook, today: NaiveDate) -> AppResult<Book> {
        book.validate()?;
        check_published_year(book.published_year, today)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.repository.write().await.books.create(book)?;
        tracing::info!(book_id = created.id, title = %created.title, "Book added");
        Ok(created)
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.read().await.books.get_by_id(id).cloned()
    }

    pub async fn update_book(&self, id: i32, changes: UpdateBook, today: NaiveDate) -> AppResult<Book> {
        changes.validate()?;
        if let Some(year) = changes.published_year {
            check_published_year(year, today).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let updated = self.repository.write().await.books.update(id, changes)?;
        tracing::info!(book_id = id, "Book updated");
        Ok(updated)
    }

    /// Delete a book that is not currently borrowed
    pub async fn delete_book(&self, id: i32) -> AppResult<Book> {
        let mut repo = self.repository.write().await;
        repo.books.get_by_id(id)?;

        if !can_delete_book(&repo, id) {
            tracing::warn!(book_id = id, "Delete rejected: book is borrowed");
            return Err(AppError::conflict(
                ConflictKind::BookBorrowed,
                "Cannot delete book that is currently borrowed",
            ));
        }

        let deleted = repo.books.delete(id)?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(deleted)
    }

    /// Every book in insertion order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.read().await.books.list()
    }
}
