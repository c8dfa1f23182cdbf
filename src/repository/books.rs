//! Books store

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::{
        book::{Book, CreateBook, UpdateBook},
        enums::BookStatus,
    },
};

use super::next_id;

#[derive(Debug, Clone, Default)]
pub struct BooksRepository {
    books: IndexMap<i32, Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new book; it always starts `Available`
    pub fn create(&mut self, book: CreateBook) -> AppResult<Book> {
        let id = next_id(&self.books)?;
        let created = Book {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            category: book.category,
            published_year: book.published_year,
            status: BookStatus::Available,
            description: book.description,
        };
        self.books.insert(id, created.clone());
        Ok(created)
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Book> {
        self.books
            .get(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Book, id))
    }

    pub fn contains(&self, id: i32) -> bool {
        self.books.contains_key(&id)
    }

    pub fn update(&mut self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Book, id))?;
        changes.apply(book);
        Ok(book.clone())
    }

    /// Only the lifecycle transitions should call this
    pub fn set_status(&mut self, id: i32, status: BookStatus) -> AppResult<()> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Book, id))?;
        book.status = status;
        Ok(())
    }

    /// Remove a book, keeping the order of the others
    pub fn delete(&mut self, id: i32) -> AppResult<Book> {
        self.books
            .shift_remove(&id)
            .ok_or_else(|| AppError::not_found(RecordKind::Book, id))
    }

    /// Books in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn list(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
