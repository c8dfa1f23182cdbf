//! Book (catalog entry) model and related types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::enums::BookStatus;

/// Earliest publication year accepted in the catalog
pub const MIN_PUBLISHED_YEAR: i32 = 1000;

/// Book record held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub published_year: i32,
    pub status: BookStatus,
    pub description: String,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

/// Short book view used in listings and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        BookShort {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// Create book request. New books always start `Available`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,
    #[validate(length(min = 10, max = 20, message = "ISBN must be 10-20 characters"))]
    pub isbn: String,
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,
    #[validate(range(min = 1000, message = "Must be a valid year"))]
    pub published_year: i32,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,
}

/// Update book request; absent fields are left untouched.
/// Availability is not editable here, only borrow and return change it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,
    #[validate(length(min = 10, max = 20, message = "ISBN must be 10-20 characters"))]
    pub isbn: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,
    #[validate(range(min = 1000, message = "Must be a valid year"))]
    pub published_year: Option<i32>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

impl UpdateBook {
    /// Copy every present field onto `book`
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(isbn) = self.isbn {
            book.isbn = isbn;
        }
        if let Some(category) = self.category {
            book.category = category;
        }
        if let Some(year) = self.published_year {
            book.published_year = year;
        }
        if let Some(description) = self.description {
            book.description = description;
        }
    }
}

/// Upper bound on the publication year depends on the caller's "today"
pub fn check_published_year(year: i32, today: NaiveDate) -> Result<(), ValidationError> {
    if year < MIN_PUBLISHED_YEAR || year > today.year() {
        let mut err = ValidationError::new("published_year");
        err.message = Some("Must be a valid year".into());
        return Err(err);
    }
    Ok(())
}

/// Book search filters; all present filters must match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    /// Case-insensitive substring of title, author or ISBN
    pub query: Option<String>,
    /// Exact category
    pub category: Option<String>,
    pub status: Option<BookStatus>,
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(q) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            let hit = book.title.to_lowercase().contains(&q)
                || book.author.to_lowercase().contains(&q)
                || book.isbn.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if book.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if book.status != status {
                return false;
            }
        }
        true
    }
}
