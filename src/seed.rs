//! Demo catalog loaded on startup when `library.seed_demo_data` is set

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{book::CreateBook, enums::MembershipStatus, member::CreateMember},
    repository::Repository,
};

/// Two books and one active member who joins on `today`
pub fn load_demo_data(repository: &mut Repository, today: NaiveDate) -> AppResult<()> {
    repository.books.create(CreateBook {
        title: "Python Programming".to_string(),
        author: "John Smith".to_string(),
        isbn: "978-1234567890".to_string(),
        category: "Programming".to_string(),
        published_year: 2020,
        description: "A comprehensive guide to Python programming language.".to_string(),
    })?;
    repository.books.create(CreateBook {
        title: "Web Development with Flask".to_string(),
        author: "Jane Doe".to_string(),
        isbn: "978-0987654321".to_string(),
        category: "Web Development".to_string(),
        published_year: 2019,
        description: "Learn to build web applications using Flask framework.".to_string(),
    })?;
    repository.members.create(
        CreateMember {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            membership_status: MembershipStatus::Active,
        },
        today,
    )?;

    tracing::info!(
        books = repository.books.len(),
        members = repository.members.len(),
        "Demo data loaded"
    );
    Ok(())
}
