//! Report scenarios against the demo catalog

use library_ledger::models::{BookQuery, BookStatus, CreateBook};

use crate::common::{borrow, date, demo_services, return_on};

#[tokio::test]
async fn test_overdue_report_example() {
    let services = demo_services();
    services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-01", Some("2024-01-15")))
        .await
        .unwrap();

    let report = services.reports.overdue_report(date("2024-02-01")).await;
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].days_overdue, 17);
    assert_eq!(report[0].book_title, "Python Programming");
    assert_eq!(report[0].member_name, "Alice Johnson");

    services
        .borrowings
        .return_borrowing(1, return_on("2024-01-20"))
        .await
        .unwrap();
    assert!(services.reports.overdue_report(date("2024-02-01")).await.is_empty());
}

#[tokio::test]
async fn test_overdue_moves_with_today() {
    let services = demo_services();
    services
        .borrowings
        .borrow(borrow(2, 1, "2024-01-01", None))
        .await
        .unwrap();

    assert_eq!(services.reports.dashboard(date("2024-01-15")).await.overdue_count, 0);
    assert_eq!(services.reports.dashboard(date("2024-01-16")).await.overdue_count, 1);
    assert_eq!(services.reports.dashboard(date("2024-01-15")).await.overdue_count, 0);
}

#[tokio::test]
async fn test_dashboard_and_available_report() {
    let services = demo_services();
    let today = date("2024-03-01");
    services
        .catalog
        .add_book(
            CreateBook {
                title: "Programming Rust".to_string(),
                author: "Jim Blandy".to_string(),
                isbn: "978-1492052593".to_string(),
                category: "Programming".to_string(),
                published_year: 2021,
                description: String::new(),
            },
            today,
        )
        .await
        .unwrap();
    services
        .borrowings
        .borrow(borrow(1, 1, "2024-02-01", None))
        .await
        .unwrap();

    let dash = services.reports.dashboard(today).await;
    assert_eq!(dash.total_books, 3);
    assert_eq!(dash.available_books, 2);
    assert_eq!(dash.borrowed_books, 1);
    assert_eq!(dash.total_members, 1);
    assert_eq!(dash.overdue_count, 1);
    assert_eq!(dash.recent_borrowings.len(), 1);

    let available = services.reports.available_by_category(Some("Programming")).await;
    assert_eq!(available.books.len(), 1);
    assert_eq!(available.books[0].title, "Programming Rust");
    assert_eq!(available.categories, vec!["Programming", "Web Development"]);

    let borrowed = services
        .reports
        .search_books(&BookQuery {
            status: Some(BookStatus::Borrowed),
            ..Default::default()
        })
        .await;
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].id, 1);

    let choices = services.reports.borrow_choices().await;
    assert_eq!(choices.books.len(), 2);
    assert_eq!(choices.members.len(), 1);
}

#[tokio::test]
async fn test_member_and_book_views() {
    let services = demo_services();
    services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-01", None))
        .await
        .unwrap();
    services
        .borrowings
        .borrow(borrow(2, 1, "2024-01-03", None))
        .await
        .unwrap();
    services
        .borrowings
        .return_borrowing(1, return_on("2024-01-10"))
        .await
        .unwrap();

    let summary = services
        .reports
        .member_summary(1, date("2024-01-20"))
        .await
        .unwrap();
    assert_eq!(summary.total_borrowed, 2);
    assert_eq!(summary.currently_borrowed, 1);
    assert_eq!(summary.overdue_books, 1);

    let history = services.reports.book_history(1).await.unwrap();
    assert_eq!(history.borrowings.len(), 1);
    assert_eq!(history.borrowings[0].member_name.as_deref(), Some("Alice Johnson"));

    let listed = services.reports.borrowings_with_details().await;
    let ids: Vec<_> = listed.iter().map(|d| d.borrowing.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let found = services.reports.search_members(Some("alice")).await;
    assert_eq!(found.len(), 1);
}
