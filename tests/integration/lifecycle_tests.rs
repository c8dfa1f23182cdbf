//! Borrow / return lifecycle scenarios

use library_ledger::{
    error::{ConflictKind, ErrorCode, ErrorResponse, RecordKind},
    models::{BookStatus, BorrowingStatus, ReturnAction, UpdateMember},
    services::Services,
    AppError,
};

use crate::common::{borrow, date, demo_services, return_on};

/// Book is Borrowed exactly when one active borrowing references it
async fn assert_availability_consistent(services: &Services) {
    let borrowings = services.borrowings.list_borrowings().await;
    for book in services.catalog.list_books().await {
        let active = borrowings
            .iter()
            .filter(|b| b.book_id == book.id && b.status == BorrowingStatus::Borrowed)
            .count();
        match book.status {
            BookStatus::Borrowed => assert_eq!(active, 1, "book {} borrowed", book.id),
            BookStatus::Available => assert_eq!(active, 0, "book {} available", book.id),
        }
    }
}

#[tokio::test]
async fn test_borrow_and_return_example() {
    let services = demo_services();

    let b = services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-01", Some("2024-01-15")))
        .await
        .unwrap();
    assert_eq!(b.id, 1);
    assert_eq!(b.status, BorrowingStatus::Borrowed);
    assert_eq!(services.catalog.get_book(1).await.unwrap().status, BookStatus::Borrowed);
    assert_availability_consistent(&services).await;

    let report = services
        .borrowings
        .return_borrowing(1, return_on("2024-01-20"))
        .await
        .unwrap();
    assert_eq!(report.action, ReturnAction::Returned);
    assert_eq!(report.borrowing.status, BorrowingStatus::Returned);
    assert_eq!(report.borrowing.return_date, Some(date("2024-01-20")));
    assert_eq!(services.catalog.get_book(1).await.unwrap().status, BookStatus::Available);
    assert_availability_consistent(&services).await;
}

#[tokio::test]
async fn test_second_borrow_of_same_book_fails() {
    let services = demo_services();
    services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-01", None))
        .await
        .unwrap();

    let err = services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-02", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conflict { kind: ConflictKind::BookNotAvailable, .. }
    ));
    assert_eq!(ErrorResponse::from(&err).code, ErrorCode::BookNotAvailable as u32);
    assert_eq!(services.borrowings.list_borrowings().await.len(), 1);
    assert_availability_consistent(&services).await;
}

#[tokio::test]
async fn test_delete_guards_follow_active_borrowings() {
    let services = demo_services();
    services
        .borrowings
        .borrow(borrow(1, 1, "2024-01-01", None))
        .await
        .unwrap();

    assert!(matches!(
        services.catalog.delete_book(1).await,
        Err(AppError::Conflict { kind: ConflictKind::BookBorrowed, .. })
    ));
    assert!(matches!(
        services.members.delete_member(1).await,
        Err(AppError::Conflict { kind: ConflictKind::MemberHasBorrowings, .. })
    ));

    // Book 2 was never borrowed
    services.catalog.delete_book(2).await.unwrap();
    assert!(services.catalog.list_books().await.iter().all(|b| b.id != 2));

    services
        .borrowings
        .return_borrowing(1, return_on("2024-01-03"))
        .await
        .unwrap();
    services.catalog.delete_book(1).await.unwrap();
    services.members.delete_member(1).await.unwrap();
    assert!(services.catalog.list_books().await.is_empty());
    assert!(services.members.list_members().await.is_empty());

    // Ledger keeps the history
    assert_eq!(services.borrowings.list_borrowings().await.len(), 1);
}

#[tokio::test]
async fn test_inactive_member_then_reactivated() {
    let services = demo_services();
    let deactivate = UpdateMember {
        membership_status: Some(library_ledger::models::MembershipStatus::Inactive),
        ..Default::default()
    };
    services.members.update_member(1, deactivate).await.unwrap();

    let err = services
        .borrowings
        .borrow(borrow(2, 1, "2024-01-01", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conflict { kind: ConflictKind::MemberInactive, .. }
    ));
    assert_availability_consistent(&services).await;

    let reactivate = UpdateMember {
        membership_status: Some(library_ledger::models::MembershipStatus::Active),
        ..Default::default()
    };
    services.members.update_member(1, reactivate).await.unwrap();
    services
        .borrowings
        .borrow(borrow(2, 1, "2024-01-01", None))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rebooking_cycle_keeps_invariant() {
    let services = demo_services();
    let mut last_id = 0;
    for (i, day) in ["2024-01-01", "2024-01-05", "2024-01-09"].iter().enumerate() {
        let b = services
            .borrowings
            .borrow(borrow(1, 1, day, None))
            .await
            .unwrap();
        assert_eq!(b.id as usize, i + 1);
        assert_availability_consistent(&services).await;
        services
            .borrowings
            .return_borrowing(b.id, return_on(day))
            .await
            .unwrap();
        assert_availability_consistent(&services).await;
        last_id = b.id;
    }

    // Re-returning an old record is a no-op
    let report = services
        .borrowings
        .return_borrowing(1, return_on("2024-02-01"))
        .await
        .unwrap();
    assert_eq!(report.action, ReturnAction::AlreadyReturned);
    assert!(!report.warnings.is_empty());
    assert_eq!(last_id, 3);
    assert_availability_consistent(&services).await;
}

#[tokio::test]
async fn test_unknown_references() {
    let services = demo_services();
    assert!(matches!(
        services.borrowings.borrow(borrow(1, 9, "2024-01-01", None)).await,
        Err(AppError::NotFound { kind: RecordKind::Member, id: 9 })
    ));
    assert!(matches!(
        services.borrowings.get_borrowing(1).await,
        Err(AppError::NotFound { kind: RecordKind::Borrowing, id: 1 })
    ));
    assert!(matches!(
        services.borrowings.borrow(borrow(1, 1, "01/01/2024", None)).await,
        Err(AppError::Validation(_))
    ));
}
