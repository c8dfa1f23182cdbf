//! Shared fixtures

use chrono::NaiveDate;
use library_ledger::{
    config::{AppConfig, LibraryConfig, LoggingConfig},
    models::{BorrowRequest, ReturnRequest},
    services::Services,
    AppState,
};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Services over the demo catalog: books 1 and 2, member 1
pub fn demo_services() -> Services {
    let config = AppConfig {
        logging: LoggingConfig::default(),
        library: LibraryConfig {
            default_loan_days: 14,
            seed_demo_data: true,
        },
    };
    let state = AppState::new(config, date("2024-01-01")).expect("state builds");
    (*state.services).clone()
}

pub fn borrow(book_id: i32, member_id: i32, on: &str, due: Option<&str>) -> BorrowRequest {
    BorrowRequest {
        book_id,
        member_id,
        borrow_date: on.into(),
        due_date: due.map(Into::into),
    }
}

pub fn return_on(on: &str) -> ReturnRequest {
    ReturnRequest {
        return_date: on.into(),
    }
}
