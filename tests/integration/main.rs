//! Integration tests over the public service API

mod common;
mod lifecycle_tests;
mod report_tests;
