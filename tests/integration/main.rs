//! Integration tests for the queue public API.
//!
//! Run with: `cargo test --test integration`

mod scenarios;
