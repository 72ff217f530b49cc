//! Core library for wikipedia
//!
//! This crate is the **Functional Core** of the `wikipedia` command: pure
//! functions with no I/O. The `wikipedia` binary crate is the Imperative
//! Shell that performs the HTTP request and writes to the terminal.
//!
//! - [`summary`]: the article summary model, request URL templating and
//!   response validation
//! - [`display`]: text filling and terminal formatting
//!
//! # Example
//!
//! ```rust
//! use wikipedia_core::summary::{build_url, parse_summary, API_URL};
//!
//! assert!(build_url(API_URL, "de").contains("de.wikipedia.org"));
//!
//! let summary = parse_summary(r#"{"title": "Rust", "extract": "A language."}"#).unwrap();
//! assert_eq!(summary.title, "Rust");
//! ```

pub mod display;
pub mod summary;
