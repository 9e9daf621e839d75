//! Query - an embedded where/select pipeline for in-memory collections.
//!
//! Query filters and projects slices of plain Rust structs without a query
//! string or a planner. It provides:
//!
//! - Comparison, logical, null and membership operators as plain functions
//! - SQL-style `like` matching with `%` wildcards
//! - Checked integer arithmetic and IEEE float arithmetic
//! - A lazy pipeline: any number of filters, one projection, one terminal call
//!
//! # Quick Start
//!
//! ```rust
//! use standout_query::{query, gt, is_not_null, like};
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//!     age: u32,
//!     email: Option<String>,
//! }
//!
//! let users = vec![
//!     User { name: "Alice".into(), age: 25, email: Some("alice@example.com".into()) },
//!     User { name: "Bob".into(), age: 30, email: None },
//!     User { name: "Charlie".into(), age: 35, email: Some("charlie@example.com".into()) },
//! ];
//!
//! // Records over 28, full values
//! let older = query(&users, |q| q.filter(|u| gt(&u.age, &28))).unwrap();
//! assert_eq!(older.len(), 2);
//!
//! // Names and emails of users with an email address
//! let contacts = query(&users, |q| {
//!     q.filter(|u| is_not_null(&u.email))
//!         .select(|u| (u.name.clone(), u.email.clone()))
//! })
//! .unwrap();
//! assert_eq!(contacts[1].0, "Charlie");
//!
//! // Fallible operators go through try_filter
//! let a_names = query(&users, |q| {
//!     q.try_filter(|u| like(&u.name, "A%"))
//!         .select(|u| u.name.as_str())
//! })
//! .unwrap();
//! assert_eq!(a_names, vec!["Alice"]);
//! ```
//!
//! # Pipeline Semantics
//!
//! ```text
//! result = [ project(r) for r in source if filter_1(r) ∧ filter_2(r) ∧ ... ]
//! ```
//!
//! - **Filters** narrow cumulatively and run in registration order
//! - **Projection** is last-write-wins; without one the output is `&T`
//! - Filtering always happens before projection
//! - The first error aborts execution; records are never silently skipped
//!
//! # Operators
//!
//! | Kind | Functions |
//! |------|-----------|
//! | Comparison | [`eq`], [`ne`], [`gt`], [`ge`], [`lt`], [`le`], [`Op`] |
//! | Logical | [`and`], [`or`], [`not`] |
//! | Null | [`is_null`], [`is_not_null`] |
//! | Membership | [`is_in`], [`not_in`], [`MembershipExt`] |
//! | Pattern | [`like`], [`not_like`], [`LikePattern`], [`LikeExt`] |
//! | Arithmetic | [`add`], [`sub`], [`mul`], [`div`], [`rem`] |
//!
//! # Features
//!
//! - `tracing`: emit `trace!` events when queries execute and patterns compile

mod arith;
mod error;
mod op;
mod pattern;
mod query;

// Re-export public API
pub use arith::{add, div, mul, rem, sub, Arithmetic};
pub use error::{QueryError, Result};
pub use op::{
    and, eq, ge, gt, is_in, is_not_null, is_null, le, lt, ne, not, not_in, or, MembershipExt, Op,
};
pub use pattern::{like, not_like, LikeExt, LikePattern, WILDCARD};
pub use query::{query, Query, Rows};
