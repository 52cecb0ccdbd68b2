//!
//! # Resource services
//!
//! Domain logic for users and tasks, written as plain async functions over an
//! injected store dependency. Both services share the ownership-checked
//! mutation pattern: fetch the resource, compare its creator against the
//! authenticated caller, then apply the mutation. The fetch-check-mutate
//! sequence is not wrapped in a transaction; the database remains the sole
//! arbiter of consistency.

pub mod tasks;
pub mod users;
