//! Repository layer — entity-scoped database operations.
//!
//! Realizes the persistence surface the workflow handlers depend on:
//! save, find-by-id, and find-by-status over test requests, with the
//! owned lab result and consultation rows handled alongside the parent.

mod test_request;

pub use test_request::*;
