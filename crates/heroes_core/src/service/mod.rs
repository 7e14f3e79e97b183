//! Data-access services.
//!
//! # Responsibility
//! - Wrap transport calls into failure-tolerant, logged use-case APIs.
//! - Keep presentation callers free of per-call error handling.

pub mod hero_service;
