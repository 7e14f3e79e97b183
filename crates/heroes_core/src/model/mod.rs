//! Record model exchanged with the remote hero collection.
//!
//! # Responsibility
//! - Define the wire shape shared by every data-access operation.
//!
//! # Invariants
//! - Field names `id` and `name` match the remote JSON representation exactly.
//! - `id` is assigned by the server and never changes afterwards.

pub mod hero;
