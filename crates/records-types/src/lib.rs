//! Records Types - Pure type definitions for the record service
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, so the wire format can be shared with clients.

pub mod lax;
pub mod record;

pub use record::*;
