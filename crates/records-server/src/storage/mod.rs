//! Storage layer
//!
//! Records live only in process memory and are lost on shutdown.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::RecordStore;
