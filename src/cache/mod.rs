//! Cache Module
//!
//! Provides in-memory caching with lazy TTL expiration and insertion-order eviction.

mod entry;
mod order;
mod shared;
mod store;


// Re-export public types
pub(crate) use entry::Entry;
pub(crate) use order::InsertionOrder;
pub use shared::SharedCache;
pub use store::Cache;
