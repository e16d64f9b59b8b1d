mod cache;
mod error;
mod store;

pub use cache::LocalCache;
pub use error::CacheError;
pub use store::{FileStore, KeyValueStore, MemoryStore};
