//! Key-value caches for serializable data.
//!
//! [`DataCache`] is the common interface, implemented here by [`InMemoryCache`]. Values are stored
//! in their JSON form using `serde_json`, and [`SimpleCache`] narrows any cache to a single value
//! type.

mod data_cache;
mod error;
mod in_memory;
mod simple;

pub use data_cache::*;
pub use error::*;
pub use in_memory::*;
pub use simple::*;
