//! Static documentation search: an immutable record store loaded from a
//! build-time snapshot, and a deterministic ranking engine over it.

pub mod error;
pub mod record;
pub mod search;
pub mod store;

pub use error::SnapshotError;
pub use record::{Category, SearchRecord};
pub use search::{SearchHit, search};
pub use store::IndexStore;
