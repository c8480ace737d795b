//! Document storage behind the directory

pub mod error;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use traits::{Collection, DocumentStore};
