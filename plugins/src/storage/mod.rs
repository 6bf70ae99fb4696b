pub mod file;
pub mod memory;
pub mod secure_file;

pub use file::FileKeyValueStore;
pub use memory::{MemoryKeyValueStore, MemorySecureStore};
pub use secure_file::FileSecureStore;
