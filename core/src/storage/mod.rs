pub mod keys;
pub mod r#trait;

pub use keys::{AUTH_TOKEN_KEY, THEME_KEY};
pub use r#trait::{KeyValueStore, SecureStore};
