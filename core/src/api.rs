//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `appshell_core::api` instead of reaching into internal modules.

pub use crate::appearance::{AppearanceFeed, AppearanceReceiver, AppearanceSource, ColorScheme};
pub use crate::config::{
    load, load_default, AppConfig, AppearanceConfig, FileAppearanceConfig, FileStorageConfig,
    FixedAppearanceConfig, LoggingConfig, StorageConfig,
};
pub use crate::context::{AppContext, Services, ServicesFactory, ShellViewWatcher};
pub use crate::error::{AppearanceError, CliError, SessionError, StorageError};
pub use crate::session::{SessionState, SessionStatus, SessionStore, SessionToken, User};
pub use crate::shell::{Navigator, ShellView, StatusBarStyle};
pub use crate::storage::{KeyValueStore, SecureStore, AUTH_TOKEN_KEY, THEME_KEY};
pub use crate::theme::{resolve_scheme, ThemePreference, ThemeState, ThemeStore};
