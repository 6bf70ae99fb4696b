pub mod load;
pub mod types;

pub use load::{get_appshell_data_dir, load, load_default, load_from_path};
pub use types::{
    AppConfig, AppearanceConfig, FileAppearanceConfig, FileStorageConfig, FixedAppearanceConfig,
    LoggingConfig, StorageConfig,
};
