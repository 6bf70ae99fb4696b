//! OS 外观（浅色/深色）来源抽象与单订阅者推送通道。

pub mod feed;
pub mod r#trait;
pub mod types;

pub use feed::{AppearanceFeed, AppearanceReceiver};
pub use r#trait::AppearanceSource;
pub use types::ColorScheme;
