//! # 主题偏好模块
//!
//! 解析并持久化用户的显示主题偏好，并与 OS 外观变更保持一致。
//!
//! - 偏好（`ThemePreference`）持久化在通用键值存储的 `THEME_KEY` 下
//! - 实际配色（`ColorScheme`）始终由（偏好，最新 OS 报告）推导，不单独持久化
//! - OS 外观监听在初始化时注册一次，随 store 生命周期存在

pub mod resolve;
pub mod store;
pub mod types;

pub use resolve::resolve_scheme;
pub use store::ThemeStore;
pub use types::{ThemePreference, ThemeState};
