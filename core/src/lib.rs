//! appshell-core：应用外壳的客户端状态核心。
//!
//! 包含两个相互独立的响应式状态存储（主题偏好、会话状态）、它们依赖的
//! 存储/外观抽象，以及根据两者决定渲染内容的应用根视图。

pub mod api;
pub mod appearance;
pub mod config;
pub mod context;
pub mod error;
pub mod session;
pub mod shell;
pub mod storage;
pub mod theme;
