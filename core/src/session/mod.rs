//! # 会话状态模块
//!
//! 根据安全凭据存储中是否存在会话 token 判断登录状态。
//!
//! - token 只保存在安全存储的 `AUTH_TOKEN_KEY` 下，内存中仅在单次调用期间存在
//! - 初始化读取失败只记录日志；登录/登出的写入/删除失败必须上抛
//! - `is_initializing` 只会从 true 变为 false 一次

pub mod store;
pub mod types;

pub use store::SessionStore;
pub use types::{SessionState, SessionStatus, SessionToken, User};
