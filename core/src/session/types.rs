//! 会话类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 用户资料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 不透明的会话凭据，释放时清零
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// 会话状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// 尚未开始初始化
    Uninitialized,
    /// 正在读取安全存储
    Initializing,
    LoggedOut,
    LoggedIn,
}

/// 会话状态快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub status: SessionStatus,
    pub is_logged_in: bool,
    pub user: Option<User>,
    pub is_initializing: bool,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Uninitialized,
            is_logged_in: false,
            user: None,
            is_initializing: true,
            updated_at: Utc::now(),
        }
    }

    /// 开始初始化；已经完成过初始化的会话保持原状态
    pub fn begin_initialize(&mut self) {
        if self.is_initializing {
            self.status = SessionStatus::Initializing;
            self.updated_at = Utc::now();
        }
    }

    /// 初始化结束，`token_found` 表示安全存储中存在 token
    pub fn finish_initialize(&mut self, token_found: bool) {
        if token_found {
            // 本版本不解码用户资料，重启后的 user 保持原值（通常为空）
            self.status = SessionStatus::LoggedIn;
            self.is_logged_in = true;
        } else {
            self.status = SessionStatus::LoggedOut;
            self.is_logged_in = false;
            self.user = None;
        }
        self.is_initializing = false;
        self.updated_at = Utc::now();
    }

    pub fn log_in(&mut self, user: User) {
        self.status = SessionStatus::LoggedIn;
        self.is_logged_in = true;
        self.user = Some(user);
        self.is_initializing = false;
        self.updated_at = Utc::now();
    }

    pub fn log_out(&mut self) {
        self.status = SessionStatus::LoggedOut;
        self.is_logged_in = false;
        self.user = None;
        self.is_initializing = false;
        self.updated_at = Utc::now();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.status, SessionStatus::Uninitialized);
        assert!(state.is_initializing);
        assert!(!state.is_logged_in);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_initialize_transitions() {
        let mut state = SessionState::new();
        state.begin_initialize();
        assert_eq!(state.status, SessionStatus::Initializing);
        assert!(state.is_initializing);

        state.finish_initialize(true);
        assert_eq!(state.status, SessionStatus::LoggedIn);
        assert!(state.is_logged_in);
        assert!(state.user.is_none());
        assert!(!state.is_initializing);
    }

    #[test]
    fn test_initializing_never_returns() {
        let mut state = SessionState::new();
        state.log_out();
        state.begin_initialize();
        assert!(!state.is_initializing);
        assert_eq!(state.status, SessionStatus::LoggedOut);
    }

    #[test]
    fn test_login_logout_from_any_state() {
        let mut state = SessionState::new();
        state.log_in(user());
        assert_eq!(state.status, SessionStatus::LoggedIn);
        assert_eq!(state.user, Some(user()));
        assert!(!state.is_initializing);

        state.log_out();
        assert_eq!(state.status, SessionStatus::LoggedOut);
        assert!(state.user.is_none());

        state.log_out();
        assert_eq!(state.status, SessionStatus::LoggedOut);
    }

    #[test]
    fn test_token_debug_redacted() {
        let token = SessionToken::new("secret-value");
        assert_eq!(format!("{token:?}"), "SessionToken(<redacted>)");
        assert_eq!(token.expose(), "secret-value");
    }
}
