//! 会话状态存储

use std::sync::Arc;
use tokio::sync::watch;

use super::types::{SessionState, SessionStatus, SessionToken, User};
use crate::error::SessionError;
use crate::storage::{SecureStore, AUTH_TOKEN_KEY};

/// 会话状态存储，克隆得到的是同一个 store 的句柄
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    secure: Arc<dyn SecureStore>,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new(secure: Arc<dyn SecureStore>) -> Self {
        let (state, _) = watch::channel(SessionState::new());
        Self {
            inner: Arc::new(SessionStoreInner { secure, state }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.state.borrow().status
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.state.borrow().is_logged_in
    }

    pub fn is_initializing(&self) -> bool {
        self.inner.state.borrow().is_initializing
    }

    pub fn user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    /// 订阅会话状态变更
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// 从安全存储恢复登录状态。
    ///
    /// 读取失败只记录日志并视为未登录；无论结果如何，结束时 `is_initializing` 为 false。
    pub async fn initialize(&self) {
        self.inner.state.send_modify(SessionState::begin_initialize);

        let token_found = match self.inner.secure.get(AUTH_TOKEN_KEY).await {
            Ok(token) => {
                // 只判断是否存在，读出的 token 随即清零释放
                let token = token.map(SessionToken::from);
                token.is_some()
            }
            Err(e) => {
                tracing::error!(
                    target: "appshell.session",
                    stage = "session.init.read",
                    backend = self.inner.secure.name(),
                    error = %e,
                    "secure store access failed"
                );
                false
            }
        };

        self.inner
            .state
            .send_modify(|state| state.finish_initialize(token_found));

        tracing::info!(
            target: "appshell.session",
            stage = "session.init.done",
            logged_in = token_found,
            "session initialization complete"
        );
    }

    /// 保存 token 并进入登录状态；写入失败时状态不变并返回错误
    pub async fn login(&self, token: SessionToken, user: User) -> Result<(), SessionError> {
        if let Err(e) = self.inner.secure.set(AUTH_TOKEN_KEY, token.expose()).await {
            tracing::warn!(
                target: "appshell.session",
                stage = "session.login.write",
                backend = self.inner.secure.name(),
                error = %e,
                "failed to store session token"
            );
            return Err(e.into());
        }
        drop(token);

        let user_id = user.id.clone();
        self.inner.state.send_modify(|state| state.log_in(user));
        tracing::info!(
            target: "appshell.session",
            stage = "session.login.ok",
            user_id = %user_id,
            "logged in"
        );
        Ok(())
    }

    /// 删除 token 并进入登出状态；删除失败时状态不变并返回错误
    pub async fn logout(&self) -> Result<(), SessionError> {
        if let Err(e) = self.inner.secure.delete(AUTH_TOKEN_KEY).await {
            tracing::warn!(
                target: "appshell.session",
                stage = "session.logout.delete",
                backend = self.inner.secure.name(),
                error = %e,
                "failed to delete session token"
            );
            return Err(e.into());
        }

        self.inner.state.send_modify(SessionState::log_out);
        tracing::info!(
            target: "appshell.session",
            stage = "session.logout.ok",
            "logged out"
        );
        Ok(())
    }
}
