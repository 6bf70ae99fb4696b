//! 主题状态存储

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::resolve::resolve_scheme;
use super::types::{ThemePreference, ThemeState};
use crate::appearance::{AppearanceReceiver, AppearanceSource, ColorScheme};
use crate::storage::{KeyValueStore, THEME_KEY};

/// 主题状态存储。
///
/// 克隆得到的是同一个 store 的句柄；最后一个句柄释放时 OS 外观监听随之注销。
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<ThemeStoreInner>,
}

struct ThemeStoreInner {
    storage: Arc<dyn KeyValueStore>,
    appearance: Arc<dyn AppearanceSource>,
    state: watch::Sender<ThemeState>,
    /// 每次 `set_theme` 递增，用于识别初始化读取期间的用户修改
    revision: AtomicU64,
    /// 串行化持久化写入，过期的写入直接跳过
    persist_lock: tokio::sync::Mutex<()>,
    listener: Mutex<Option<ListenerGuard>>,
}

/// OS 外观监听任务，释放时中止
struct ListenerGuard(JoinHandle<()>);

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, appearance: Arc<dyn AppearanceSource>) -> Self {
        let preference = ThemePreference::FollowSystem;
        let initial = ThemeState {
            preference,
            color_scheme: resolve_scheme(preference, appearance.color_scheme()),
            updated_at: Utc::now(),
        };
        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(ThemeStoreInner {
                storage,
                appearance,
                state,
                revision: AtomicU64::new(0),
                persist_lock: tokio::sync::Mutex::new(()),
                listener: Mutex::new(None),
            }),
        }
    }

    /// 当前实际配色
    pub fn resolved_scheme(&self) -> ColorScheme {
        self.inner.state.borrow().color_scheme
    }

    /// 当前用户偏好
    pub fn preference(&self) -> ThemePreference {
        self.inner.state.borrow().preference
    }

    pub fn is_dark(&self) -> bool {
        self.resolved_scheme().is_dark()
    }

    pub fn state(&self) -> ThemeState {
        self.inner.state.borrow().clone()
    }

    /// 订阅主题状态变更
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.inner.state.subscribe()
    }

    /// OS 外观监听是否已注册
    pub fn has_listener(&self) -> bool {
        lock_listener(&self.inner.listener).is_some()
    }

    /// 设置主题偏好。
    ///
    /// 内存状态立即更新；持久化在独立任务中进行，失败只记录日志，不回滚。
    /// 写入按调用顺序生效：后一次调用之后，较早的写入不会再落盘。
    /// 返回的句柄可以忽略，等待它只用于确认写入已经结束。
    pub fn set_theme(&self, preference: ThemePreference) -> JoinHandle<()> {
        let scheme = resolve_scheme(preference, self.inner.appearance.color_scheme());
        let revision = self.inner.revision.fetch_add(1, Ordering::AcqRel) + 1;
        self.inner.state.send_modify(|state| {
            state.preference = preference;
            state.color_scheme = scheme;
            state.updated_at = Utc::now();
        });
        tracing::info!(
            target: "appshell.theme",
            stage = "theme.set",
            preference = %preference,
            scheme = %scheme,
            "theme set"
        );

        let inner = self.inner.clone();
        tokio::spawn(async move { inner.persist(preference, revision).await })
    }

    /// 从通用存储加载偏好并注册 OS 外观监听。
    ///
    /// 读取失败或值无法识别时回退为跟随系统；错误只记录，不上抛。
    /// 读取期间若已调用过 `set_theme`，保留用户的新选择。
    pub async fn initialize(&self) {
        let revision = self.inner.revision.load(Ordering::Acquire);

        let preference = match self.inner.storage.get(THEME_KEY).await {
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(preference) => preference,
                Err(e) => {
                    tracing::warn!(
                        target: "appshell.theme",
                        stage = "theme.init.parse",
                        error = %e,
                        "stored theme unrecognised, following system"
                    );
                    ThemePreference::FollowSystem
                }
            },
            Ok(None) => ThemePreference::FollowSystem,
            Err(e) => {
                tracing::error!(
                    target: "appshell.theme",
                    stage = "theme.init.read",
                    backend = self.inner.storage.name(),
                    error = %e,
                    "error initializing theme from storage"
                );
                ThemePreference::FollowSystem
            }
        };

        // 先订阅再读取当前 OS 报告，避免两步之间的变更被标记为已读
        self.attach_listener();

        if self.inner.revision.load(Ordering::Acquire) == revision {
            let scheme = resolve_scheme(preference, self.inner.appearance.color_scheme());
            self.inner.state.send_modify(|state| {
                state.preference = preference;
                state.color_scheme = scheme;
                state.updated_at = Utc::now();
            });
        } else {
            tracing::debug!(
                target: "appshell.theme",
                stage = "theme.init.superseded",
                loaded = %preference,
                "theme changed while loading, keeping current preference"
            );
        }

        tracing::info!(
            target: "appshell.theme",
            stage = "theme.init.done",
            preference = %self.preference(),
            scheme = %self.resolved_scheme(),
            "theme initialization complete"
        );
    }

    /// 监听无条件注册：用户中途切换到跟随系统后，后续 OS 变更同样需要生效
    fn attach_listener(&self) {
        let mut slot = lock_listener(&self.inner.listener);
        if slot.is_some() {
            tracing::warn!(
                target: "appshell.theme",
                stage = "theme.listener.exists",
                "appearance listener already registered"
            );
            return;
        }

        let rx = match self.inner.appearance.subscribe() {
            Ok(rx) => rx,
            Err(e) => {
                tracing::error!(
                    target: "appshell.theme",
                    stage = "theme.listener.subscribe",
                    source = self.inner.appearance.name(),
                    error = %e,
                    "failed to subscribe to appearance changes"
                );
                return;
            }
        };

        let handle = tokio::spawn(listen_appearance(Arc::downgrade(&self.inner), rx));
        *slot = Some(ListenerGuard(handle));
    }
}

impl ThemeStoreInner {
    async fn persist(&self, preference: ThemePreference, revision: u64) {
        let _guard = self.persist_lock.lock().await;
        if self.revision.load(Ordering::Acquire) != revision {
            tracing::debug!(
                target: "appshell.theme",
                stage = "theme.persist.superseded",
                preference = %preference
            );
            return;
        }

        match self.storage.set(THEME_KEY, preference.as_str()).await {
            Ok(()) => tracing::debug!(
                target: "appshell.theme",
                stage = "theme.persist.ok",
                backend = self.storage.name(),
                preference = %preference
            ),
            Err(e) => tracing::error!(
                target: "appshell.theme",
                stage = "theme.persist.failed",
                backend = self.storage.name(),
                error = %e,
                "failed to persist theme preference"
            ),
        }
    }

    fn on_appearance_change(&self, os: Option<ColorScheme>) {
        let mut preference = ThemePreference::FollowSystem;
        let updated = self.state.send_if_modified(|state| {
            preference = state.preference;
            if preference != ThemePreference::FollowSystem {
                return false;
            }
            state.color_scheme = resolve_scheme(preference, os);
            state.updated_at = Utc::now();
            true
        });

        if updated {
            tracing::info!(
                target: "appshell.theme",
                stage = "theme.os.applied",
                os = ?os,
                "system color scheme changed, active scheme updated"
            );
        } else {
            tracing::debug!(
                target: "appshell.theme",
                stage = "theme.os.ignored",
                os = ?os,
                preference = %preference,
                "system color scheme changed, explicit preference kept"
            );
        }
    }
}

async fn listen_appearance(inner: Weak<ThemeStoreInner>, mut rx: AppearanceReceiver) {
    while rx.changed().await.is_ok() {
        let os = *rx.borrow_and_update();
        let Some(inner) = inner.upgrade() else {
            break;
        };
        inner.on_appearance_change(os);
    }
}

fn lock_listener(
    listener: &Mutex<Option<ListenerGuard>>,
) -> std::sync::MutexGuard<'_, Option<ListenerGuard>> {
    match listener.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
