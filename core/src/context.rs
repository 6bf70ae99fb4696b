//! 组合根：从配置构建存储/外观服务，并持有两个状态 store。

use std::sync::Arc;
use tokio::sync::watch;

use crate::appearance::AppearanceSource;
use crate::config::AppConfig;
use crate::session::{SessionState, SessionStore};
use crate::shell::ShellView;
use crate::storage::{KeyValueStore, SecureStore};
use crate::theme::{ThemeState, ThemeStore};

#[derive(Clone)]
pub struct Services {
    pub general: Arc<dyn KeyValueStore>,
    pub secure: Arc<dyn SecureStore>,
    pub appearance: Arc<dyn AppearanceSource>,
}

#[async_trait::async_trait]
pub trait ServicesFactory: Send + Sync {
    async fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services: Services,
    theme: ThemeStore,
    session: SessionStore,
}

impl AppContext {
    pub async fn new(cfg: AppConfig, factory: &dyn ServicesFactory) -> anyhow::Result<Self> {
        let services = factory.build_services(&cfg).await?;
        Ok(Self::from_services(cfg, services))
    }

    pub fn from_services(cfg: AppConfig, services: Services) -> Self {
        tracing::debug!(
            general = services.general.name(),
            secure = services.secure.name(),
            appearance = services.appearance.name(),
            "services ready"
        );
        let theme = ThemeStore::new(services.general.clone(), services.appearance.clone());
        let session = SessionStore::new(services.secure.clone());
        Self {
            cfg,
            services,
            theme,
            session,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// 启动时调用一次：两个 store 的初始化并发进行
    #[tracing::instrument(name = "shell.initialize", skip(self))]
    pub async fn initialize(&self) {
        tokio::join!(self.session.initialize(), self.theme.initialize());
    }

    pub fn view(&self) -> ShellView {
        ShellView::from_states(&self.session.state(), &self.theme.state())
    }

    pub fn watch_view(&self) -> ShellViewWatcher {
        ShellViewWatcher {
            session: self.session.subscribe(),
            theme: self.theme.subscribe(),
            last: None,
        }
    }
}

/// 任一 store 变更时产出新的根视图（相同视图不重复产出）
pub struct ShellViewWatcher {
    session: watch::Receiver<SessionState>,
    theme: watch::Receiver<ThemeState>,
    last: Option<ShellView>,
}

impl ShellViewWatcher {
    pub fn current(&mut self) -> ShellView {
        let session = self.session.borrow_and_update().clone();
        let theme = self.theme.borrow_and_update().clone();
        let view = ShellView::from_states(&session, &theme);
        self.last = Some(view);
        view
    }

    /// store 全部释放后返回 `None`
    pub async fn next_view(&mut self) -> Option<ShellView> {
        loop {
            tokio::select! {
                changed = self.session.changed() => changed.ok()?,
                changed = self.theme.changed() => changed.ok()?,
            }

            let previous = self.last;
            let view = self.current();
            if previous != Some(view) {
                return Some(view);
            }
        }
    }
}
