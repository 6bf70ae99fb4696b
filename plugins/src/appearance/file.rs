//! Appearance read from a file holding `light` or `dark`, polled for changes.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::time::Duration;

use appshell_core::api::{
    AppearanceError, AppearanceFeed, AppearanceReceiver, AppearanceSource, ColorScheme,
};

pub struct FileAppearance {
    path: PathBuf,
    feed: AppearanceFeed,
}

impl FileAppearance {
    /// Reads the initial report and starts polling. Must be called inside a tokio runtime.
    /// Polling stops once the returned handle and all its clones are dropped.
    pub fn start(path: impl Into<PathBuf>, poll_interval: Duration) -> Arc<Self> {
        let path = path.into();
        let initial = read_scheme_blocking(&path);
        let source = Arc::new(Self {
            path,
            feed: AppearanceFeed::new(initial),
        });
        tokio::spawn(poll(Arc::downgrade(&source), poll_interval));
        source
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn refresh(&self) {
        let scheme = read_scheme(&self.path).await;
        if scheme != self.feed.current() {
            tracing::info!(
                target: "appshell.appearance",
                stage = "appearance.file.changed",
                path = %self.path.display(),
                scheme = ?scheme
            );
            self.feed.notify(scheme);
        }
    }
}

async fn poll(source: Weak<FileAppearance>, poll_interval: Duration) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // 第一次 tick 立即返回，初始值已在构造时读取
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let Some(source) = source.upgrade() else {
            break;
        };
        source.refresh().await;
    }
}

fn parse_scheme(path: &Path, content: &str) -> Option<ColorScheme> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    match content.parse::<ColorScheme>() {
        Ok(scheme) => Some(scheme),
        Err(e) => {
            tracing::debug!(
                target: "appshell.appearance",
                stage = "appearance.file.parse",
                path = %path.display(),
                error = %e
            );
            None
        }
    }
}

fn read_scheme_blocking(path: &Path) -> Option<ColorScheme> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_scheme(path, &content)
}

async fn read_scheme(path: &Path) -> Option<ColorScheme> {
    let content = tokio::fs::read_to_string(path).await.ok()?;
    parse_scheme(path, &content)
}

impl AppearanceSource for FileAppearance {
    fn name(&self) -> &str {
        "file"
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        self.feed.current()
    }

    fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError> {
        self.feed.subscribe()
    }
}
