//! 单订阅者外观推送通道

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

use super::r#trait::AppearanceSource;
use super::types::ColorScheme;
use crate::error::AppearanceError;

/// 订阅端：每次 `changed()` 返回后读取最新的 OS 报告
pub type AppearanceReceiver = watch::Receiver<Option<ColorScheme>>;

/// 外观后端共用的推送通道。
///
/// 保存最近一次 OS 报告；`notify` 即使值未变化也会唤醒订阅者。
pub struct AppearanceFeed {
    tx: watch::Sender<Option<ColorScheme>>,
    subscribed: AtomicBool,
}

impl AppearanceFeed {
    pub fn new(initial: Option<ColorScheme>) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            tx,
            subscribed: AtomicBool::new(false),
        }
    }

    /// 推送一次 OS 外观变更
    pub fn notify(&self, scheme: Option<ColorScheme>) {
        tracing::debug!(
            target: "appshell.appearance",
            stage = "appearance.feed.notify",
            scheme = ?scheme
        );
        self.tx.send_replace(scheme);
    }

    pub fn current(&self) -> Option<ColorScheme> {
        *self.tx.borrow()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed.load(Ordering::Acquire)
    }

    /// 仍然存活的订阅端数量，订阅者释放后归零
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError> {
        if self.subscribed.swap(true, Ordering::AcqRel) {
            return Err(AppearanceError::AlreadySubscribed);
        }
        Ok(self.tx.subscribe())
    }
}

impl Default for AppearanceFeed {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppearanceSource for AppearanceFeed {
    fn name(&self) -> &str {
        "feed"
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        self.current()
    }

    fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError> {
        AppearanceFeed::subscribe(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_subscription_rejected() {
        let feed = AppearanceFeed::new(Some(ColorScheme::Light));
        assert!(feed.subscribe().is_ok());
        assert!(matches!(
            feed.subscribe(),
            Err(AppearanceError::AlreadySubscribed)
        ));
    }

    #[tokio::test]
    async fn test_notify_wakes_subscriber() {
        let feed = AppearanceFeed::new(Some(ColorScheme::Light));
        let mut rx = feed.subscribe().unwrap();

        feed.notify(Some(ColorScheme::Dark));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(ColorScheme::Dark));
        assert_eq!(feed.current(), Some(ColorScheme::Dark));

        // 相同的值也要唤醒
        feed.notify(Some(ColorScheme::Dark));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_notify_without_subscriber() {
        let feed = AppearanceFeed::default();
        feed.notify(Some(ColorScheme::Dark));
        assert_eq!(feed.current(), Some(ColorScheme::Dark));
        assert!(!feed.is_subscribed());
        assert_eq!(feed.receiver_count(), 0);
    }

    #[test]
    fn test_receiver_count_tracks_drop() {
        let feed = AppearanceFeed::default();
        let rx = feed.subscribe().unwrap();
        assert_eq!(feed.receiver_count(), 1);
        drop(rx);
        assert_eq!(feed.receiver_count(), 0);
    }
}
