use super::feed::AppearanceReceiver;
use super::types::ColorScheme;
use crate::error::AppearanceError;

/// OS 外观通知来源。
///
/// 只允许一个订阅者：第二次 `subscribe` 返回 `AppearanceError::AlreadySubscribed`。
pub trait AppearanceSource: Send + Sync {
    fn name(&self) -> &str;

    /// 当前 OS 报告的配色，未报告时为 `None`
    fn color_scheme(&self) -> Option<ColorScheme>;

    fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError>;
}
