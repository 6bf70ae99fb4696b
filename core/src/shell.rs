//! 应用根视图：根据会话与主题状态决定渲染什么。

use serde::Serialize;
use std::fmt;

use crate::session::SessionState;
use crate::theme::ThemeState;

/// 导航树
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigator {
    /// 已登录用户的主导航
    App,
    /// 登录/注册流程
    Auth,
}

/// 状态栏文字样式，深色配色下使用浅色文字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    LightContent,
    DarkContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView {
    /// 会话初始化完成前显示加载占位
    Loading,
    Ready {
        navigator: Navigator,
        status_bar: StatusBarStyle,
    },
}

impl ShellView {
    pub fn from_states(session: &SessionState, theme: &ThemeState) -> Self {
        if session.is_initializing {
            return Self::Loading;
        }

        let navigator = if session.is_logged_in {
            Navigator::App
        } else {
            Navigator::Auth
        };
        let status_bar = if theme.is_dark() {
            StatusBarStyle::LightContent
        } else {
            StatusBarStyle::DarkContent
        };

        Self::Ready {
            navigator,
            status_bar,
        }
    }
}

impl fmt::Display for ShellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("loading"),
            Self::Ready {
                navigator,
                status_bar,
            } => {
                let navigator = match navigator {
                    Navigator::App => "app",
                    Navigator::Auth => "auth",
                };
                let status_bar = match status_bar {
                    StatusBarStyle::LightContent => "light-content",
                    StatusBarStyle::DarkContent => "dark-content",
                };
                write!(f, "navigator={navigator} status_bar={status_bar}")
            }
        }
    }
}
