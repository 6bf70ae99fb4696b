//! 主题类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::appearance::ColorScheme;
use crate::error::ParsePreferenceError;

/// 用户选择的主题偏好，按 `"light" | "dark" | "system"` 持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    /// 跟随系统
    #[default]
    #[serde(rename = "system")]
    FollowSystem,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::FollowSystem => "system",
        }
    }

    /// 显式偏好对应的配色；跟随系统时为 `None`
    pub fn explicit_scheme(self) -> Option<ColorScheme> {
        match self {
            Self::Light => Some(ColorScheme::Light),
            Self::Dark => Some(ColorScheme::Dark),
            Self::FollowSystem => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::FollowSystem),
            _ => Err(ParsePreferenceError {
                kind: "theme preference",
                value: s.to_string(),
            }),
        }
    }
}

/// 主题状态快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeState {
    /// 用户偏好
    pub preference: ThemePreference,
    /// 推导出的实际配色
    pub color_scheme: ColorScheme,
    /// 最后更新时间
    pub updated_at: DateTime<Utc>,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        self.color_scheme.is_dark()
    }
}
