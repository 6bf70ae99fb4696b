//! Appearance derived from the terminal's `COLORFGBG` ("fg;bg" or "fg;default;bg").

use appshell_core::api::{
    AppearanceError, AppearanceFeed, AppearanceReceiver, AppearanceSource, ColorScheme,
};

pub struct EnvAppearance {
    feed: AppearanceFeed,
}

impl EnvAppearance {
    pub fn from_env() -> Self {
        let scheme = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| parse_colorfgbg(&v));
        tracing::debug!(
            target: "appshell.appearance",
            stage = "appearance.env.detect",
            scheme = ?scheme
        );
        Self::with_scheme(scheme)
    }

    pub fn with_scheme(scheme: Option<ColorScheme>) -> Self {
        Self {
            feed: AppearanceFeed::new(scheme),
        }
    }
}

/// Background index 7 and 9..=15 are light, 0..=6 and 8 are dark.
pub fn parse_colorfgbg(value: &str) -> Option<ColorScheme> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match bg {
        7 | 9..=15 => Some(ColorScheme::Light),
        0..=6 | 8 => Some(ColorScheme::Dark),
        _ => None,
    }
}

impl AppearanceSource for EnvAppearance {
    fn name(&self) -> &str {
        "env"
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        self.feed.current()
    }

    fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError> {
        self.feed.subscribe()
    }
}
