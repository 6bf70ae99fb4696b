use appshell_core::api::{
    AppearanceError, AppearanceFeed, AppearanceReceiver, AppearanceSource, ColorScheme,
};

/// Constant OS report, changed only through [`FixedAppearance::notify`].
pub struct FixedAppearance {
    feed: AppearanceFeed,
}

impl FixedAppearance {
    pub fn new(scheme: Option<ColorScheme>) -> Self {
        Self {
            feed: AppearanceFeed::new(scheme),
        }
    }

    pub fn notify(&self, scheme: Option<ColorScheme>) {
        self.feed.notify(scheme);
    }
}

impl AppearanceSource for FixedAppearance {
    fn name(&self) -> &str {
        "fixed"
    }

    fn color_scheme(&self) -> Option<ColorScheme> {
        self.feed.current()
    }

    fn subscribe(&self) -> Result<AppearanceReceiver, AppearanceError> {
        self.feed.subscribe()
    }
}
