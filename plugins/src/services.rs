//! ServicesFactory 实现：从配置构建存储与外观后端，供 CLI 复用。
use appshell_core::api::{AppConfig, Services, ServicesFactory};
use async_trait::async_trait;

use crate::factory;

#[derive(Default)]
pub struct PluginServicesFactory;

#[async_trait]
impl ServicesFactory for PluginServicesFactory {
    async fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services> {
        let (general, secure) = factory::build_storage(cfg)?;
        let appearance = factory::build_appearance(cfg)?;
        Ok(Services {
            general,
            secure,
            appearance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appshell_core::api::{
        AppContext, AppearanceConfig, ColorScheme, FixedAppearanceConfig, Navigator, ShellView,
        StatusBarStyle, StorageConfig, ThemePreference,
    };

    #[tokio::test]
    async fn test_context_over_memory_backends() {
        let cfg = AppConfig {
            storage: StorageConfig::Memory,
            appearance: AppearanceConfig::Fixed(FixedAppearanceConfig {
                scheme: Some(ColorScheme::Dark),
            }),
            ..AppConfig::default()
        };
        let ctx = AppContext::new(cfg, &PluginServicesFactory).await.unwrap();
        ctx.initialize().await;

        assert_eq!(ctx.theme().preference(), ThemePreference::FollowSystem);
        assert_eq!(
            ctx.view(),
            ShellView::Ready {
                navigator: Navigator::Auth,
                status_bar: StatusBarStyle::LightContent,
            }
        );
    }
}
