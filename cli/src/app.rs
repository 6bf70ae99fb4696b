//! CLI 应用装配层：在各子命令之间分发。
use appshell_core::api::{AppContext, CliError};

use crate::commands::cli::{Args, Commands};
use crate::commands::{session, status, theme};

#[tracing::instrument(name = "cli.dispatch", skip(args, ctx))]
pub async fn dispatch(args: Args, ctx: &AppContext) -> Result<i32, CliError> {
    match args.command {
        Commands::Status(status_args) => status::run_status(&status_args, ctx).await,
        Commands::Theme(theme_cmd) => theme::run_theme(&theme_cmd, ctx).await,
        Commands::Login(login_args) => session::run_login(login_args, ctx).await,
        Commands::Logout => session::run_logout(ctx).await,
        Commands::Watch => status::run_watch(ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appshell_core::api::{AppConfig, StorageConfig, ThemePreference};
    use appshell_plugins::services::PluginServicesFactory;
    use clap::Parser;

    async fn memory_context() -> AppContext {
        let cfg = AppConfig {
            storage: StorageConfig::Memory,
            ..AppConfig::default()
        };
        AppContext::new(cfg, &PluginServicesFactory).await.unwrap()
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let ctx = memory_context().await;

        let args = Args::try_parse_from([
            "appshell", "login", "--token", "tok", "--id", "7", "--name", "B", "--email", "b@x",
        ])
        .unwrap();
        assert_eq!(dispatch(args, &ctx).await.unwrap(), 0);
        assert!(ctx.session().is_logged_in());

        let args = Args::try_parse_from(["appshell", "logout"]).unwrap();
        assert_eq!(dispatch(args, &ctx).await.unwrap(), 0);
        assert!(!ctx.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_empty_token_rejected() {
        let ctx = memory_context().await;
        let args = Args::try_parse_from([
            "appshell", "login", "--token", " ", "--id", "7", "--name", "B", "--email", "b@x",
        ])
        .unwrap();
        assert!(matches!(
            dispatch(args, &ctx).await,
            Err(CliError::Usage(_))
        ));
    }

    #[tokio::test]
    async fn test_theme_set() {
        let ctx = memory_context().await;
        let args = Args::try_parse_from(["appshell", "theme", "set", "dark"]).unwrap();
        assert_eq!(dispatch(args, &ctx).await.unwrap(), 0);
        assert_eq!(ctx.theme().preference(), ThemePreference::Dark);
    }
}
