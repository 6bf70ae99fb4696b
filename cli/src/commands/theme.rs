use appshell_core::api::{AppContext, CliError, ThemePreference};

use super::cli::ThemeCommand;

pub async fn run_theme(cmd: &ThemeCommand, ctx: &AppContext) -> Result<i32, CliError> {
    let theme = ctx.theme();
    theme.initialize().await;

    match cmd {
        ThemeCommand::Get => {
            println!(
                "preference={} scheme={}",
                theme.preference(),
                theme.resolved_scheme()
            );
        }
        ThemeCommand::Set(set) => {
            let preference = ThemePreference::from(set.preference);
            // 进程即将退出，等待后台持久化结束；写入失败已在任务内记录
            theme
                .set_theme(preference)
                .await
                .map_err(|e| CliError::Command(format!("theme persistence task failed: {e}")))?;
            println!(
                "preference={} scheme={}",
                theme.preference(),
                theme.resolved_scheme()
            );
        }
    }
    Ok(0)
}
