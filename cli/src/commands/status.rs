use appshell_core::api::{AppContext, CliError};

use super::cli::StatusArgs;

pub async fn run_status(args: &StatusArgs, ctx: &AppContext) -> Result<i32, CliError> {
    ctx.initialize().await;

    let view = ctx.view();
    let session = ctx.session().state();
    let theme = ctx.theme().state();

    if args.json {
        let out = serde_json::json!({
            "view": view,
            "session": session,
            "theme": theme,
        });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| CliError::Command(format!("encode status failed: {e}")))?;
        println!("{text}");
        return Ok(0);
    }

    println!("view:     {view}");
    println!(
        "session:  {:?} (logged_in={})",
        session.status, session.is_logged_in
    );
    if let Some(user) = &session.user {
        println!("user:     {} <{}> id={}", user.name, user.email, user.id);
    }
    println!(
        "theme:    preference={} scheme={}",
        theme.preference, theme.color_scheme
    );
    Ok(0)
}

pub async fn run_watch(ctx: &AppContext) -> Result<i32, CliError> {
    let mut watcher = ctx.watch_view();
    ctx.initialize().await;
    println!("{}", watcher.current());

    loop {
        tokio::select! {
            view = watcher.next_view() => match view {
                Some(view) => println!("{view}"),
                None => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::debug!("watch interrupted");
                break;
            }
        }
    }
    Ok(0)
}
