use appshell_core::api::{AppContext, CliError, SessionToken, User};

use super::cli::LoginArgs;

pub async fn run_login(args: LoginArgs, ctx: &AppContext) -> Result<i32, CliError> {
    let token = SessionToken::new(args.token);
    if token.is_empty() {
        return Err(CliError::Usage("token must not be empty".into()));
    }
    let user = User {
        id: args.id,
        name: args.name,
        email: args.email,
    };

    ctx.session().login(token, user).await?;
    if let Some(user) = ctx.session().user() {
        println!("logged in as {} <{}>", user.name, user.email);
    }
    Ok(0)
}

pub async fn run_logout(ctx: &AppContext) -> Result<i32, CliError> {
    ctx.session().logout().await?;
    println!("logged out");
    Ok(0)
}
