use clap::{Args as ClapArgs, Parser, Subcommand};

use appshell_core::api::ThemePreference;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::System => ThemePreference::FollowSystem,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "appshell", version, about = "Theme and session state for the app shell")]
pub struct Args {
    /// Config file to use instead of ~/.appshell/config.toml or ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ThemeSetArgs {
    #[arg(value_enum)]
    pub preference: ThemeArg,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommand {
    /// Print the stored preference and the resolved scheme.
    Get,
    /// Store a new preference.
    Set(ThemeSetArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct LoginArgs {
    /// Session token; prefer APPSHELL_TOKEN so it stays out of shell history.
    #[arg(long, env = "APPSHELL_TOKEN", hide_env_values = true)]
    pub token: String,

    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialise both stores and print what the shell would render.
    Status(StatusArgs),
    #[command(subcommand)]
    Theme(ThemeCommand),
    Login(LoginArgs),
    Logout,
    /// Print the shell view on every change until Ctrl-C.
    Watch,
}
