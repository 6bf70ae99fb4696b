use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AppearanceError {
    #[error("appearance source already has a subscriber")]
    AlreadySubscribed,
    #[error("appearance backend error: {0}")]
    Backend(String),
}

/// 会话写入/删除失败，必须上抛给调用方
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("credential store failed: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised {kind} value: {value:?}")]
pub struct ParsePreferenceError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("appearance error: {0}")]
    Appearance(#[from] AppearanceError),
    #[error("invalid usage: {0}")]
    Usage(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
