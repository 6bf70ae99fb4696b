//! Fixed storage keys shared by the stores and the backends.

/// General key-value storage key holding `"light" | "dark" | "system"`.
pub const THEME_KEY: &str = "theme_preference";

/// Secure credential storage key holding the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
