pub mod cli;
pub mod session;
pub mod status;
pub mod theme;
