pub mod env;
pub mod file;
pub mod fixed;

pub use env::{parse_colorfgbg, EnvAppearance};
pub use file::FileAppearance;
pub use fixed::FixedAppearance;
