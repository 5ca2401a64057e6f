//! Version command.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// "triluna 0.3.0"
pub fn version_line() -> String {
    format!("triluna {}", VERSION)
}
