//! Configuration loading
//!
//! Config files only supply defaults for CLI flags. Precedence is
//! CLI > file > built-in defaults.

pub mod loader;

pub use loader::load_config;
