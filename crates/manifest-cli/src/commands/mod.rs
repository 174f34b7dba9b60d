//! Command implementations for manifest-cli

pub mod clean;
pub mod generate;

pub use clean::run_clean;
pub use generate::run_generate;
