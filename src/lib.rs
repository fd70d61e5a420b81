pub mod app;
pub mod budget;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod icons;
pub mod launch;
pub mod recommend;
pub mod search;

pub use error::{Result, S24Error};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
