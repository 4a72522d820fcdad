pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, CountConfig, DEFAULT_INPUT_PATH};
pub use crate::core::{counter::MovieCounter, engine::CountEngine};
pub use crate::domain::model::{Document, MovieCount};
pub use crate::utils::error::{CountError, Result};
