pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryConsole, StdoutConsole};
pub use crate::core::bridge::BridgeDemo;
pub use domain::model::{Mechanism, Pairing, Species};
pub use utils::error::{BridgeError, Result};
