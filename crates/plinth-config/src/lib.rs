//! Application bootstrap configuration for Plinth.
//!
//! This crate turns a JSON settings file into a ready-to-use [`Config`]:
//!
//! 1. parse and validate the document (atomically — nothing touches the
//!    filesystem until the whole document is valid);
//! 2. resolve every `paths` entry to an absolute directory and create it;
//! 3. derive and activate the `tracing` logger described by the `logging`
//!    section, injecting a log file path under `logs_dir` when the file
//!    sink has none.
//!
//! The resulting `Config` is immutable. Construct it once at process start
//! and pass it explicitly (usually as `Arc<Config>`) to every component
//! that needs it; there is no ambient global lookup.
//!
//! ```no_run
//! use std::path::Path;
//! use plinth_config::Config;
//!
//! let config = Config::load(Path::new("settings.json"))?;
//! let raw_dir = config.get_path("raw_data_dir")?;
//! config.logger().info("application started");
//! # Ok::<(), plinth_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod settings;

// Re-export primary types at crate root for ergonomic imports.
pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use logging::Logger;
pub use settings::{AppSection, ConsoleSink, ConsoleStyle, FileSink, LogLevel, LogSettings, Settings};
