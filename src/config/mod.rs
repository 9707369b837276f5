//! JSON configuration for the command-line tool.

pub mod edge;

pub use edge::{load_config, EdgeOutputConfig, EdgeToolConfig};
