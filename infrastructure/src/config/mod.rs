//! Configuration file loading for diabetes-risk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `DIABETES_RISK_<SECTION>__<KEY>`
//! 3. Project root: `./risk.toml` or `./.risk.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/diabetes-risk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileArtifactsConfig, FileConfig, FileEncoderConfig, FileFormConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
