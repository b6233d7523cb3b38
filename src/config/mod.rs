//! Configuration module for Sentiscore
//!
//! This module handles:
//! - Lexicon and intensifier overrides (sentiscore.toml)
//! - User-level fallback config (~/.config/sentiscore/config.toml)
//! - CLI output defaults

mod project_config;

pub use project_config::{
    init_config,
    load_config,
    load_config_file,
    user_config_path,
    LexiconOverrides,
    OutputDefaults,
    ScorerConfig,
    CONFIG_FILE_NAME,
};
