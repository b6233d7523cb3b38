//! Scorer configuration support
//!
//! Loads lexicon and intensifier overrides from `sentiscore.toml` in the
//! working directory, falling back to the user config directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # sentiscore.toml
//!
//! [lexicon]
//! positive = ["stellar", "snappy"]
//! negative = ["meh"]
//! neutral = ["alright"]
//! remove = ["hard"]   # applied before the additions above
//!
//! [intensifiers]
//! super = 1.6
//! "kind of" = 0.5
//!
//! [output]
//! format = "json"
//! no_emoji = true
//! ```

use crate::error::{ConfigError, LexiconError};
use crate::lexicon::{IntensifierTable, Lexicon, LexiconBuilder, Polarity};
use crate::scorer::SentimentScorer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "sentiscore.toml";

const EXAMPLE_CONFIG: &str = r#"# Sentiscore Configuration
#
# Words are matched after lower-casing, one token at a time.

[lexicon]
# Extra words per polarity. A word may only belong to one list.
# positive = ["stellar", "snappy"]
# negative = ["meh", "clunky"]
# neutral = ["alright"]

# Built-in words to drop before the additions are applied
# remove = ["hard"]

[intensifiers]
# Multiplier applied to a sentiment word up to two tokens later.
# Negative values flip polarity. Zero is not allowed.
# super = 1.6
# scarcely = -0.6

[output]
# format = "text"   # text, json
# no_emoji = false
"#;

/// Full configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub lexicon: LexiconOverrides,

    /// Intensifier factors, added to or replacing the built-ins
    #[serde(default)]
    pub intensifiers: BTreeMap<String, f64>,

    #[serde(default)]
    pub output: OutputDefaults,
}

/// `[lexicon]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LexiconOverrides {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

/// `[output]` section, CLI flags take precedence
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputDefaults {
    pub format: Option<String>,
    pub no_emoji: Option<bool>,
}

impl ScorerConfig {
    /// Built-in lexicon with this config's removals and additions applied
    pub fn build_lexicon(&self) -> Result<Lexicon, LexiconError> {
        let mut builder = LexiconBuilder::from_defaults();
        for word in &self.lexicon.remove {
            builder.remove(word);
        }

        let additions = [
            (&self.lexicon.positive, Polarity::Positive),
            (&self.lexicon.negative, Polarity::Negative),
            (&self.lexicon.neutral, Polarity::Neutral),
        ];
        for (words, polarity) in additions {
            builder.extend(words.iter().map(String::as_str), polarity)?;
        }

        Ok(builder.build())
    }

    pub fn build_intensifiers(&self) -> Result<IntensifierTable, LexiconError> {
        IntensifierTable::with_overrides(
            self.intensifiers
                .iter()
                .map(|(word, factor)| (word.as_str(), *factor)),
        )
    }

    pub fn build_scorer(&self) -> Result<SentimentScorer, LexiconError> {
        Ok(SentimentScorer::new(
            self.build_lexicon()?,
            self.build_intensifiers()?,
        ))
    }
}

/// Path of the user-level config, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sentiscore").join("config.toml"))
}

/// Discover configuration for `dir`.
///
/// Tries `dir/sentiscore.toml`, then the user config. Files that fail to
/// parse are skipped with a warning. Returns defaults when nothing loads.
pub fn load_config(dir: &Path) -> ScorerConfig {
    let candidates = std::iter::once(dir.join(CONFIG_FILE_NAME)).chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("{}", e);
            }
        }
    }

    debug!("No config found, using defaults");
    ScorerConfig::default()
}

/// Load a specific config file. Missing or malformed files are errors.
pub fn load_config_file(path: &Path) -> Result<ScorerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a commented example config to `path`.
///
/// Returns `false` without touching the file if it already exists.
pub fn init_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, EXAMPLE_CONFIG).map_err(io_err)?;
    Ok(true)
}
