use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_typing_millis")]
    pub typing_millis: u64,
    #[serde(default = "default_reply_millis")]
    pub reply_millis: u64,
    #[serde(default = "default_reply_cap")]
    pub reply_cap: usize,
}

impl Config {
    /// Loads the config file.
    ///
    /// The frontend has no file system of its own, so the config is packaged
    /// into the binary with include_str. build.rs creates the file when it is
    /// missing, and an empty file falls back to the serde defaults.
    pub fn load() -> Self {
        let config_str = include_str!("../../config.toml");
        toml::from_str(config_str).unwrap()
    }
}

fn default_typing_millis() -> u64 {
    2500
}

fn default_reply_millis() -> u64 {
    500
}

fn default_reply_cap() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            typing_millis: default_typing_millis(),
            reply_millis: default_reply_millis(),
            reply_cap: default_reply_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.typing_millis, 2500);
        assert_eq!(config.reply_millis, 500);
        assert_eq!(config.reply_cap, 10);
    }
}
