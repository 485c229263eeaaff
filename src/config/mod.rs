use std::path::{Path, PathBuf};

use config::File;
use directories::BaseDirs;
use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use crate::gacha::RandomSource;

const CONFIG_FILE: &str = "nemui-gacha.toml";

/// Loads the config from the user config directory, falling back to defaults.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("No user config directory\nUsing default config");
            Config::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config file at {:?}", path);
        return Config::default();
    }
    match config::Config::builder()
        .add_source(File::from(path))
        .build()
    {
        Ok(c) => match c.try_deserialize() {
            Ok(config) => config,
            Err(e) => {
                warn!("Incompatible configuration: {:?}\nUsing default config", e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("Failed to load config file: {:?}\nUsing default config", e);
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        let mut path = dirs.config_dir().to_path_buf();
        path.push(CONFIG_FILE);
        path
    })
}

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Always answer with the negative form.
    #[serde(default)]
    pub force_negative: bool,
    /// Seed for reproducible draws. Unset uses the thread rng.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        }
    }
}
