use crate::errors::ConfigError;
use crate::item::{Item, MonsterKube};
use crate::progression::HpGrowthPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "monster-quest.ron";

/// A kube handed to a new player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KubeConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capture_chance: f64,
}

/// Game settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub data_dir: PathBuf,
    pub art_dir: PathBuf,
    pub save_path: PathBuf,
    /// Fixed seed for reproducible runs.
    pub rng_seed: Option<u64>,
    pub hp_growth: HpGrowthPolicy,
    pub player_name: String,
    pub starting_money: i64,
    pub starter_experience: f64,
    pub starter_species: Vec<String>,
    pub starting_kubes: Vec<KubeConfig>,
    /// Wild experience is `zone base ± wild_exp_spread`.
    pub wild_exp_spread: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            art_dir: PathBuf::from("data/art"),
            save_path: PathBuf::from("saves/save.json"),
            rng_seed: None,
            hp_growth: HpGrowthPolicy::default(),
            player_name: "Sacha".to_string(),
            starting_money: 100,
            starter_experience: 1500.0,
            starter_species: vec![
                "Springleaf".to_string(),
                "Flamkip".to_string(),
                "Aquamy".to_string(),
            ],
            starting_kubes: vec![KubeConfig {
                name: "Kube".to_string(),
                description: "Captures wild monsters. Works better on weakened targets."
                    .to_string(),
                capture_chance: 11.0,
            }],
            wild_exp_spread: 20,
        }
    }
}

impl GameConfig {
    /// Load from `path` when given (it must exist), else from
    /// [`DEFAULT_CONFIG_FILE`] if present, else use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    log::info!("no {} found, using default settings", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded settings from {}", path.display());
        Ok(config)
    }

    /// The bag a new player starts with. Item ids follow list order.
    pub fn starting_bag(&self) -> Vec<Item> {
        self.starting_kubes
            .iter()
            .enumerate()
            .map(|(index, kube)| {
                Item::Kube(MonsterKube {
                    id: index as u32 + 1,
                    name: kube.name.clone(),
                    description: kube.description.clone(),
                    capture_chance: kube.capture_chance,
                })
            })
            .collect()
    }
}
