use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// How per-meal protein shares are allocated. The source data's meal
/// table over-allocates protein (shares sum to 110%); faithful mode
/// reproduces that, normalized mode rescales shares to sum to 100%.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealSplit {
    #[default]
    Faithful,
    Normalized,
}

impl std::fmt::Display for MealSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faithful => write!(f, "faithful"),
            Self::Normalized => write!(f, "normalized"),
        }
    }
}

impl FromStr for MealSplit {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "faithful" => Ok(Self::Faithful),
            "normalized" => Ok(Self::Normalized),
            _ => anyhow::bail!(
                "invalid meal split mode: {} (expected faithful/normalized)",
                s
            ),
        }
    }
}

/// Which height feeds the Mifflin-St Jeor BMR. The original calculator
/// ignored the profile height and assumed 175 cm (male) / 165 cm
/// (everyone else); actual mode uses the profile's height instead.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrHeight {
    #[default]
    Assumed,
    Actual,
}

impl std::fmt::Display for BmrHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assumed => write!(f, "assumed"),
            Self::Actual => write!(f, "actual"),
        }
    }
}

impl FromStr for BmrHeight {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "assumed" => Ok(Self::Assumed),
            "actual" => Ok(Self::Actual),
            _ => anyhow::bail!("invalid bmr height mode: {} (expected assumed/actual)", s),
        }
    }
}

/// Policy flags consumed by the nutrition generator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub meal_split: MealSplit,
    #[serde(default)]
    pub bmr_height: BmrHeight,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                std::fs::set_permissions(&path, perms)?;
            }
        }
        Ok(())
    }

    /// Apply a dotted-key update, e.g. `generator.meal_split normalized`.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "generator.meal_split" => self.generator.meal_split = value.parse()?,
            "generator.bmr_height" => self.generator.bmr_height = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("ATHENIX_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .expect("cannot resolve home directory")
            .join(".athenix")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
