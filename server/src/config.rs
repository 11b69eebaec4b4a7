use duelsweep_core::{BoardConfig, CellCount, Coord};
use duelsweep_protocol::Visibility;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ServerConfig {
    pub board: BoardConfig,
    /// Send the whole mine layout with every board instead of redacting hidden cells.
    pub reveal_layout: bool,
    /// Fixed seed for board generation and session ids; random when absent.
    pub seed: Option<u64>,
}

/// Command line values that take precedence over the configuration file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub size: Option<Coord>,
    pub mines: Option<CellCount>,
    /// Can only switch the full layout on.
    pub reveal_layout: bool,
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `overrides` and validates the merged board.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(size) = overrides.size {
            self.board.size = size;
        }
        if let Some(mines) = overrides.mines {
            self.board.mines = mines;
        }
        self.reveal_layout |= overrides.reveal_layout;
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        Ok(())
    }

    pub fn visibility(&self) -> Visibility {
        if self.reveal_layout {
            Visibility::Full
        } else {
            Visibility::Redacted
        }
    }
}
