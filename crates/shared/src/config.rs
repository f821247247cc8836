//! Machine configuration management.

use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// ATM configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AtmConfig {
    /// Machine-level settings.
    #[serde(default)]
    pub machine: MachineConfig,
    /// Initial cash reserve.
    #[serde(default)]
    pub deposit: DepositConfig,
}

/// Machine-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// The single currency this machine dispenses.
    #[serde(default)]
    pub currency: Currency,
    /// How banknotes are chosen for a withdrawal.
    #[serde(default)]
    pub strategy: SelectionStrategy,
}

/// How the dispenser picks banknotes for a requested amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Largest denomination first, as many notes as available and needed.
    #[default]
    Greedy,
    /// Exact search for the breakdown with the fewest notes.
    FewestNotes,
}

/// Initial cash reserve, loaded at start-up or on refill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DepositConfig {
    /// Currency of the reserve. Falls back to the machine currency when absent.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Note counts per denomination.
    #[serde(default)]
    pub packs: Vec<PackConfig>,
}

/// A configured `(denomination, count)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PackConfig {
    /// Face value of the note.
    pub denomination: u32,
    /// Number of notes loaded.
    pub count: u32,
}

impl AtmConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ATM").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Currency of the configured reserve.
    #[must_use]
    pub fn deposit_currency(&self) -> Currency {
        self.deposit.currency.unwrap_or(self.machine.currency)
    }
}
