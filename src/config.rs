use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InvoiceError, Result};

/// Fixed config file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_COMPANY_NAME: &str = "Default Company";
pub const DEFAULT_COMPANY_ADDRESS: &str = "Default Address";
pub const DEFAULT_INVOICE_PREFIX: &str = "INV";

/// Persisted company details and the last issued invoice number.
/// Absent fields fall back to their defaults when the file is read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_company_address")]
    pub company_address: String,
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    #[serde(default)]
    pub last_invoice_number: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            company_address: default_company_address(),
            invoice_prefix: default_invoice_prefix(),
            last_invoice_number: 0,
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the stored values.
    pub fn with_overrides(
        mut self,
        company_name: Option<String>,
        company_address: Option<String>,
        invoice_prefix: Option<String>,
    ) -> Self {
        if let Some(name) = company_name {
            self.company_name = name;
        }
        if let Some(address) = company_address {
            self.company_address = address;
        }
        if let Some(prefix) = invoice_prefix {
            self.invoice_prefix = prefix;
        }
        self
    }
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

fn default_company_address() -> String {
    DEFAULT_COMPANY_ADDRESS.to_string()
}

fn default_invoice_prefix() -> String {
    DEFAULT_INVOICE_PREFIX.to_string()
}

/// Reads and writes the config file. Writes are plain overwrites with
/// no locking; concurrent instances race on this file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config file (all defaults if it doesn't exist yet).
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Serialize all four fields and overwrite the file.
    pub fn save(&self, config: &Config) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
