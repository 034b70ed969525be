use crate::configuration::constants::common::{DEFAULT_BACKEND_URL, ENV_PREFIX};
use crate::error::Result;
use config::{Config, Environment, File};
use serde_derive::Deserialize;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub backend_url: String,
}

impl Settings {
    /// Defaults, then the optional settings file, then `KCI_*` variables.
    pub fn load(file: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::new();
        config.set_default("backend_url", DEFAULT_BACKEND_URL)?;
        if let Some(path) = file {
            config.merge(File::from(path.clone()))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;

        let settings: Settings = config.try_into()?;
        settings.backend()?;
        Ok(settings)
    }

    pub fn backend(&self) -> Result<Url> {
        Ok(Url::parse(&self.backend_url)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
        }
    }
}
