//! Configuration for solver data paths

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// internal modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Environment variable holding the default chain file
pub const CHAIN_FILE_VAR: &str = "OPENMC_CHAIN_FILE";

/// Environment variable holding the default cross section library
pub const CROSS_SECTIONS_VAR: &str = "OPENMC_CROSS_SECTIONS";

/// Default locations of solver data
///
/// This is the fallback consulted by the [Activator](crate::Activator) when a
/// path is not given to it directly. Anything given to the
/// [Activator](crate::Activator) explicitly always takes precedence.
///
/// ```rust
/// # use actools_activation::Config;
/// let config = Config::default().with_chain_file("chain_endfb71.json");
/// assert!(config.chain_file.is_some());
/// assert!(config.cross_sections.is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Decay/reaction chain file
    pub chain_file: Option<PathBuf>,
    /// Nuclear data cross section library
    pub cross_sections: Option<PathBuf>,
}

impl Config {
    /// Read the defaults from the environment
    ///
    /// Uses `OPENMC_CHAIN_FILE` and `OPENMC_CROSS_SECTIONS`, ignoring any that
    /// are unset or empty.
    pub fn from_env() -> Self {
        let config = Self {
            chain_file: env_path(CHAIN_FILE_VAR),
            cross_sections: env_path(CROSS_SECTIONS_VAR),
        };
        debug!("Configuration from environment: {config:?}");
        config
    }

    /// Read the defaults from a JSON file
    ///
    /// ```json
    /// {
    ///     "chain_file": "/data/chain_endfb71.json",
    ///     "cross_sections": "/data/cross_sections.xml"
    /// }
    /// ```
    ///
    /// Either key may be left out.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Set the default chain file
    pub fn with_chain_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.chain_file = Some(path.into());
        self
    }

    /// Set the default cross section library
    pub fn with_cross_sections<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cross_sections = Some(path.into());
        self
    }

    /// Resolve the chain file, preferring an `explicit` path over the config
    pub(crate) fn resolve_chain_file(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.chain_file.clone())
            .ok_or(Error::MissingChainFile {
                env_var: CHAIN_FILE_VAR,
            })
    }

    /// Resolve the cross sections, preferring an `explicit` path over the config
    pub(crate) fn resolve_cross_sections(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.cross_sections.clone())
            .ok_or(Error::MissingCrossSections {
                env_var: CROSS_SECTIONS_VAR,
            })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = Config::default().with_chain_file("from_config.json");
        let path = config
            .resolve_chain_file(Some(Path::new("explicit.json")))
            .unwrap();
        assert_eq!(path, PathBuf::from("explicit.json"));
    }

    #[test]
    fn falls_back_to_config() {
        let config = Config::default().with_cross_sections("xs.xml");
        assert_eq!(
            config.resolve_cross_sections(None).unwrap(),
            PathBuf::from("xs.xml")
        );
    }

    #[test]
    fn neither_source_is_an_error() {
        let error = Config::default().resolve_chain_file(None).unwrap_err();
        assert!(matches!(error, Error::MissingChainFile { .. }));

        // message should point at both places a user could fix it
        let message = error.to_string();
        assert!(message.contains("Activator"));
        assert!(message.contains(CHAIN_FILE_VAR));
    }

    #[test]
    fn partial_json_config() {
        let config: Config = serde_json::from_str(r#"{"chain_file": "chain.json"}"#).unwrap();
        assert_eq!(config.chain_file, Some(PathBuf::from("chain.json")));
        assert_eq!(config.cross_sections, None);
    }
}
