use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PersistenceError;

/// Runtime configuration, read from `META_*` environment variables
/// (a `.env` file is honoured by the binary through `dotenvy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    /// SQL script executed after the schema is in place, on every startup.
    /// Meant for fresh or in-memory databases; a script with explicit ids
    /// fails with a UNIQUE constraint error when replayed on an existing file.
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://meta.db".to_string(),
            loglevel: "info".to_string(),
            fixture_path: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("META_"))
    }

    pub fn load() -> Result<Self, PersistenceError> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults must extract");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.database_url, "sqlite://meta.db");
        assert!(cfg.fixture_path.is_none());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("META_DATABASE_URL", "sqlite::memory:");
            jail.set_env("META_FIXTURE_PATH", "seed.sql");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.loglevel, "info");
            assert_eq!(cfg.fixture_path, Some(PathBuf::from("seed.sql")));
            Ok(())
        });
    }
}
