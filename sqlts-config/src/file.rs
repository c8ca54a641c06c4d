use std::path::Path;

use super::{Config, parse::parse_config};
use crate::Result;

/// A sqlts.toml file with its parsed configuration.
pub struct SqltsToml {
    config: Config,
}

impl SqltsToml {
    /// Open and parse a sqlts.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self { config })
    }

    /// Open `path` if it exists, otherwise fall back to the defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                config: Config::default(),
            })
        }
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sqlts.toml");
        std::fs::write(&path, "[generate]\nmodule = \"pg-pool\"\n").unwrap();

        let file = SqltsToml::open(&path).unwrap();
        assert_eq!(file.into_config().generate.module, "pg-pool");
    }

    #[test]
    fn test_open_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = SqltsToml::open(temp.path().join("sqlts.toml")).err().unwrap();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }

    #[test]
    fn test_open_or_default() {
        let temp = TempDir::new().unwrap();
        let file = SqltsToml::open_or_default(temp.path().join("sqlts.toml")).unwrap();
        assert_eq!(file.into_config(), Config::default());
    }
}
