//! Config parsing from strings.

use std::str::FromStr;

use super::{Config, DEFAULT_CONFIG_FILE};
use crate::{Error, Result};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, DEFAULT_CONFIG_FILE)
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_config(&config, content, filename)?;
    Ok(config)
}

fn validate_config(config: &Config, src: &str, filename: &str) -> Result<()> {
    if config.generate.module.trim().is_empty() {
        return Err(Error::validation(
            "generate.module must not be empty",
            src,
            filename,
            Some("module"),
        ));
    }

    for (db_type, ts_type) in &config.types {
        if ts_type.trim().is_empty() {
            return Err(Error::validation(
                format!("type override for '{}' must not be empty", db_type),
                src,
                filename,
                Some(db_type.as_str()),
            ));
        }
    }

    Ok(())
}
