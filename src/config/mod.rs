//! Configuration management for the static host

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// Load from `styleswitch.{toml,json,yaml}` in the working directory plus environment.
pub fn load_config() -> Result<Config> {
    load_config_from(Path::new("styleswitch"))
}

/// Load with `base` as the config file stem (extension is probed).
pub fn load_config_from(base: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("bind_address", default_bind_address())?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&base.to_string_lossy()).required(false))
        // Override with environment variables (STYLESWITCH_PORT, STYLESWITCH_BIND_ADDRESS)
        .add_source(
            ::config::Environment::with_prefix("STYLESWITCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("STYLESWITCH_PORT");
        std::env::remove_var("STYLESWITCH_BIND_ADDRESS");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("styleswitch")).unwrap();
        assert_eq!(
            config,
            Config {
                port: 8080,
                bind_address: "0.0.0.0".to_string(),
            }
        );
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("styleswitch.toml"),
            "port = 7000\nbind_address = \"127.0.0.1\"\n",
        )
        .unwrap();

        let config = load_config_from(&dir.path().join("styleswitch")).unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.bind_address, "127.0.0.1");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("styleswitch.toml"), "port = 7000\n").unwrap();
        std::env::set_var("STYLESWITCH_PORT", "9090");

        let config = load_config_from(&dir.path().join("styleswitch"));
        clear_env();

        assert_eq!(config.unwrap().port, 9090);
    }
}
