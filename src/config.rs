use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
    pub table: String,
}

/// Connection settings that were actually present at request time.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    pub base_url: &'a str,
    pub api_key: &'a str,
    pub table: &'a str,
}

impl Settings {
    /// Loads defaults, then `config/default.yaml` if present, then `APP_*` env vars.
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let settings: Settings = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        debug!(
            host = %settings.server.host,
            port = settings.server.port,
            table = %settings.supabase.table,
            url_set = settings.supabase.url.is_some(),
            key_set = settings.supabase.anon_key.is_some(),
            "Loaded settings"
        );

        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SupabaseConfig {
    pub fn connection(&self) -> Result<Connection<'_>> {
        let base_url = present(&self.url)
            .ok_or_else(|| Error::Config("supabase.url is not set".to_string()))?;
        let api_key = present(&self.anon_key)
            .ok_or_else(|| Error::Config("supabase.anon_key is not set".to_string()))?;

        Ok(Connection {
            base_url: base_url.trim_end_matches('/'),
            api_key,
            table: &self.table,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("supabase.table", "vendors")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let file = write_yaml("supabase:\n  url: https://demo.supabase.co\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(settings.supabase.table, "vendors");
        assert!(settings.supabase.anon_key.is_none());
    }

    #[test]
    fn connection_requires_url_and_key() {
        let file = write_yaml("supabase:\n  url: https://demo.supabase.co/\n");
        let settings = Settings::from_file(file.path()).unwrap();

        let err = settings.supabase.connection().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("anon_key"));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let file = write_yaml("supabase:\n  url: \"  \"\n  anon_key: key\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert!(matches!(settings.supabase.connection(), Err(Error::Config(_))));
    }

    #[test]
    fn connection_trims_trailing_slash() {
        let file = write_yaml(
            "server:\n  port: 8080\nsupabase:\n  url: https://demo.supabase.co/\n  anon_key: public-anon\n  table: listings\n",
        );
        let settings = Settings::from_file(file.path()).unwrap();
        let connection = settings.supabase.connection().unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            connection,
            Connection {
                base_url: "https://demo.supabase.co",
                api_key: "public-anon",
                table: "listings",
            }
        );
    }
}
