use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "abacus.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_body_size_kb: usize,
    pub request_timeout_seconds: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size_kb: 64,
            request_timeout_seconds: 30,
        }
    }
}

impl LimitsConfig {
    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_kb.saturating_mul(1024)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown log format '{other}'; expected 'pretty' or 'json'"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "abacus=info,abacus_api=info,abacus_web=info,tower_http=info".to_string(),
        }
    }
}

/// Service configuration, loaded from TOML and then overridden from the
/// environment.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AbacusConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

impl AbacusConfig {
    /// Loads the file named by `ABACUS_CONFIG_PATH` (or `abacus.toml`).
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var("ABACUS_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    /// Loads a specific file. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).with_context(|| {
                format!("failed to parse configuration file '{}'", path.display())
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(err) => Err(err)
                .with_context(|| format!("failed to read configuration file '{}'", path.display())),
        }
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `ABACUS_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup; unparseable values are ignored
    /// with a warning.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("ABACUS_HOST") {
            self.server.host = host;
        }
        override_parsed(&lookup, "ABACUS_PORT", &mut self.server.port);
        override_parsed(&lookup, "ABACUS_MAX_BODY_SIZE_KB", &mut self.limits.max_body_size_kb);
        override_parsed(
            &lookup,
            "ABACUS_REQUEST_TIMEOUT_SECONDS",
            &mut self.limits.request_timeout_seconds,
        );
        override_parsed(&lookup, "ABACUS_LOG_FORMAT", &mut self.logging.format);
        self
    }
}

fn override_parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.parse::<T>() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable configuration override"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracing_setup::bootstrap_subscriber;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under the bootstrap subscriber and returns what it logged.
    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let value =
            tracing::subscriber::with_default(bootstrap_subscriber(move || writer.clone()), f);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (value, output)
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_sensible() {
        let config = AbacusConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.limits.max_body_size_bytes(), 64 * 1024);
        assert_eq!(config.limits.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = AbacusConfig::from_toml(
            r#"
            [server]
            port = 9000

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AbacusConfig::from_toml("[server]\nport = \"not a port\"").is_err());
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let config = AbacusConfig::default().apply_overrides(lookup_from(&[
            ("ABACUS_HOST", "0.0.0.0"),
            ("ABACUS_PORT", "8080"),
            ("ABACUS_MAX_BODY_SIZE_KB", "8"),
            ("ABACUS_REQUEST_TIMEOUT_SECONDS", "5"),
            ("ABACUS_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.limits.max_body_size_kb, 8);
        assert_eq!(config.limits.request_timeout_seconds, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn unparseable_overrides_are_ignored() {
        let config = AbacusConfig::default().apply_overrides(lookup_from(&[
            ("ABACUS_PORT", "eighty"),
            ("ABACUS_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AbacusConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AbacusConfig::default());
    }

    #[test]
    fn missing_file_warning_reaches_bootstrap_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (config, logs) = with_captured_logs(|| AbacusConfig::load_from(&path));
        assert_eq!(config.unwrap(), AbacusConfig::default());
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("not found. Using default configuration."), "logs: {logs}");
    }

    #[test]
    fn unparseable_override_warning_reaches_bootstrap_subscriber() {
        let (config, logs) = with_captured_logs(|| {
            AbacusConfig::default().apply_overrides(lookup_from(&[("ABACUS_PORT", "eighty")]))
        });
        assert_eq!(config.server.port, 8000);
        assert!(logs.contains("Ignoring unparseable configuration override"), "logs: {logs}");
        assert!(logs.contains("ABACUS_PORT"), "logs: {logs}");
        assert!(logs.contains("eighty"), "logs: {logs}");
    }

    #[test]
    fn bootstrap_subscriber_drops_info() {
        let ((), logs) = with_captured_logs(|| tracing::info!("starting up"));
        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abacus.toml");
        std::fs::write(&path, "[limits]\nmax_body_size_kb = 1\n").unwrap();
        let config = AbacusConfig::load_from(&path).unwrap();
        assert_eq!(config.limits.max_body_size_kb, 1);
    }
}
