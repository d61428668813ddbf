//! Client configuration DTO.
//!
//! 配置 DTO（纯数据）：只做 TOML → DTO 的映射，不做验证，不做策略。

/// Connection settings for the local daemon's REST surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Daemon host, e.g. `127.0.0.1`.
    pub daemon_host: String,

    /// Daemon HTTP port used for UI → daemon communication.
    pub daemon_http_port: u16,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Key strength offered by default in the generate tab (bits).
    pub default_key_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            daemon_host: "127.0.0.1".to_string(),
            daemon_http_port: 5000,
            request_timeout_secs: 30,
            default_key_size: 2048,
        }
    }
}

impl ClientConfig {
    /// Create ClientConfig from a parsed TOML value. Missing keys fall back
    /// to the defaults above; no further validation happens here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            daemon_host: toml_value
                .get("daemon")
                .and_then(|d| d.get("host"))
                .and_then(|v| v.as_str())
                .unwrap_or(&defaults.daemon_host)
                .to_string(),
            daemon_http_port: toml_value
                .get("daemon")
                .and_then(|d| d.get("http_port"))
                .and_then(|v| v.as_integer())
                .map(|v| v as u16)
                .unwrap_or(defaults.daemon_http_port),
            request_timeout_secs: toml_value
                .get("daemon")
                .and_then(|d| d.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v as u64)
                .unwrap_or(defaults.request_timeout_secs),
            default_key_size: toml_value
                .get("crypto")
                .and_then(|c| c.get("default_key_size"))
                .and_then(|v| v.as_integer())
                .map(|v| v as u32)
                .unwrap_or(defaults.default_key_size),
        })
    }

    /// Base URL of the daemon's REST API.
    pub fn daemon_base_url(&self) -> String {
        format!("http://{}:{}/api", self.daemon_host, self.daemon_http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [daemon]
            host = "localhost"
            http_port = 6000
            request_timeout_secs = 5

            [crypto]
            default_key_size = 4096
            "#,
        )
        .unwrap();

        let config = ClientConfig::from_toml(&value).unwrap();
        assert_eq!(config.daemon_host, "localhost");
        assert_eq!(config.daemon_http_port, 6000);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.default_key_size, 4096);
        assert_eq!(config.daemon_base_url(), "http://localhost:6000/api");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let value: toml::Value = toml::from_str("").unwrap();

        let config = ClientConfig::from_toml(&value).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
