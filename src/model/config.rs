use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::http_client::{ClientOptions, ProxyConfig};

/// TLS implementation used by the management client
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TlsBackend {
    #[default]
    Rustls,
    NativeTls,
}

/// Outline management client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Management API URL including the secret path,
    /// e.g. `https://1.2.3.4:1234/SecretPath`
    #[serde(default)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Verify the server certificate. Disable for self-signed servers.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,

    #[serde(default)]
    pub tls_backend: TlsBackend,

    /// HTTP proxy URL (optional)
    /// Supported formats: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Proxy authentication username (optional)
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// Proxy authentication password (optional)
    #[serde(default)]
    pub proxy_password: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_verify_tls() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: default_timeout_secs(),
            verify_tls: default_verify_tls(),
            tls_backend: TlsBackend::default(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

impl Config {
    /// Get default config file path
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // Config file doesn't exist, return default config
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Build proxy configuration (if proxy_url is set)
    pub fn proxy(&self) -> Option<ProxyConfig> {
        self.proxy_url.as_ref().map(|url| {
            let mut proxy = ProxyConfig::new(url);
            if let (Some(username), Some(password)) = (&self.proxy_username, &self.proxy_password) {
                proxy = proxy.with_auth(username, password);
            }
            proxy
        })
    }

    /// Transport options for the management client
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout_secs: self.timeout_secs,
            verify_tls: self.verify_tls,
            tls_backend: self.tls_backend,
            proxy: self.proxy(),
        }
    }
}
