//! HTTP Client builder module
//!
//! Builds the blocking transport used by the Outline session, with proxy support

use reqwest::Proxy;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::model::config::TlsBackend;

/// Proxy configuration
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Proxy URL, supports http/https/socks5
    pub url: String,
    /// Proxy authentication username
    pub username: Option<String>,
    /// Proxy authentication password
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Create proxy configuration from URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Transport options for the management API
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout_secs: u64,
    /// Verify the server certificate (Outline servers ship self-signed ones)
    pub verify_tls: bool,
    pub tls_backend: TlsBackend,
    pub proxy: Option<ProxyConfig>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            verify_tls: true,
            tls_backend: TlsBackend::default(),
            proxy: None,
        }
    }
}

/// Build HTTP Client
///
/// # Arguments
/// * `options` - Timeout, TLS and proxy settings
///
/// # Returns
/// Configured reqwest::blocking::Client
pub fn build_client(options: &ClientOptions) -> reqwest::Result<Client> {
    let mut builder = Client::builder().timeout(Duration::from_secs(options.timeout_secs));

    if options.tls_backend == TlsBackend::Rustls {
        builder = builder.use_rustls_tls();
    }

    if !options.verify_tls {
        tracing::warn!("TLS certificate verification disabled for the management API");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(proxy_config) = &options.proxy {
        let mut proxy = Proxy::all(&proxy_config.url)?;

        // Set proxy authentication
        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password) {
            proxy = proxy.basic_auth(username, password);
        }

        builder = builder.proxy(proxy);
        tracing::debug!("HTTP Client using proxy: {}", proxy_config.url);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_config_with_auth() {
        let config = ProxyConfig::new("socks5://127.0.0.1:1080").with_auth("user", "pass");
        assert_eq!(config.url, "socks5://127.0.0.1:1080");
        assert_eq!(config.username, Some("user".to_string()));
        assert_eq!(config.password, Some("pass".to_string()));
    }

    #[test]
    fn test_default_options_verify_tls() {
        let options = ClientOptions::default();
        assert!(options.verify_tls);
        assert_eq!(options.timeout_secs, 30);
        assert!(options.proxy.is_none());
    }

    #[test]
    fn test_build_client_insecure() {
        let options = ClientOptions {
            verify_tls: false,
            ..Default::default()
        };
        assert!(build_client(&options).is_ok());
    }

    #[test]
    fn test_build_client_with_proxy() {
        let options = ClientOptions {
            proxy: Some(ProxyConfig::new("http://127.0.0.1:7890")),
            ..Default::default()
        };
        assert!(build_client(&options).is_ok());
    }
}
