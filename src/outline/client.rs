//! Outline server session
//!
//! Owns the management endpoint and a reusable connection, and implements
//! every server- and collection-scoped operation of the Outline API.
//! Each call is a single blocking request; nothing is cached except the
//! server info snapshot taken at construction.

use std::fmt;

use parking_lot::RwLock;
use reqwest::blocking::{Client, Response};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::http_client::{ClientOptions, build_client};
use crate::model::config::Config;

use super::access_key::AccessKey;
use super::error::{OutlineError, OutlineResult};
use super::model::{AccessKeyInfo, AccessKeyList, DataLimit, DataTransferReport, ServerInfo};

/// Cipher method used when none is requested
pub const DEFAULT_METHOD: &str = "aes-192-gcm";

/// Response of `GET /metrics/enabled`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsEnabledResponse {
    metrics_enabled: bool,
}

/// Outline server session
pub struct OutlineClient {
    /// API root including the secret path, without trailing slash
    base_url: String,
    client: Client,
    /// Last known server info, updated after accepted changes
    server: RwLock<ServerInfo>,
}

impl fmt::Debug for OutlineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // base_url carries the secret path
        f.debug_struct("OutlineClient")
            .field("server", &*self.server.read())
            .finish_non_exhaustive()
    }
}

impl OutlineClient {
    /// Connect with default transport options and fetch the server info
    pub fn new(base_url: impl Into<String>) -> OutlineResult<Self> {
        Self::with_options(base_url, &ClientOptions::default())
    }

    /// Connect using the transport settings of a loaded config
    pub fn with_config(base_url: impl Into<String>, config: &Config) -> OutlineResult<Self> {
        Self::with_options(base_url, &config.client_options())
    }

    pub fn with_options(base_url: impl Into<String>, options: &ClientOptions) -> OutlineResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_client(options)?;

        let session = Self {
            base_url,
            client,
            server: RwLock::new(ServerInfo::default()),
        };
        session.refresh()?;

        {
            let server = session.server.read();
            tracing::info!(
                name = %server.name,
                version = %server.version,
                "Connected to Outline server"
            );
        }
        Ok(session)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn key_path(id: &str, suffix: &str) -> String {
        format!("/access-keys/{}{}", urlencoding::encode(id), suffix)
    }

    fn send(&self, method: Method, path: &str, body: Option<Value>) -> OutlineResult<Response> {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send()?;
        tracing::debug!(%method, path, status = %response.status(), "Outline API request");
        Ok(response)
    }

    // ============ Server ============

    /// Last known server info
    ///
    /// Taken at construction and patched after accepted changes; call
    /// [`refresh`](Self::refresh) for the authoritative state.
    pub fn server_info(&self) -> ServerInfo {
        self.server.read().clone()
    }

    /// Re-fetch the server info snapshot
    pub fn refresh(&self) -> OutlineResult<ServerInfo> {
        let response = self.send(Method::GET, "/server", None)?.error_for_status()?;
        let info: ServerInfo = response.json()?;
        *self.server.write() = info.clone();
        Ok(info)
    }

    /// Change the server display name
    pub fn rename(&self, name: &str) -> OutlineResult<()> {
        let response = self.send(Method::PUT, "/name", Some(json!({ "name": name })))?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(OutlineError::InvalidName);
        }

        self.server.write().name = name.to_string();
        tracing::info!("Server renamed to {}", name);
        Ok(())
    }

    /// Change the hostname embedded in access key URLs
    ///
    /// Must be a valid hostname or IP address. DNS for a hostname has to be
    /// set up independently.
    pub fn change_hostname(&self, hostname: &str) -> OutlineResult<()> {
        let response = self.send(
            Method::PUT,
            "/server/hostname-for-access-keys",
            Some(json!({ "hostname": hostname })),
        )?;

        let status = response.status();
        if status.is_client_error() {
            return Err(OutlineError::InvalidHostname);
        }
        if status.is_server_error() {
            return Err(OutlineError::HostnameChangeFailed);
        }
        response.error_for_status()?;

        self.server.write().hostname_for_keys = hostname.to_string();
        tracing::info!("Hostname for access keys changed to {}", hostname);
        Ok(())
    }

    /// Change the default port for newly created access keys
    ///
    /// The port may already be in use by existing access keys.
    pub fn change_port(&self, port: i64) -> OutlineResult<()> {
        let valid_port = u16::try_from(port)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(OutlineError::InvalidPort(port))?;

        let response = self.send(
            Method::PUT,
            "/server/port-for-new-access-keys",
            Some(json!({ "port": valid_port })),
        )?;

        match response.status() {
            StatusCode::CONFLICT => return Err(OutlineError::PortInUse),
            StatusCode::BAD_REQUEST => return Err(OutlineError::InvalidPort(port)),
            _ => {}
        }
        response.error_for_status()?;

        self.server.write().port_for_new_keys = valid_port;
        tracing::info!("Port for new access keys changed to {}", valid_port);
        Ok(())
    }

    /// Whether metrics are shared with the Outline team
    pub fn metrics_enabled(&self) -> OutlineResult<bool> {
        let response = self
            .send(Method::GET, "/metrics/enabled", None)?
            .error_for_status()?;
        let body: MetricsEnabledResponse = response.json()?;
        Ok(body.metrics_enabled)
    }

    /// Enable or disable metrics sharing
    pub fn set_metrics_enabled(&self, enabled: bool) -> OutlineResult<()> {
        self.send(
            Method::PUT,
            "/metrics/enabled",
            Some(json!({ "metricsEnabled": enabled })),
        )?
        .error_for_status()?;

        self.server.write().metrics_enabled = Some(enabled);
        Ok(())
    }

    /// Set a data transfer limit for all access keys
    pub fn change_data_limit(&self, bytes: u64) -> OutlineResult<()> {
        let limit = DataLimit { bytes };
        let response = self.send(
            Method::PUT,
            "/server/access-key-data-limit",
            Some(json!({ "limit": limit })),
        )?;

        if response.status().is_client_error() {
            return Err(OutlineError::InvalidDataLimit);
        }
        response.error_for_status()?;

        self.server.write().access_key_data_limit = Some(limit);
        tracing::info!("Data limit for all access keys set to {} bytes", bytes);
        Ok(())
    }

    /// Lift the data limit on all access keys
    pub fn reset_data_limit(&self) -> OutlineResult<()> {
        self.send(Method::DELETE, "/server/access-key-data-limit", None)?
            .error_for_status()?;

        self.server.write().access_key_data_limit = None;
        tracing::info!("Data limit for all access keys removed");
        Ok(())
    }

    // ============ Access keys ============

    /// List access keys in server order
    pub fn keys(&self) -> OutlineResult<Vec<AccessKey<'_>>> {
        let response = self
            .send(Method::GET, "/access-keys", None)?
            .error_for_status()?;
        let list: AccessKeyList = response.json()?;

        Ok(list
            .access_keys
            .into_iter()
            .map(|info| AccessKey::new(self, info))
            .collect())
    }

    /// Look up one access key by identifier
    pub fn key(&self, id: &str) -> OutlineResult<AccessKey<'_>> {
        self.keys()?
            .into_iter()
            .find(|key| key.id() == id)
            .ok_or_else(|| OutlineError::AccessKeyNotFound(id.to_string()))
    }

    /// Create an access key
    ///
    /// A non-empty `name` costs a second request. If that rename fails the
    /// key still exists under the server-assigned name.
    pub fn create_key(&self, method: &str, name: &str) -> OutlineResult<AccessKey<'_>> {
        let response = self
            .send(Method::POST, "/access-keys", Some(json!({ "method": method })))?
            .error_for_status()?;
        let info: AccessKeyInfo = response.json()?;

        let mut key = AccessKey::new(self, info);
        tracing::info!(id = %key.id(), method, "Access key created");

        if !name.is_empty() {
            key.rename(name)?;
        }
        Ok(key)
    }

    /// Create an access key with [`DEFAULT_METHOD`]
    pub fn new_key(&self, name: &str) -> OutlineResult<AccessKey<'_>> {
        self.create_key(DEFAULT_METHOD, name)
    }

    /// Delete every access key, one request per key, in listed order
    ///
    /// Stops at the first failure; keys deleted before it stay deleted.
    pub fn delete_all_keys(&self) -> OutlineResult<usize> {
        let keys = self.keys()?;
        let count = keys.len();
        for key in keys {
            key.delete()?;
        }
        Ok(count)
    }

    pub fn delete_key(&self, id: &str) -> OutlineResult<()> {
        self.send(Method::DELETE, &Self::key_path(id, ""), None)?
            .error_for_status()?;
        tracing::info!(id, "Access key deleted");
        Ok(())
    }

    pub fn rename_key(&self, id: &str, name: &str) -> OutlineResult<()> {
        self.send(
            Method::PUT,
            &Self::key_path(id, "/name"),
            Some(json!({ "name": name })),
        )?
        .error_for_status()?;
        Ok(())
    }

    /// Set a data transfer limit for one access key
    pub fn change_data_limit_for_key(&self, id: &str, bytes: u64) -> OutlineResult<()> {
        let body = json!({ "limit": DataLimit { bytes } });
        let response = self.send(Method::PUT, &Self::key_path(id, "/data-limit"), Some(body))?;

        if response.status().is_client_error() {
            return Err(OutlineError::InvalidDataLimit);
        }
        response.error_for_status()?;
        tracing::info!(id, "Data limit set to {} bytes", bytes);
        Ok(())
    }

    /// Lift the data limit on one access key
    pub fn reset_data_limit_for_key(&self, id: &str) -> OutlineResult<()> {
        self.send(Method::DELETE, &Self::key_path(id, "/data-limit"), None)?
            .error_for_status()?;
        Ok(())
    }

    // ============ Metrics ============

    /// Bytes transferred per access key
    pub fn metrics(&self) -> OutlineResult<DataTransferReport> {
        let response = self
            .send(Method::GET, "/metrics/transfer", None)?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
