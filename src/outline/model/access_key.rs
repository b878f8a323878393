//! Access key data model

use serde::{Deserialize, Serialize};

/// Data transfer cap in bytes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataLimit {
    pub bytes: u64,
}

/// Access key as reported by the server
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyInfo {
    /// Server-assigned identifier
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Shadowsocks secret
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub port: u16,

    /// Cipher method, e.g. `chacha20-ietf-poly1305`
    #[serde(default)]
    pub method: String,

    /// Ready-made `ss://` connection URL
    #[serde(default)]
    pub access_url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<DataLimit>,
}

/// Response of `GET /access-keys`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyList {
    #[serde(default)]
    pub access_keys: Vec<AccessKeyInfo>,
}
