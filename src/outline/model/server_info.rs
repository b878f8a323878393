//! Server info data model
//!
//! Response type of `GET /server`

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::access_key::DataLimit;

/// Server info snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    /// Display name
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub server_id: String,

    /// Creation time (Unix milliseconds)
    #[serde(default, rename = "createdTimestampMs")]
    pub created_timestamp_ms: i64,

    #[serde(default)]
    pub version: String,

    /// Port assigned to newly created access keys
    #[serde(default, rename = "portForNewAccessKeys")]
    pub port_for_new_keys: u16,

    /// Hostname embedded in access key URLs
    #[serde(default, rename = "hostnameForAccessKeys")]
    pub hostname_for_keys: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_enabled: Option<bool>,

    /// Data limit applied to every access key
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_data_limit: Option<DataLimit>,
}

fn default_name() -> String {
    "Outline Server".to_string()
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            server_id: String::new(),
            created_timestamp_ms: 0,
            version: String::new(),
            port_for_new_keys: 0,
            hostname_for_keys: String::new(),
            metrics_enabled: None,
            access_key_data_limit: None,
        }
    }
}

impl ServerInfo {
    /// Creation time as a UTC date-time
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_timestamp_ms).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_server_info() {
        let json = r#"{
            "name": "My Server",
            "serverId": "7fda0079-5317-4e5a-bb41-5a431dddae21",
            "metricsEnabled": true,
            "createdTimestampMs": 1536613192052,
            "version": "1.0.0",
            "accessKeyDataLimit": {"bytes": 8589934592},
            "portForNewAccessKeys": 1234,
            "hostnameForAccessKeys": "example.com"
        }"#;

        let info: ServerInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "My Server");
        assert_eq!(info.server_id, "7fda0079-5317-4e5a-bb41-5a431dddae21");
        assert_eq!(info.created_timestamp_ms, 1536613192052);
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.port_for_new_keys, 1234);
        assert_eq!(info.hostname_for_keys, "example.com");
        assert_eq!(info.metrics_enabled, Some(true));
        assert_eq!(info.access_key_data_limit, Some(DataLimit { bytes: 8589934592 }));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let info: ServerInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, ServerInfo::default());
        assert_eq!(info.name, "Outline Server");
    }

    #[test]
    fn test_created_at() {
        let info = ServerInfo {
            created_timestamp_ms: 1536613192052,
            ..Default::default()
        };
        let created = info.created_at().unwrap();
        assert_eq!(created.timestamp_millis(), 1536613192052);
        assert_eq!(created.format("%Y-%m-%d").to_string(), "2018-09-10");
    }
}
