//! Data transfer metrics model
//!
//! Response type of `GET /metrics/transfer`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bytes transferred per access key
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferReport {
    /// Access key identifier -> bytes transferred
    #[serde(default)]
    pub bytes_transferred_by_user_id: HashMap<String, u64>,
}

impl DataTransferReport {
    /// Total bytes transferred by all keys
    pub fn total(&self) -> u64 {
        self.bytes_transferred_by_user_id.values().sum()
    }

    /// Bytes transferred by one key, 0 if the key has no entry
    pub fn by_key(&self, id: &str) -> u64 {
        self.bytes_transferred_by_user_id
            .get(id)
            .copied()
            .unwrap_or(0)
    }

    /// Bytes transferred by the key behind a handle
    pub fn by_access_key(&self, key: &crate::outline::AccessKey<'_>) -> u64 {
        self.by_key(key.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> DataTransferReport {
        serde_json::from_str(r#"{"bytesTransferredByUserId": {"1": 1008040941, "2": 5958113, "3": 0}}"#)
            .unwrap()
    }

    #[test]
    fn test_total_sums_all_entries() {
        assert_eq!(report().total(), 1008040941 + 5958113);
    }

    #[test]
    fn test_by_key() {
        let report = report();
        assert_eq!(report.by_key("1"), 1008040941);
        assert_eq!(report.by_key("3"), 0);
    }

    #[test]
    fn test_by_key_missing_entry_is_zero() {
        assert_eq!(report().by_key("99"), 0);
    }

    #[test]
    fn test_empty_report() {
        let report: DataTransferReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.by_key("1"), 0);
    }
}
