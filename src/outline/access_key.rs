//! Access key handle
//!
//! Wraps one key's attributes and borrows the session that produced it.
//! Fields are the last known values; `limit` and `usage` always re-query.

use super::client::OutlineClient;
use super::error::OutlineResult;
use super::model::{AccessKeyInfo, DataLimit};

/// Handle to one access key on the server
#[derive(Debug, Clone)]
pub struct AccessKey<'a> {
    client: &'a OutlineClient,
    info: AccessKeyInfo,
}

impl PartialEq for AccessKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.info.id == other.info.id
    }
}

impl Eq for AccessKey<'_> {}

impl<'a> AccessKey<'a> {
    pub(crate) fn new(client: &'a OutlineClient, info: AccessKeyInfo) -> Self {
        Self { client, info }
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn password(&self) -> &str {
        &self.info.password
    }

    pub fn port(&self) -> u16 {
        self.info.port
    }

    pub fn method(&self) -> &str {
        &self.info.method
    }

    pub fn access_url(&self) -> &str {
        &self.info.access_url
    }

    /// Data limit as of when this handle was fetched
    pub fn data_limit(&self) -> Option<DataLimit> {
        self.info.data_limit
    }

    pub fn info(&self) -> &AccessKeyInfo {
        &self.info
    }

    /// Shareable connection URL, with `label` as fragment when non-empty
    pub fn url(&self, label: &str) -> String {
        if label.is_empty() {
            return self.info.access_url.clone();
        }
        format!("{}#{}", self.info.access_url, label)
    }

    /// Delete the key on the server
    pub fn delete(self) -> OutlineResult<()> {
        self.client.delete_key(&self.info.id)
    }

    /// Rename the key; the local name changes only once the server accepted it
    pub fn rename(&mut self, name: &str) -> OutlineResult<()> {
        self.client.rename_key(&self.info.id, name)?;
        self.info.name = name.to_string();
        Ok(())
    }

    /// Set a data transfer limit in bytes
    pub fn change_data_limit(&self, bytes: u64) -> OutlineResult<()> {
        self.client.change_data_limit_for_key(&self.info.id, bytes)
    }

    /// Lift the data transfer limit
    pub fn reset_data_limit(&self) -> OutlineResult<()> {
        self.client.reset_data_limit_for_key(&self.info.id)
    }

    /// Current data limit in bytes as reported by the server, `None` if unlimited
    pub fn limit(&self) -> OutlineResult<Option<u64>> {
        let key = self.client.key(&self.info.id)?;
        Ok(key.info.data_limit.map(|limit| limit.bytes))
    }

    /// Bytes transferred by this key
    pub fn usage(&self) -> OutlineResult<u64> {
        Ok(self.client.metrics()?.by_access_key(self))
    }
}
