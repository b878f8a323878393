//! Outline API data models

pub mod access_key;
pub mod metrics;
pub mod server_info;

pub use access_key::{AccessKeyInfo, AccessKeyList, DataLimit};
pub use metrics::DataTransferReport;
pub use server_info::ServerInfo;
