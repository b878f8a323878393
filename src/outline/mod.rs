//! Outline server management API client

pub mod access_key;
pub mod client;
pub mod error;
pub mod model;

#[cfg(test)]
mod testing;

pub use access_key::AccessKey;
pub use client::{DEFAULT_METHOD, OutlineClient};
pub use error::{OutlineError, OutlineResult};
pub use model::{AccessKeyInfo, DataLimit, DataTransferReport, ServerInfo};
