//! Client for the Outline server management API
//!
//! ```no_run
//! use outline_api::OutlineClient;
//!
//! let client = OutlineClient::new("https://127.0.0.1:8081/SecretPath")?;
//! let key = client.new_key("New key!")?;
//! key.change_data_limit(1_000_000_000)?;
//! println!("{}", key.url("my key with 1GB limit"));
//! # Ok::<(), outline_api::OutlineError>(())
//! ```

pub mod http_client;
pub mod model;
pub mod outline;

pub use outline::{
    AccessKey, AccessKeyInfo, DEFAULT_METHOD, DataLimit, DataTransferReport, OutlineClient,
    OutlineError, OutlineResult, ServerInfo,
};
