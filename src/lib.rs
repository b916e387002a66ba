//! # zabbix-rs
//!
//! A Rust client library for the Zabbix monitoring system's JSON-RPC API.
//! Every API method is exposed as a strongly-named call (`host_get`,
//! `trigger_create`, `user_login` via [`ZabbixApiClient::login`], ...) that
//! forwards into one generic RPC invocation, and the server-side enumeration
//! values are mirrored as named constants in [`constants`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use serde_json::json;
//! use zabbix_rs::{Config, ZabbixApiClient};
//!
//! # async fn example() -> zabbix_rs::Result<()> {
//! // Load configuration from config.toml
//! let config = Config::new()?;
//!
//! // Create API client and login
//! let mut client = ZabbixApiClient::new(config)?;
//! client.login().await?;
//!
//! // Every Zabbix method takes its parameter object verbatim
//! let hosts = client
//!     .host_get(json!({ "output": ["hostid", "host"], "monitored_hosts": true }))
//!     .await?;
//! println!("{hosts}");
//!
//! // Re-key list results by a field of each element
//! let by_id = client
//!     .call_re_keyed("host.get", json!({ "output": "extend" }), "hostid")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Full method surface**: every `resource.action` the Zabbix API
//!   exposes, generated from a single method table
//! - **Session management**: `user.login` stores the token, it is attached
//!   to every subsequent request, `user.logout` clears it
//! - **Re-login on expiry**: an unauthorized response triggers a single
//!   re-authentication and retry
//! - **Transport retry**: exponential backoff around the HTTP round trip
//! - **Result re-keying**: turn list results into maps keyed by any field
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your Zabbix endpoint and credentials:
//!
//! ```toml
//! [zabbix]
//! url = "https://zabbix.example.com/api_jsonrpc.php"
//! username = "Admin"
//! password = "zabbix"
//! # http_user = "proxy-user"       # optional HTTP basic auth
//! # http_password = "proxy-pass"
//! # timeout_secs = 30
//! ```

pub mod api;
pub mod api_client;
pub mod config;
pub mod constants;
pub mod dto;
pub mod error;
pub mod retry;

// Re-export commonly used types at the crate root
pub use api::METHOD_TABLE;
pub use api_client::{re_key_by, ZabbixApiClient};
pub use config::{Config, ZabbixConfig};
pub use dto::rpc::{ApiError, JsonRpcRequest, JsonRpcResponse};
pub use error::{Result, ZabbixError};
pub use retry::RetryPolicy;
