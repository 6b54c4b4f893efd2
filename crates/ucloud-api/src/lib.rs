//! # ucloud-api
//!
//! Core client for the UCloud API: typed requests are encoded into flat
//! query parameters, signed with the account's private key, and issued as
//! HTTP GET calls; JSON responses are decoded and status-checked.
//!
//! ## Architecture
//!
//! ```text
//! typed request ──▶ params::encode ──▶ ParameterSet
//!                                          │ + identity params
//!                                          ▼
//!                                   signature::sign
//!                                          │
//!                                          ▼
//!                               Client (GET, decode, RetCode check)
//!                                          │
//!                                          ▼
//!                                   typed response ──▶ wait_for_state
//!                                                      (for async ops)
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use ucloud_api::{Client, ClientConfig, ParameterSet, ResponseHeader};
//!
//! # async fn example() -> ucloud_api::Result<()> {
//! let client = Client::new(ClientConfig::new(
//!     "public-key",
//!     "private-key",
//!     "cn-bj2",
//! ))?;
//!
//! let mut params = ParameterSet::new();
//! params.set("Action", "StopUHostInstance");
//! params.set("UHostId", "uhost-abc123");
//! let _resp: ResponseHeader = client.call_params(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Resource-specific request/response types live in the sibling crates
//! (`ucloud-uhost`, `ucloud-unet`); this crate only knows the wire rules.

mod client;
mod config;
mod error;
pub mod params;
mod response;
pub mod signature;
pub mod wait;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use params::{action_for, encode, EncodeError, ParameterSet, Parameterize, Request};
pub use response::{Response, ResponseHeader};
pub use wait::{wait_for_state, UnknownPolicy, WaitError, WaitSpec};
