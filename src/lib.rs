//! Typed async client for the [Kaiascan](https://kaiascan.io) block explorer open API.
//!
//! Every call is a single HTTP GET whose JSON answer is wrapped in a
//! `{code, data, msg}` envelope. This crate builds the URL, sends the request,
//! unwraps the envelope and tells apart the ways a call can fail: bad input
//! ([`Error::Validation`]), network or HTTP status ([`Error::Transport`]),
//! a malformed body ([`Error::Decode`]) and a well-formed API error
//! ([`Error::Api`]).
//!
//! # Features
//!
//! - **Endpoint catalog, request builder, envelope decoder and types** — always
//!   available.
//! - **`client` module** (enabled by default) — an async client built on `reqwest`.
//!
//! # Quick start
//!
//! ```no_run
//! use kaiascan_client::{BlockRange, KaiascanClient, Paging};
//!
//! #[tokio::main]
//! async fn main() -> kaiascan_client::client::Result<()> {
//!     let client = KaiascanClient::mainnet()?;
//!     let latest = client.latest_block().await?;
//!     println!("Latest block: {latest}");
//!
//!     let transfers = client
//!         .account_token_transfers("0x...", Paging::first(50), None, BlockRange::ALL)
//!         .await?;
//!     println!("{transfers:#}");
//!     Ok(())
//! }
//! ```
//!
//! # Networks
//!
//! Each client is bound to one [`NetworkProfile`]. The process-wide
//! [`network::configure`] flag only picks the default for
//! [`KaiascanClient::from_selected`].

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod network;
pub mod params;
pub mod request;
pub mod types;

pub use endpoint::Endpoint;
pub use envelope::ApiEnvelope;
pub use error::{ApiError, Error, Result, ValidationError};
pub use network::{Network, NetworkProfile};
pub use params::{BlockRange, Paging};
pub use request::Request;
pub use types::*;

#[cfg(feature = "client")]
pub use error::TransportError;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::KaiascanClient;
