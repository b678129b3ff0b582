//! Network profiles and the process-wide network selection.
//!
//! A [`KaiascanClient`](crate::KaiascanClient) holds its own immutable
//! [`NetworkProfile`], so clients aimed at different networks can be used side
//! by side. [`configure`] only sets the default picked up by
//! [`KaiascanClient::from_selected`](crate::KaiascanClient::from_selected);
//! clients that already exist, and calls already in flight, keep their target.

use crate::error::Result;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

pub const MAINNET_BASE_URL: &str = "https://mainnet-oapi.kaiascan.io/";
pub const MAINNET_CHAIN_ID: &str = "8217";

pub const KAIROS_BASE_URL: &str = "https://kairos-oapi.kaiascan.io/";
pub const KAIROS_CHAIN_ID: &str = "1001";

static USE_TESTNET: AtomicBool = AtomicBool::new(false);

/// Selects the network used by clients built with
/// [`KaiascanClient::from_selected`](crate::KaiascanClient::from_selected).
///
/// Meant to be called once at startup; later calls only affect clients built
/// afterwards.
pub fn configure(is_testnet: bool) {
    USE_TESTNET.store(is_testnet, Ordering::Relaxed);
    log::debug!("selected network: {}", Network::from_testnet(is_testnet));
}

/// The network chosen by the last [`configure`] call (Mainnet by default).
pub fn selected() -> Network {
    Network::from_testnet(USE_TESTNET.load(Ordering::Relaxed))
}

/// A Kaia deployment served by Kaiascan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Network {
    #[default]
    Mainnet,
    /// The Kairos testnet.
    Kairos,
}

impl Network {
    pub fn from_testnet(is_testnet: bool) -> Self {
        if is_testnet {
            Self::Kairos
        } else {
            Self::Mainnet
        }
    }

    pub fn is_testnet(self) -> bool {
        self == Self::Kairos
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_BASE_URL,
            Self::Kairos => KAIROS_BASE_URL,
        }
    }

    pub fn chain_id(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_CHAIN_ID,
            Self::Kairos => KAIROS_CHAIN_ID,
        }
    }

    pub fn profile(self) -> NetworkProfile {
        NetworkProfile {
            base_url: Url::parse(self.base_url()).expect("canonical base URL is valid"),
            chain_id: self.chain_id().to_string(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Kairos => f.write_str("kairos"),
        }
    }
}

/// Base URL and chain id of the API a client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    base_url: Url,
    chain_id: String,
}

impl NetworkProfile {
    /// A profile for a non-canonical deployment, e.g. a gateway or a mock server.
    pub fn custom(base_url: &str, chain_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            chain_id: chain_id.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }
}

impl From<Network> for NetworkProfile {
    fn from(network: Network) -> Self {
        network.profile()
    }
}
