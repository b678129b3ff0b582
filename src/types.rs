//! Typed payloads.
//!
//! Most endpoints return loosely specified JSON and are exposed as
//! [`serde_json::Value`]; callers that know the shape they need can decode into
//! their own types through [`KaiascanClient::fetch`](crate::KaiascanClient::fetch).

use serde::{Deserialize, Serialize};

/// Fungible token summary returned by `GET /api/v1/tokens`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Token standard, e.g. `ERC20` or `KIP7`.
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub decimal: i32,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub total_transfers: i64,
    #[serde(default)]
    pub official_site: Option<String>,
    #[serde(default)]
    pub burn_amount: f64,
    #[serde(default)]
    pub total_burns: i64,
}
