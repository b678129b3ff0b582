//! Async REST client for the Kaiascan open API.

use crate::endpoint::Endpoint;
use crate::envelope::{self, ApiEnvelope};
use crate::error::{TransportError, ValidationError};
use crate::network::{self, Network, NetworkProfile};
use crate::params::{BlockRange, Paging};
use crate::request::Request;
use crate::types::TokenInfo;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

pub use crate::error::{Error, Result};

/// Request timeout applied to every call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Async client for the Kaiascan open API.
///
/// Cloning is cheap and clones share one connection pool. The network profile
/// is fixed at construction.
///
/// # Example
///
/// ```no_run
/// use kaiascan_client::KaiascanClient;
///
/// #[tokio::main]
/// async fn main() -> kaiascan_client::client::Result<()> {
///     let client = KaiascanClient::kairos()?;
///     let token = client.fungible_token("0x0000000000000000000000000000000000001001").await?;
///     println!("{} ({})", token.name, token.symbol);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct KaiascanClient {
    client: Client,
    network: NetworkProfile,
}

impl KaiascanClient {
    /// Create a client for `network` with the default timeout.
    pub fn new(network: impl Into<NetworkProfile>) -> Result<Self> {
        Self::with_timeout(network, DEFAULT_TIMEOUT)
    }

    /// Create a client for `network` with a custom request timeout.
    pub fn with_timeout(network: impl Into<NetworkProfile>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self::with_http_client(network, client))
    }

    /// Wrap an existing `reqwest` client, e.g. to share its pool with other code.
    ///
    /// The caller is responsible for its timeout and default headers.
    pub fn with_http_client(network: impl Into<NetworkProfile>, client: Client) -> Self {
        Self {
            client,
            network: network.into(),
        }
    }

    /// Create a client for Kaia Mainnet.
    pub fn mainnet() -> Result<Self> {
        Self::new(Network::Mainnet)
    }

    /// Create a client for the Kairos testnet.
    pub fn kairos() -> Result<Self> {
        Self::new(Network::Kairos)
    }

    /// Create a client for the network chosen with [`network::configure`].
    pub fn from_selected() -> Result<Self> {
        Self::new(network::selected())
    }

    pub fn network(&self) -> &NetworkProfile {
        &self.network
    }

    /// The URL `request` would hit on this client's network.
    pub fn url_for(&self, request: &Request) -> Result<Url> {
        Ok(request.build(self.network.base_url())?)
    }

    /// One GET, returning the body of a 2xx answer.
    async fn send(&self, url: Url) -> std::result::Result<Bytes, TransportError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP error! status: {status} ({url})");
            return Err(TransportError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;
        log::trace!("response body: {}", String::from_utf8_lossy(&body));
        Ok(body)
    }

    /// Validate, send and decode `request`, keeping the envelope.
    pub async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<ApiEnvelope<T>> {
        let url = self.url_for(&request)?;
        let body = self.send(url).await?;
        envelope::decode(&body)
    }

    /// Validate, send and decode `request` into its payload.
    pub async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.fetch_envelope(request)
            .await
            .map(ApiEnvelope::into_data)
    }

    /// Like [`fetch`](Self::fetch), but gives up once `deadline` passes.
    pub async fn fetch_before<T: DeserializeOwned>(
        &self,
        request: Request,
        deadline: Instant,
    ) -> Result<T> {
        let url = self.url_for(&request)?;
        let body = tokio::time::timeout_at(deadline, self.send(url.clone()))
            .await
            .map_err(|_| TransportError::DeadlineElapsed {
                url: url.to_string(),
            })??;
        envelope::decode(&body).map(ApiEnvelope::into_data)
    }

    async fn call(&self, request: Request) -> Result<Value> {
        self.fetch(request).await
    }

    // ── Tokens ───────────────────────────────────────────────────

    /// Returns the summary of a fungible token.
    pub async fn fungible_token(&self, token_address: &str) -> Result<TokenInfo> {
        self.fetch(Request::new(Endpoint::FungibleToken).query("tokenAddress", token_address))
            .await
    }

    /// Returns holders of a fungible token, optionally narrowed to one holder.
    pub async fn token_holders(
        &self,
        token_address: &str,
        paging: Paging,
        holder_address: Option<&str>,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TokenHolders)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .query_opt("holderAddress", holder_address),
        )
        .await
    }

    /// Returns burns of a fungible token.
    pub async fn token_burns(
        &self,
        token_address: &str,
        paging: Paging,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TokenBurns)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .block_range(range),
        )
        .await
    }

    /// Returns transfers of a fungible token.
    pub async fn token_transfers(
        &self,
        token_address: &str,
        paging: Paging,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TokenTransfers)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .block_range(range),
        )
        .await
    }

    // ── NFTs ─────────────────────────────────────────────────────

    /// Returns a single NFT item.
    pub async fn nft_item(&self, nft_address: &str, token_id: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::NftItem)
                .query("nftAddress", nft_address)
                .query("tokenId", token_id),
        )
        .await
    }

    /// Returns collection information for an NFT contract.
    pub async fn nft_info(&self, token_address: &str) -> Result<Value> {
        self.call(Request::new(Endpoint::NftInfo).path_arg("tokenAddress", token_address))
            .await
    }

    /// Returns holders of an NFT collection, optionally for a single token id.
    pub async fn nft_holders(
        &self,
        token_address: &str,
        paging: Paging,
        token_id: Option<&str>,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::NftHolders)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .query_opt("tokenId", token_id),
        )
        .await
    }

    /// Returns transfers of an NFT collection.
    pub async fn nft_transfers(
        &self,
        token_address: &str,
        paging: Paging,
        token_id: Option<&str>,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::NftTransfers)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .query_opt("tokenId", token_id)
                .block_range(range),
        )
        .await
    }

    /// Returns the token inventory of an NFT collection, optionally filtered by keyword.
    pub async fn nft_inventories(
        &self,
        token_address: &str,
        paging: Paging,
        keyword: Option<&str>,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::NftInventories)
                .path_arg("tokenAddress", token_address)
                .paging(paging)
                .query_opt("keyword", keyword),
        )
        .await
    }

    // ── Contracts ────────────────────────────────────────────────

    /// Returns the creation bytecode of a contract.
    pub async fn contract_creation_code(&self, contract_address: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::ContractCreationCode)
                .query("contractAddress", contract_address),
        )
        .await
    }

    /// Returns the verified source code of a contract.
    pub async fn contract_source_code(&self, contract_address: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::ContractSourceCode).query("contractAddress", contract_address),
        )
        .await
    }

    /// Returns information about a single contract.
    pub async fn contract_info(&self, contract_address: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::ContractInfo).path_arg("contractAddress", contract_address),
        )
        .await
    }

    /// Returns information about several contracts in one call.
    pub async fn contracts_info<S: AsRef<str>>(&self, contract_addresses: &[S]) -> Result<Value> {
        self.call(
            Request::new(Endpoint::ContractsInfo)
                .query_list("contractAddresses", contract_addresses),
        )
        .await
    }

    /// Returns the ABI of a verified contract.
    pub async fn contract_abi(&self, contract_address: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::ContractAbi).path_arg("contractAddress", contract_address),
        )
        .await
    }

    // ── Blocks ───────────────────────────────────────────────────

    /// Returns the latest block.
    pub async fn latest_block(&self) -> Result<Value> {
        self.call(Request::new(Endpoint::LatestBlock)).await
    }

    /// Returns burns in the latest blocks.
    pub async fn latest_block_burns(&self, paging: Paging) -> Result<Value> {
        self.call(Request::new(Endpoint::LatestBlockBurns).paging(paging))
            .await
    }

    /// Returns block rewards, looked up through the `latest` resource.
    pub async fn latest_block_rewards(&self, block_number: u64) -> Result<Value> {
        self.call(Request::new(Endpoint::LatestBlockRewards).query("blockNumber", block_number))
            .await
    }

    /// Returns a block by number.
    pub async fn block(&self, block_number: u64) -> Result<Value> {
        self.call(Request::new(Endpoint::Blocks).query("blockNumber", block_number))
            .await
    }

    /// Returns a page of blocks, optionally within a block range.
    pub async fn blocks(
        &self,
        block_number: u64,
        range: BlockRange,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::Blocks)
                .query("blockNumber", block_number)
                .block_range(range)
                .paging(paging),
        )
        .await
    }

    /// Returns the blocks produced at a unix timestamp (seconds).
    pub async fn blocks_by_timestamp(&self, timestamp: i64) -> Result<Value> {
        if timestamp <= 0 {
            return Err(ValidationError::NonPositiveTimestamp(timestamp).into());
        }
        self.call(Request::new(Endpoint::BlocksByTimestamp).path_arg("timestamp", timestamp))
            .await
    }

    /// Returns the blocks produced at `time`, truncated to whole seconds.
    pub async fn blocks_at(&self, time: DateTime<Utc>) -> Result<Value> {
        self.blocks_by_timestamp(time.timestamp()).await
    }

    /// Returns burns in a block.
    pub async fn block_burns(&self, block_number: u64) -> Result<Value> {
        self.call(Request::new(Endpoint::BlockBurns).path_arg("blockNumber", block_number))
            .await
    }

    /// Returns rewards of a block.
    pub async fn block_rewards(&self, block_number: u64) -> Result<Value> {
        self.call(Request::new(Endpoint::BlockRewards).path_arg("blockNumber", block_number))
            .await
    }

    /// Returns internal transactions of a block.
    pub async fn block_internal_transactions(
        &self,
        block_number: u64,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::BlockInternalTransactions)
                .path_arg("blockNumber", block_number)
                .paging(paging),
        )
        .await
    }

    /// Returns transactions of a block, optionally of one transaction type.
    pub async fn block_transactions(
        &self,
        block_number: u64,
        transaction_type: Option<&str>,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::BlockTransactions)
                .path_arg("blockNumber", block_number)
                .query_opt("type", transaction_type)
                .paging(paging),
        )
        .await
    }

    // ── Transactions ─────────────────────────────────────────────

    /// Returns a transaction by hash.
    pub async fn transaction(&self, transaction_hash: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::Transaction).path_arg("transactionHash", transaction_hash),
        )
        .await
    }

    /// Returns the execution status of a transaction.
    pub async fn transaction_status(&self, transaction_hash: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionStatus)
                .path_arg("transactionHash", transaction_hash),
        )
        .await
    }

    /// Returns the receipt status of a transaction.
    pub async fn transaction_receipt_status(&self, transaction_hash: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionReceiptStatus)
                .query("transactionHash", transaction_hash),
        )
        .await
    }

    /// Returns the decoded input data of a transaction.
    pub async fn transaction_input_data(&self, transaction_hash: &str) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionInputData)
                .path_arg("transactionHash", transaction_hash),
        )
        .await
    }

    /// Returns event logs emitted by a transaction, optionally for one event signature.
    pub async fn transaction_event_logs(
        &self,
        transaction_hash: &str,
        paging: Paging,
        signature: Option<&str>,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionEventLogs)
                .path_arg("transactionHash", transaction_hash)
                .paging(paging)
                .query_opt("signature", signature),
        )
        .await
    }

    /// Returns internal transactions of a transaction.
    pub async fn transaction_internal_transactions(
        &self,
        transaction_hash: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionInternalTransactions)
                .path_arg("transactionHash", transaction_hash)
                .paging(paging),
        )
        .await
    }

    /// Returns fungible token transfers of a transaction.
    pub async fn transaction_token_transfers(
        &self,
        transaction_hash: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionTokenTransfers)
                .path_arg("transactionHash", transaction_hash)
                .paging(paging),
        )
        .await
    }

    /// Returns NFT transfers of a transaction.
    pub async fn transaction_nft_transfers(
        &self,
        transaction_hash: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::TransactionNftTransfers)
                .path_arg("transactionHash", transaction_hash)
                .paging(paging),
        )
        .await
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Returns account information.
    pub async fn account_info(&self, account_address: &str) -> Result<Value> {
        self.call(Request::new(Endpoint::AccountInfo).path_arg("accountAddress", account_address))
            .await
    }

    /// Returns the account key update history.
    pub async fn account_key_histories(
        &self,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.account_listing(Endpoint::AccountKeyHistories, account_address, paging)
            .await
    }

    /// Returns fungible token balances held by an account.
    pub async fn account_token_balances(
        &self,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.account_listing(Endpoint::AccountTokenBalances, account_address, paging)
            .await
    }

    /// Returns token details for an account.
    pub async fn account_token_details(
        &self,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.account_listing(Endpoint::AccountTokenDetails, account_address, paging)
            .await
    }

    /// Returns KIP-17 NFT balances held by an account.
    pub async fn account_kip17_nft_balances(
        &self,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.account_listing(Endpoint::AccountKip17NftBalances, account_address, paging)
            .await
    }

    /// Returns KIP-37 NFT balances held by an account.
    pub async fn account_kip37_nft_balances(
        &self,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.account_listing(Endpoint::AccountKip37NftBalances, account_address, paging)
            .await
    }

    /// Returns fungible token transfers of an account, optionally for one token contract.
    pub async fn account_token_transfers(
        &self,
        account_address: &str,
        paging: Paging,
        contract_address: Option<&str>,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::AccountTokenTransfers)
                .path_arg("accountAddress", account_address)
                .paging(paging)
                .query_opt("contractAddress", contract_address)
                .block_range(range),
        )
        .await
    }

    /// Returns NFT transfers of an account, optionally for one NFT contract.
    pub async fn account_nft_transfers(
        &self,
        account_address: &str,
        paging: Paging,
        contract_address: Option<&str>,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::AccountNftTransfers)
                .path_arg("accountAddress", account_address)
                .paging(paging)
                .query_opt("contractAddress", contract_address)
                .block_range(range),
        )
        .await
    }

    /// Returns event logs emitted by an account, optionally for one event signature.
    pub async fn account_event_logs(
        &self,
        account_address: &str,
        paging: Paging,
        signature: Option<&str>,
        range: BlockRange,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::AccountEventLogs)
                .path_arg("accountAddress", account_address)
                .paging(paging)
                .query_opt("signature", signature)
                .block_range(range),
        )
        .await
    }

    /// Returns transactions whose fee was paid by an account (fee delegation).
    pub async fn account_fee_paid_transactions(
        &self,
        account_address: &str,
        paging: Paging,
        range: BlockRange,
        transaction_type: Option<&str>,
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::AccountFeePaidTransactions)
                .path_arg("accountAddress", account_address)
                .paging(paging)
                .block_range(range)
                .query_opt("type", transaction_type),
        )
        .await
    }

    /// Returns transactions of an account.
    ///
    /// `directions` is sent comma-joined and left out when empty.
    pub async fn account_transactions<S: AsRef<str>>(
        &self,
        account_address: &str,
        paging: Paging,
        range: BlockRange,
        transaction_type: Option<&str>,
        directions: &[S],
    ) -> Result<Value> {
        self.call(
            Request::new(Endpoint::AccountTransactions)
                .path_arg("accountAddress", account_address)
                .paging(paging)
                .block_range(range)
                .query_opt("type", transaction_type)
                .query_list_opt("directions", directions),
        )
        .await
    }

    async fn account_listing(
        &self,
        endpoint: Endpoint,
        account_address: &str,
        paging: Paging,
    ) -> Result<Value> {
        self.call(
            Request::new(endpoint)
                .path_arg("accountAddress", account_address)
                .paging(paging),
        )
        .await
    }
}
