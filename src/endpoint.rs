//! Catalog of Kaiascan REST endpoints.
//!
//! Every endpoint is a plain HTTP GET. Path templates are relative to the
//! network base URL; `{name}` segments are filled from the request's path
//! arguments, in order.

/// One operation of the Kaiascan open API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Endpoint {
    // ── Tokens ───────────────────────────────────────────────────
    FungibleToken,
    TokenHolders,
    TokenBurns,
    TokenTransfers,

    // ── NFTs ─────────────────────────────────────────────────────
    NftItem,
    NftInfo,
    NftHolders,
    NftTransfers,
    NftInventories,

    // ── Contracts ────────────────────────────────────────────────
    ContractCreationCode,
    ContractSourceCode,
    ContractInfo,
    ContractsInfo,
    ContractAbi,

    // ── Blocks ───────────────────────────────────────────────────
    LatestBlock,
    LatestBlockBurns,
    LatestBlockRewards,
    Blocks,
    BlocksByTimestamp,
    BlockBurns,
    BlockRewards,
    BlockInternalTransactions,
    BlockTransactions,

    // ── Transactions ─────────────────────────────────────────────
    Transaction,
    TransactionStatus,
    TransactionReceiptStatus,
    TransactionInputData,
    TransactionEventLogs,
    TransactionInternalTransactions,
    TransactionTokenTransfers,
    TransactionNftTransfers,

    // ── Accounts ─────────────────────────────────────────────────
    AccountInfo,
    AccountKeyHistories,
    AccountTokenBalances,
    AccountTokenDetails,
    AccountKip17NftBalances,
    AccountKip37NftBalances,
    AccountTokenTransfers,
    AccountNftTransfers,
    AccountEventLogs,
    AccountFeePaidTransactions,
    AccountTransactions,
}

impl Endpoint {
    /// Every catalog entry, in declaration order.
    pub const ALL: &'static [Endpoint] = &[
        Self::FungibleToken,
        Self::TokenHolders,
        Self::TokenBurns,
        Self::TokenTransfers,
        Self::NftItem,
        Self::NftInfo,
        Self::NftHolders,
        Self::NftTransfers,
        Self::NftInventories,
        Self::ContractCreationCode,
        Self::ContractSourceCode,
        Self::ContractInfo,
        Self::ContractsInfo,
        Self::ContractAbi,
        Self::LatestBlock,
        Self::LatestBlockBurns,
        Self::LatestBlockRewards,
        Self::Blocks,
        Self::BlocksByTimestamp,
        Self::BlockBurns,
        Self::BlockRewards,
        Self::BlockInternalTransactions,
        Self::BlockTransactions,
        Self::Transaction,
        Self::TransactionStatus,
        Self::TransactionReceiptStatus,
        Self::TransactionInputData,
        Self::TransactionEventLogs,
        Self::TransactionInternalTransactions,
        Self::TransactionTokenTransfers,
        Self::TransactionNftTransfers,
        Self::AccountInfo,
        Self::AccountKeyHistories,
        Self::AccountTokenBalances,
        Self::AccountTokenDetails,
        Self::AccountKip17NftBalances,
        Self::AccountKip37NftBalances,
        Self::AccountTokenTransfers,
        Self::AccountNftTransfers,
        Self::AccountEventLogs,
        Self::AccountFeePaidTransactions,
        Self::AccountTransactions,
    ];

    /// Path template relative to the base URL, without a leading slash.
    pub const fn path_template(self) -> &'static str {
        match self {
            Self::FungibleToken => "api/v1/tokens",
            Self::TokenHolders => "api/v1/tokens/{tokenAddress}/holders",
            Self::TokenBurns => "api/v1/tokens/{tokenAddress}/burns",
            Self::TokenTransfers => "api/v1/tokens/{tokenAddress}/transfers",

            Self::NftItem => "api/v1/nfts",
            Self::NftInfo => "api/v1/nfts/{tokenAddress}",
            Self::NftHolders => "api/v1/nfts/{tokenAddress}/holders",
            Self::NftTransfers => "api/v1/nfts/{tokenAddress}/transfers",
            Self::NftInventories => "api/v1/nfts/{tokenAddress}/inventories",

            Self::ContractCreationCode => "api/v1/contracts/creation-code",
            Self::ContractSourceCode => "api/v1/contracts/source-code",
            Self::ContractInfo => "api/v1/contracts/{contractAddress}",
            Self::ContractsInfo => "api/v1/contracts",
            Self::ContractAbi => "api/v1/contracts/{contractAddress}/abi",

            Self::LatestBlock => "api/v1/blocks/latest",
            Self::LatestBlockBurns => "api/v1/blocks/latest/burns",
            Self::LatestBlockRewards => "api/v1/blocks/latest/rewards",
            Self::Blocks => "api/v1/blocks",
            Self::BlocksByTimestamp => "api/v1/blocks/timestamps/{timestamp}",
            Self::BlockBurns => "api/v1/blocks/{blockNumber}/burns",
            Self::BlockRewards => "api/v1/blocks/{blockNumber}/rewards",
            Self::BlockInternalTransactions => "api/v1/blocks/{blockNumber}/internal-transactions",
            Self::BlockTransactions => "api/v1/blocks/{blockNumber}/transactions",

            Self::Transaction => "api/v1/transactions/{transactionHash}",
            Self::TransactionStatus => "api/v1/transactions/{transactionHash}/status",
            Self::TransactionReceiptStatus => "api/v1/transaction-receipts/status",
            Self::TransactionInputData => "api/v1/transactions/{transactionHash}/input-data",
            Self::TransactionEventLogs => "api/v1/transactions/{transactionHash}/event-logs",
            Self::TransactionInternalTransactions => {
                "api/v1/transactions/{transactionHash}/internal-transactions"
            }
            Self::TransactionTokenTransfers => {
                "api/v1/transactions/{transactionHash}/token-transfers"
            }
            Self::TransactionNftTransfers => "api/v1/transactions/{transactionHash}/nft-transfers",

            Self::AccountInfo => "api/v1/accounts/{accountAddress}",
            Self::AccountKeyHistories => "api/v1/accounts/{accountAddress}/key-histories",
            Self::AccountTokenBalances => "api/v1/accounts/{accountAddress}/token-balances",
            Self::AccountTokenDetails => "api/v1/accounts/{accountAddress}/token-details",
            Self::AccountKip17NftBalances => "api/v1/accounts/{accountAddress}/nft-balances/kip17",
            Self::AccountKip37NftBalances => "api/v1/accounts/{accountAddress}/nft-balances/kip37",
            Self::AccountTokenTransfers => "api/v1/accounts/{accountAddress}/token-transfers",
            Self::AccountNftTransfers => "api/v1/accounts/{accountAddress}/nft-transfers",
            Self::AccountEventLogs => "api/v1/accounts/{accountAddress}/event-logs",
            Self::AccountFeePaidTransactions => {
                "api/v1/accounts/{accountAddress}/fee-paid-transactions"
            }
            Self::AccountTransactions => "api/v1/accounts/{accountAddress}/transactions",
        }
    }

    /// Names of the `{placeholder}` segments, in order.
    pub fn path_params(self) -> impl Iterator<Item = &'static str> {
        self.path_template().split('/').filter_map(placeholder)
    }
}

/// `{name}` → `Some("name")`, any literal segment → `None`.
pub(crate) fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
