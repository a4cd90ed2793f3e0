use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Base token CW20 contract address (optional, can be set later)
    pub base_token: Option<String>,
    /// Sale token CW20 contract address (optional, can be set later)
    pub sale_token: Option<String>,
}

/// Whitelist entry as submitted by the owner. `purchased_amount` is never
/// settable from outside; it is owned by the purchase path.
#[cw_serde]
pub struct WhiteStatusInput {
    pub is_white: bool,
    pub max_allowance: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy sale tokens by spending `base_amount` of the base token.
    /// Requires a prior CW20 `IncreaseAllowance` on the base token
    /// granting this contract at least `base_amount`.
    PurchaseSaleToken { base_amount: Uint128 },

    // ---- Owner: sale configuration ----
    /// Set the base token CW20 contract address
    SetBaseToken { address: String },
    /// Set the sale token CW20 contract address
    SetSaleToken { address: String },
    /// Set the conversion rate: sale units per base unit, scaled by 10^18
    SetSaleRate { rate: Uint128 },
    /// Open or close the sale
    SetIsSale { is_sale: bool },
    /// Set the sale window start (unix seconds)
    SetStartTime { time: u64 },
    /// Set the sale window end (unix seconds). Must be after the current start.
    SetEndTime { time: u64 },
    /// Set the per-purchase minimum base amount
    SetMinBaseAmount { amount: Uint128 },
    /// Set the per-purchase maximum base amount. Must not be below the minimum.
    SetMaxBaseAmount { amount: Uint128 },
    /// Set the aggregate cap on base-token intake
    SetLimitBaseAmount { amount: Uint128 },

    /// Owner: batch-upsert whitelist entries. `addresses` and `entries`
    /// are matched pairwise and must have equal length.
    SetWhiteStatus {
        addresses: Vec<String>,
        entries: Vec<WhiteStatusInput>,
    },

    // ---- Owner: fund movement ----
    /// Pull `amount` of sale token from the owner into the contract,
    /// building sellable inventory. Owner must approve first.
    AllocateSaleToken { amount: Uint128 },
    /// Burn `amount` of the base token out of the contract's holdings
    BurnBaseToken { amount: Uint128 },
    /// Send `amount` of the contract's base-token holdings to `recipient`
    WithdrawBaseToken { recipient: String, amount: Uint128 },
    /// Send `amount` of the contract's sale-token holdings to `recipient`
    WithdrawSaleToken { recipient: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full sale configuration plus the purchase aggregate
    #[returns(ConfigResponse)]
    Config {},

    /// Whitelist entry for one address (all-zero if absent)
    #[returns(WhiteStatusResponse)]
    WhiteStatus { address: String },

    /// Live token balances held by the contract, plus sale progress
    #[returns(SaleStatusResponse)]
    SaleStatus {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub base_token: Option<Addr>,
    pub sale_token: Option<Addr>,
    pub sale_rate: Uint128,
    pub is_sale: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub min_base_amount: Uint128,
    pub max_base_amount: Uint128,
    pub limit_base_amount: Uint128,
    pub total_base_purchased: Uint128,
}

#[cw_serde]
pub struct WhiteStatusResponse {
    pub is_white: bool,
    pub max_allowance: Uint128,
    pub purchased_amount: Uint128,
}

#[cw_serde]
pub struct SaleStatusResponse {
    /// Base tokens held by the contract (zero if no base token configured)
    pub base_balance: Uint128,
    /// Sale tokens still available in the pool (zero if no sale token configured)
    pub sale_available: Uint128,
    pub total_base_purchased: Uint128,
    pub is_sale: bool,
}
