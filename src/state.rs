use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Fixed-point scale for `sale_rate`: 10^18 = 1.0 sale token per base token.
pub const RATE_SCALE: u128 = 1_000_000_000_000_000_000;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Base token CW20 contract (what buyers pay with). None until configured.
    pub base_token: Option<Addr>,
    /// Sale token CW20 contract (what buyers receive). None until configured.
    pub sale_token: Option<Addr>,
    /// Sale-token units per base-token unit, scaled by 10^18.
    pub sale_rate: Uint128,
    /// Whether purchases are accepted at all.
    pub is_sale: bool,
    /// Sale window bounds, unix seconds. Purchases accepted in [start, end].
    pub start_time: u64,
    pub end_time: u64,
    /// Per-purchase bounds on the base amount.
    pub min_base_amount: Uint128,
    pub max_base_amount: Uint128,
    /// Aggregate cap on base-token intake across the whole sale.
    pub limit_base_amount: Uint128,
}

#[cw_serde]
pub struct WhiteEntry {
    pub is_white: bool,
    /// Lifetime cap on this address's base-token spend.
    pub max_allowance: Uint128,
    /// Running total of base tokens this address has spent. Only increases.
    pub purchased_amount: Uint128,
}

impl Default for WhiteEntry {
    fn default() -> Self {
        Self {
            is_white: false,
            max_allowance: Uint128::zero(),
            purchased_amount: Uint128::zero(),
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const WHITELIST: Map<&Addr, WhiteEntry> = Map::new("whitelist");

/// Sum of all successful purchases' base amounts. Fed only by the purchase
/// path; withdrawals and burns never touch it.
pub const TOTAL_BASE_PURCHASED: Item<Uint128> = Item::new("total_base_purchased");
