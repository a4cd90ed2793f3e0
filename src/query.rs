use cosmwasm_std::{Addr, Deps, Env, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::msg::{ConfigResponse, SaleStatusResponse, WhiteStatusResponse};
use crate::state::{CONFIG, TOTAL_BASE_PURCHASED, WHITELIST};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let total_base_purchased = TOTAL_BASE_PURCHASED.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        base_token: config.base_token,
        sale_token: config.sale_token,
        sale_rate: config.sale_rate,
        is_sale: config.is_sale,
        start_time: config.start_time,
        end_time: config.end_time,
        min_base_amount: config.min_base_amount,
        max_base_amount: config.max_base_amount,
        limit_base_amount: config.limit_base_amount,
        total_base_purchased,
    })
}

pub fn query_white_status(deps: Deps, address: String) -> StdResult<WhiteStatusResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let entry = WHITELIST
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(WhiteStatusResponse {
        is_white: entry.is_white,
        max_allowance: entry.max_allowance,
        purchased_amount: entry.purchased_amount,
    })
}

pub fn query_sale_status(deps: Deps, env: Env) -> StdResult<SaleStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let total_base_purchased = TOTAL_BASE_PURCHASED.load(deps.storage)?;

    let base_balance = match &config.base_token {
        Some(token) => contract_balance(deps, token, &env.contract.address)?,
        None => Uint128::zero(),
    };
    let sale_available = match &config.sale_token {
        Some(token) => contract_balance(deps, token, &env.contract.address)?,
        None => Uint128::zero(),
    };

    Ok(SaleStatusResponse {
        base_balance,
        sale_available,
        total_base_purchased,
        is_sale: config.is_sale,
    })
}

fn contract_balance(deps: Deps, token: &Addr, contract: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token.to_string(),
        &Cw20QueryMsg::Balance {
            address: contract.to_string(),
        },
    )?;
    Ok(res.balance)
}
