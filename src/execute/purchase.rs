use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{CONFIG, RATE_SCALE, TOTAL_BASE_PURCHASED, WHITELIST};

/// Buy sale tokens with `base_amount` of the base token.
///
/// Every gate runs before any state write; the two CW20 transfers are
/// emitted only after the quota bookkeeping is committed, so a failure in
/// either ledger rolls the whole purchase back and a reentrant call can
/// never observe stale quotas.
pub fn execute_purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    base_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let total_purchased = TOTAL_BASE_PURCHASED.load(deps.storage)?;
    let now = env.block.time.seconds();

    if !config.is_sale {
        return Err(ContractError::SaleNotActive);
    }
    if now < config.start_time {
        return Err(ContractError::SaleNotStarted {
            start: config.start_time,
        });
    }
    if now > config.end_time {
        return Err(ContractError::SaleEnded {
            end: config.end_time,
        });
    }

    let new_total = total_purchased.checked_add(base_amount)?;
    if new_total > config.limit_base_amount {
        return Err(ContractError::SoldOut {
            limit: config.limit_base_amount.to_string(),
            purchased: total_purchased.to_string(),
        });
    }

    let mut entry = WHITELIST
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if !entry.is_white {
        return Err(ContractError::NotWhitelisted);
    }

    let new_purchased = entry.purchased_amount.checked_add(base_amount)?;
    if new_purchased > entry.max_allowance {
        return Err(ContractError::AllowanceExceeded {
            max_allowance: entry.max_allowance.to_string(),
            purchased: entry.purchased_amount.to_string(),
        });
    }

    if base_amount < config.min_base_amount || base_amount > config.max_base_amount {
        return Err(ContractError::AmountOutOfBounds {
            min: config.min_base_amount.to_string(),
            max: config.max_base_amount.to_string(),
        });
    }

    let base_token = config.base_token.ok_or(ContractError::TokenNotSet {
        token: "base".to_string(),
    })?;
    let sale_token = config.sale_token.ok_or(ContractError::TokenNotSet {
        token: "sale".to_string(),
    })?;

    // sale_amount = floor(base_amount * sale_rate / 10^18), 256-bit intermediate
    let sale_amount =
        base_amount.checked_multiply_ratio(config.sale_rate, Uint128::new(RATE_SCALE))?;
    if sale_amount.is_zero() {
        return Err(ContractError::ZeroSaleAmount);
    }

    // The pool must cover the payout; a short pool is a hard failure, not
    // a partial fill.
    let pool: BalanceResponse = deps.querier.query_wasm_smart(
        sale_token.to_string(),
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if pool.balance < sale_amount {
        return Err(ContractError::InsufficientContractBalance {
            have: pool.balance.to_string(),
            need: sale_amount.to_string(),
        });
    }

    // Quota bookkeeping first, transfers after.
    entry.purchased_amount = new_purchased;
    WHITELIST.save(deps.storage, &info.sender, &entry)?;
    TOTAL_BASE_PURCHASED.save(deps.storage, &new_total)?;

    // Pull base tokens from the buyer (requires prior approval), then pay
    // out sale tokens from the pool.
    let pull_base = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: base_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount: base_amount,
        })?,
        funds: vec![],
    });
    let push_sale = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: sale_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: sale_amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull_base)
        .add_message(push_sale)
        .add_attribute("action", "purchase_sale_token")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("base_amount", base_amount.to_string())
        .add_attribute("sale_amount", sale_amount.to_string())
        .add_attribute("total_base_purchased", new_total.to_string()))
}
