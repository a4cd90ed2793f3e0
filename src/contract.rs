use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, RATE_SCALE, TOTAL_BASE_PURCHASED};

const CONTRACT_NAME: &str = "crates.io:whitelist-sale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let base_token = msg
        .base_token
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    let sale_token = msg
        .sale_token
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;

    let now = env.block.time.seconds();
    let one = Uint128::new(RATE_SCALE);

    // Defaults: 1:1 rate, closed sale, empty window at creation time,
    // one whole token for every amount bound.
    let config = Config {
        owner: info.sender,
        base_token,
        sale_token,
        sale_rate: one,
        is_sale: false,
        start_time: now,
        end_time: now,
        min_base_amount: one,
        max_base_amount: one,
        limit_base_amount: one,
    };

    CONFIG.save(deps.storage, &config)?;
    TOTAL_BASE_PURCHASED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PurchaseSaleToken { base_amount } => {
            crate::execute::purchase::execute_purchase(deps, env, info, base_amount)
        }
        ExecuteMsg::SetBaseToken { address } => {
            crate::execute::config::execute_set_base_token(deps, info, address)
        }
        ExecuteMsg::SetSaleToken { address } => {
            crate::execute::config::execute_set_sale_token(deps, info, address)
        }
        ExecuteMsg::SetSaleRate { rate } => {
            crate::execute::config::execute_set_sale_rate(deps, info, rate)
        }
        ExecuteMsg::SetIsSale { is_sale } => {
            crate::execute::config::execute_set_is_sale(deps, info, is_sale)
        }
        ExecuteMsg::SetStartTime { time } => {
            crate::execute::config::execute_set_start_time(deps, info, time)
        }
        ExecuteMsg::SetEndTime { time } => {
            crate::execute::config::execute_set_end_time(deps, info, time)
        }
        ExecuteMsg::SetMinBaseAmount { amount } => {
            crate::execute::config::execute_set_min_base_amount(deps, info, amount)
        }
        ExecuteMsg::SetMaxBaseAmount { amount } => {
            crate::execute::config::execute_set_max_base_amount(deps, info, amount)
        }
        ExecuteMsg::SetLimitBaseAmount { amount } => {
            crate::execute::config::execute_set_limit_base_amount(deps, info, amount)
        }
        ExecuteMsg::SetWhiteStatus { addresses, entries } => {
            crate::execute::whitelist::execute_set_white_status(deps, info, addresses, entries)
        }
        ExecuteMsg::AllocateSaleToken { amount } => {
            crate::execute::admin::execute_allocate_sale_token(deps, env, info, amount)
        }
        ExecuteMsg::BurnBaseToken { amount } => {
            crate::execute::admin::execute_burn_base_token(deps, env, info, amount)
        }
        ExecuteMsg::WithdrawBaseToken { recipient, amount } => {
            crate::execute::admin::execute_withdraw_base_token(deps, env, info, recipient, amount)
        }
        ExecuteMsg::WithdrawSaleToken { recipient, amount } => {
            crate::execute::admin::execute_withdraw_sale_token(deps, env, info, recipient, amount)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::WhiteStatus { address } => {
            to_json_binary(&crate::query::query_white_status(deps, address)?)
        }
        QueryMsg::SaleStatus {} => to_json_binary(&crate::query::query_sale_status(deps, env)?),
    }
}
