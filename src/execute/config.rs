use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// All setters are owner-only single-field updates. The two cross-field
/// invariants (`end_time > start_time`, `max >= min`) are enforced at the
/// write that completes the pair; see `execute_set_end_time` and
/// `execute_set_max_base_amount`.
fn load_config_for_owner(
    deps: &DepsMut,
    info: &MessageInfo,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

pub fn execute_set_base_token(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    let addr = deps.api.addr_validate(&address)?;
    config.base_token = Some(addr.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_base_token")
        .add_attribute("base_token", addr.to_string()))
}

pub fn execute_set_sale_token(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    let addr = deps.api.addr_validate(&address)?;
    config.sale_token = Some(addr.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_sale_token")
        .add_attribute("sale_token", addr.to_string()))
}

pub fn execute_set_sale_rate(
    deps: DepsMut,
    info: MessageInfo,
    rate: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    config.sale_rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_sale_rate")
        .add_attribute("sale_rate", rate.to_string()))
}

pub fn execute_set_is_sale(
    deps: DepsMut,
    info: MessageInfo,
    is_sale: bool,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    config.is_sale = is_sale;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_is_sale")
        .add_attribute("is_sale", is_sale.to_string()))
}

/// The start time is settable freely, even past a configured end time.
/// The window only has to be consistent by the time `SetEndTime` runs;
/// an inverted window accepts no purchases.
pub fn execute_set_start_time(
    deps: DepsMut,
    info: MessageInfo,
    time: u64,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    config.start_time = time;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_start_time")
        .add_attribute("start_time", time.to_string()))
}

pub fn execute_set_end_time(
    deps: DepsMut,
    info: MessageInfo,
    time: u64,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    if time <= config.start_time {
        return Err(ContractError::InvalidTimeWindow {
            start: config.start_time,
            end: time,
        });
    }
    config.end_time = time;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_end_time")
        .add_attribute("end_time", time.to_string()))
}

pub fn execute_set_min_base_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    config.min_base_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_min_base_amount")
        .add_attribute("min_base_amount", amount.to_string()))
}

pub fn execute_set_max_base_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    if amount < config.min_base_amount {
        return Err(ContractError::InvalidAmountBound {
            min: config.min_base_amount.to_string(),
            max: amount.to_string(),
        });
    }
    config.max_base_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_max_base_amount")
        .add_attribute("max_base_amount", amount.to_string()))
}

pub fn execute_set_limit_base_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_config_for_owner(&deps, &info)?;
    config.limit_base_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_limit_base_amount")
        .add_attribute("limit_base_amount", amount.to_string()))
}
