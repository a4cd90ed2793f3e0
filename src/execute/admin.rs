use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

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

fn cw20_balance(deps: &DepsMut, token: &Addr, address: &Addr) -> Result<Uint128, ContractError> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token.to_string(),
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}

/// Owner: pull `amount` of sale token from the owner's own balance into
/// the contract, building sellable inventory. The owner must have
/// approved this contract on the sale token first.
pub fn execute_allocate_sale_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config_for_owner(&deps, &info)?;
    let sale_token = config.sale_token.ok_or(ContractError::TokenNotSet {
        token: "sale".to_string(),
    })?;

    let owner_balance = cw20_balance(&deps, &sale_token, &config.owner)?;
    if owner_balance < amount {
        return Err(ContractError::InsufficientOwnerBalance {
            have: owner_balance.to_string(),
            need: amount.to_string(),
        });
    }

    let pull_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: sale_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: config.owner.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull_msg)
        .add_attribute("action", "allocate_sale_token")
        .add_attribute("amount", amount.to_string()))
}

/// Owner: destroy `amount` of the base token out of the contract's own
/// holdings. Irreversible; quota bookkeeping is untouched.
pub fn execute_burn_base_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config_for_owner(&deps, &info)?;
    let base_token = config.base_token.ok_or(ContractError::TokenNotSet {
        token: "base".to_string(),
    })?;

    let contract_balance = cw20_balance(&deps, &base_token, &env.contract.address)?;
    if contract_balance < amount {
        return Err(ContractError::InsufficientContractBalance {
            have: contract_balance.to_string(),
            need: amount.to_string(),
        });
    }

    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: base_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("action", "burn_base_token")
        .add_attribute("amount", amount.to_string()))
}

/// Owner: send `amount` of the contract's base-token holdings to `recipient`.
pub fn execute_withdraw_base_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config_for_owner(&deps, &info)?;
    let base_token = config.base_token.ok_or(ContractError::TokenNotSet {
        token: "base".to_string(),
    })?;

    withdraw_token(deps, env, base_token, recipient, amount, "withdraw_base_token")
}

/// Owner: send `amount` of the contract's sale-token holdings to `recipient`.
pub fn execute_withdraw_sale_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config_for_owner(&deps, &info)?;
    let sale_token = config.sale_token.ok_or(ContractError::TokenNotSet {
        token: "sale".to_string(),
    })?;

    withdraw_token(deps, env, sale_token, recipient, amount, "withdraw_sale_token")
}

fn withdraw_token(
    deps: DepsMut,
    env: Env,
    token: Addr,
    recipient: String,
    amount: Uint128,
    action: &str,
) -> Result<Response, ContractError> {
    let to = deps.api.addr_validate(&recipient)?;

    let contract_balance = cw20_balance(&deps, &token, &env.contract.address)?;
    if contract_balance < amount {
        return Err(ContractError::InsufficientContractBalance {
            have: contract_balance.to_string(),
            need: amount.to_string(),
        });
    }

    let transfer_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", action.to_string())
        .add_attribute("recipient", to.to_string())
        .add_attribute("amount", amount.to_string()))
}
