use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::WhiteStatusInput;
use crate::state::{WhiteEntry, CONFIG, WHITELIST};

/// Batch-upsert whitelist entries. Eligibility and allowance are
/// overwritten per pair; `purchased_amount` survives for existing rows so
/// re-whitelisting cannot reset anyone's spend history.
pub fn execute_set_white_status(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
    entries: Vec<WhiteStatusInput>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if addresses.len() != entries.len() {
        return Err(ContractError::WhitelistLengthMismatch {
            addresses: addresses.len(),
            entries: entries.len(),
        });
    }

    for (address, input) in addresses.iter().zip(entries) {
        let addr = deps.api.addr_validate(address)?;
        let mut entry = WHITELIST
            .may_load(deps.storage, &addr)?
            .unwrap_or_default();
        entry.is_white = input.is_white;
        entry.max_allowance = input.max_allowance;
        WHITELIST.save(deps.storage, &addr, &entry)?;
    }

    Ok(Response::new()
        .add_attribute("action", "set_white_status")
        .add_attribute("count", addresses.len().to_string()))
}
