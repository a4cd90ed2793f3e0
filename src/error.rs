use cosmwasm_std::{CheckedMultiplyRatioError, DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("End time {end} must be after start time {start}")]
    InvalidTimeWindow { start: u64, end: u64 },

    #[error("Max base amount {max} must not be below min base amount {min}")]
    InvalidAmountBound { min: String, max: String },

    #[error("Sale is not active")]
    SaleNotActive,

    #[error("Sale has not started yet (starts at {start})")]
    SaleNotStarted { start: u64 },

    #[error("Sale has already ended (ended at {end})")]
    SaleEnded { end: u64 },

    #[error("Sold out: limit is {limit}, already purchased {purchased}")]
    SoldOut { limit: String, purchased: String },

    #[error("Address is not whitelisted")]
    NotWhitelisted,

    #[error("Purchase would exceed allowance: max {max_allowance}, already spent {purchased}")]
    AllowanceExceeded {
        max_allowance: String,
        purchased: String,
    },

    #[error("Purchase amount out of bounds: must be between {min} and {max}")]
    AmountOutOfBounds { min: String, max: String },

    #[error("Owner's sale-token balance is insufficient: have {have}, need {need}")]
    InsufficientOwnerBalance { have: String, need: String },

    #[error("Contract balance is insufficient: have {have}, need {need}")]
    InsufficientContractBalance { have: String, need: String },

    #[error("{token} token is not configured")]
    TokenNotSet { token: String },

    #[error("Whitelist batch mismatch: {addresses} addresses, {entries} entries")]
    WhitelistLengthMismatch { addresses: usize, entries: usize },

    #[error("Computed sale amount is zero")]
    ZeroSaleAmount,
}
