use soroban_sdk::{Address, Env, String, Vec};

use crate::{errors::ContractError, MAX_STRING_LENGTH};

pub fn validate_metadata(metadata: &String) -> Result<(), ContractError> {
    if metadata.len() == 0 || metadata.len() > MAX_STRING_LENGTH {
        return Err(ContractError::InvalidMetadata);
    }
    Ok(())
}

pub fn validate_rate(rate: i128) -> Result<(), ContractError> {
    if rate <= 0 {
        return Err(ContractError::InvalidRate);
    }
    Ok(())
}

pub fn validate_path(path: &Vec<Address>) -> Result<(), ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidPath);
    }
    Ok(())
}

/// Soroban has no all-zero address. The calling contract's own address plays
/// the null identity: it may never hold a pass or receive swap output.
pub fn is_null_identity(env: &Env, address: &Address) -> bool {
    address == &env.current_contract_address()
}

/// `rate * duration`, the exact amount a lease of `duration` seconds costs.
pub fn lease_price(rate: i128, duration: u64) -> Result<i128, ContractError> {
    rate.checked_mul(duration as i128)
        .ok_or(ContractError::ArithmeticOverflow)
}
