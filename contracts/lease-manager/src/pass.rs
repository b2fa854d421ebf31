//! Access pass registry.
//!
//! A pass is a counted token keyed by the composite pass id. It grants
//! execution rights while its holder has a positive balance and the stored
//! expiry is still ahead of the ledger clock. Passes are bearer credentials:
//! whoever holds the unit holds the permission.
use soroban_sdk::{Address, Env};

use agentlease_lib::{pass_id, validation::is_null_identity, ContractError, PASS_UNITS_PER_LEASE};

use crate::storage;

/// Preconditions of [`mint`], checked up front so lease creation can refuse
/// before any payment moves.
pub fn ensure_mintable(env: &Env, holder: &Address, expires_at: u64) -> Result<(), ContractError> {
    if is_null_identity(env, holder) {
        return Err(ContractError::InvalidHolder);
    }
    if expires_at <= env.ledger().timestamp() {
        return Err(ContractError::ExpiryNotFuture);
    }
    Ok(())
}

pub fn mint(
    env: &Env,
    holder: &Address,
    agent_id: u64,
    lease_id: u64,
    expires_at: u64,
) -> Result<(), ContractError> {
    ensure_mintable(env, holder, expires_at)?;

    let id = pass_id(agent_id, lease_id);
    let units = storage::pass_balance(env, holder, id)
        .checked_add(PASS_UNITS_PER_LEASE)
        .ok_or(ContractError::ArithmeticOverflow)?;

    storage::set_pass_expiry(env, id, expires_at);
    storage::set_pass_holder(env, id, Some(holder));
    storage::set_pass_balance(env, holder, id, units);
    Ok(())
}

/// Remove the pass from `holder` and clear its expiry. Burning a pass the
/// holder does not have is an error, never a wrap.
pub fn burn(env: &Env, holder: &Address, agent_id: u64, lease_id: u64) -> Result<(), ContractError> {
    let id = pass_id(agent_id, lease_id);
    let units = storage::pass_balance(env, holder, id)
        .checked_sub(PASS_UNITS_PER_LEASE)
        .ok_or(ContractError::InsufficientBalance)?;

    storage::set_pass_balance(env, holder, id, units);
    storage::set_pass_expiry(env, id, 0);
    storage::set_pass_holder(env, id, None);
    Ok(())
}

pub fn is_valid(env: &Env, user: &Address, agent_id: u64, lease_id: u64) -> bool {
    let id = pass_id(agent_id, lease_id);
    storage::pass_balance(env, user, id) > 0 && storage::pass_expiry(env, id) > env.ledger().timestamp()
}

/// Hand the pass to `to`. Expiry is untouched, so the new holder inherits
/// exactly the remaining term.
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    agent_id: u64,
    lease_id: u64,
) -> Result<(), ContractError> {
    if is_null_identity(env, to) {
        return Err(ContractError::InvalidHolder);
    }

    let id = pass_id(agent_id, lease_id);
    let from_units = storage::pass_balance(env, from, id)
        .checked_sub(PASS_UNITS_PER_LEASE)
        .ok_or(ContractError::InsufficientBalance)?;
    if from == to {
        return Ok(());
    }
    let to_units = storage::pass_balance(env, to, id)
        .checked_add(PASS_UNITS_PER_LEASE)
        .ok_or(ContractError::ArithmeticOverflow)?;

    storage::set_pass_balance(env, from, id, from_units);
    storage::set_pass_balance(env, to, id, to_units);
    storage::set_pass_holder(env, id, Some(to));
    Ok(())
}
