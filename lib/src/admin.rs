use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{errors::ContractError, events, ADMIN_KEY};

pub const IS_PAUSED_KEY: Symbol = symbol_short!("is_paused");

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, ADMIN_KEY))
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&Symbol::new(env, ADMIN_KEY), admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, ADMIN_KEY))
        .ok_or(ContractError::NotInitialized)
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = get_admin(env)?;
    if &admin != caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn transfer_admin(
    env: &Env,
    current_admin: &Address,
    new_admin: &Address,
) -> Result<(), ContractError> {
    current_admin.require_auth();
    verify_admin(env, current_admin)?;
    set_admin(env, new_admin);
    events::admin_changed(env, current_admin, new_admin);
    Ok(())
}

/* ---------------- PAUSE SWITCH ---------------- */

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&IS_PAUSED_KEY).unwrap_or(false)
}

/// Engage or release the pause switch. Only the admin may flip it.
pub fn set_paused(env: &Env, admin: &Address, paused: bool) -> Result<(), ContractError> {
    admin.require_auth();
    verify_admin(env, admin)?;
    env.storage().instance().set(&IS_PAUSED_KEY, &paused);
    events::pause_changed(env, admin, paused);
    Ok(())
}

pub fn ensure_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}
