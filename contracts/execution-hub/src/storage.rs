use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use agentlease_lib::ContractError;

pub const EXEC_CTR_KEY: Symbol = symbol_short!("exec_ctr");

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    LeaseManager,
    Router,
}

fn get_address(env: &Env, key: &DataKey) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_lease_manager(env: &Env, lease_manager: &Address) {
    env.storage().instance().set(&DataKey::LeaseManager, lease_manager);
}

pub fn get_lease_manager(env: &Env) -> Result<Address, ContractError> {
    get_address(env, &DataKey::LeaseManager)
}

pub fn set_router(env: &Env, router: &Address) {
    env.storage().instance().set(&DataKey::Router, router);
}

pub fn get_router(env: &Env) -> Result<Address, ContractError> {
    get_address(env, &DataKey::Router)
}

pub fn swap_count(env: &Env) -> u64 {
    env.storage().instance().get(&EXEC_CTR_KEY).unwrap_or(0)
}

pub fn increment_swap_count(env: &Env) -> Result<u64, ContractError> {
    let next = swap_count(env)
        .checked_add(1)
        .ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&EXEC_CTR_KEY, &next);
    Ok(next)
}
