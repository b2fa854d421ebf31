#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};
use agentlease_lib::{
    admin::{get_admin, has_admin, set_admin, transfer_admin, verify_admin},
    ContractError, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};


#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Contracts allowed to mint ownership tokens
    Minters,
    /// Total ownership tokens minted
    TotalSupply,
    /// Owner of an agent token
    Owner(u64),
    /// Number of agent tokens held by an address
    Balance(Address),
}

#[contract]
pub struct AgentNFT;

#[contractimpl]
impl AgentNFT {
    /// Initialize contract with admin (one-time setup)
    pub fn init_contract(env: Env, admin: Address) -> Result<(), ContractError> {
        if has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
        env.storage().instance().set(&DataKey::TotalSupply, &0u64);
        env.storage().instance().set(&DataKey::Minters, &Vec::<Address>::new(&env));
        Ok(())
    }

    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        transfer_admin(&env, &admin, &new_admin)
    }

    /// Allow `minter` (normally the lease manager) to mint ownership tokens.
    pub fn add_approved_minter(env: Env, admin: Address, minter: Address) -> Result<(), ContractError> {
        admin.require_auth();
        verify_admin(&env, &admin)?;

        let mut minters = Self::approved_minters(env.clone());
        if !minters.contains(&minter) {
            minters.push_back(minter.clone());
            env.storage().instance().set(&DataKey::Minters, &minters);
        }

        env.events().publish((Symbol::new(&env, "minter_added"),), minter);
        Ok(())
    }

    pub fn remove_approved_minter(env: Env, admin: Address, minter: Address) -> Result<(), ContractError> {
        admin.require_auth();
        verify_admin(&env, &admin)?;

        let mut minters = Self::approved_minters(env.clone());
        if let Some(index) = minters.first_index_of(&minter) {
            minters.remove(index);
            env.storage().instance().set(&DataKey::Minters, &minters);
        }

        env.events().publish((Symbol::new(&env, "minter_removed"),), minter);
        Ok(())
    }

    pub fn approved_minters(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Minters)
            .unwrap_or_else(|| Vec::new(&env))
    }

    /// Mint the ownership token for `agent_id` to `to`.
    ///
    /// Agent ids are assigned by the minter, so each id can be minted once.
    pub fn mint(env: Env, minter: Address, to: Address, agent_id: u64) -> Result<(), ContractError> {
        minter.require_auth();

        if !Self::approved_minters(env.clone()).contains(&minter) {
            return Err(ContractError::NotApprovedMinter);
        }
        if agent_id == 0 {
            return Err(ContractError::AgentNotFound);
        }
        if env.storage().persistent().has(&DataKey::Owner(agent_id)) {
            return Err(ContractError::AgentAlreadyMinted);
        }

        let supply: u64 = env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0);
        let supply = supply.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;

        set_owner(&env, agent_id, &to);
        adjust_balance(&env, &to, 1)?;
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events().publish((Symbol::new(&env, "mint_agent"),), (agent_id, to));
        Ok(())
    }

    /// Move an agent token. Leases and passes issued against the agent stay
    /// in force; only the owner-side permissions follow the token.
    pub fn transfer_agent(env: Env, agent_id: u64, from: Address, to: Address) -> Result<(), ContractError> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), agent_id).ok_or(ContractError::AgentNotFound)?;
        if owner != from {
            return Err(ContractError::NotOwner);
        }
        if from == to {
            return Ok(());
        }

        adjust_balance(&env, &from, -1)?;
        adjust_balance(&env, &to, 1)?;
        set_owner(&env, agent_id, &to);

        env.events().publish((Symbol::new(&env, "transfer_agent"),), (agent_id, from, to));
        Ok(())
    }

    pub fn owner_of(env: Env, agent_id: u64) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner(agent_id))
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        env.storage().persistent().get(&DataKey::Balance(owner)).unwrap_or(0)
    }

    /// Get total agents minted
    pub fn total_agents(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        get_admin(&env)
    }
}

fn set_owner(env: &Env, agent_id: u64, owner: &Address) {
    let key = DataKey::Owner(agent_id);
    env.storage().persistent().set(&key, owner);
    env.storage().persistent().extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

fn adjust_balance(env: &Env, owner: &Address, delta: i64) -> Result<(), ContractError> {
    let key = DataKey::Balance(owner.clone());
    let current: u64 = env.storage().persistent().get(&key).unwrap_or(0);
    let next = current
        .checked_add_signed(delta)
        .ok_or(ContractError::InsufficientBalance)?;
    env.storage().persistent().set(&key, &next);
    env.storage().persistent().extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    Ok(())
}
