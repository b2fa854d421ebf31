use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};

use agentlease_lib::{Agent, ContractError, Lease, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Token used to pay for leases
    PaymentToken,
    /// Agent ownership ledger
    AgentNft,
    AgentCounter,
    LeaseCounter,
    Agent(u64),
    Lease(u64),
    /// Append-only lease ids per agent
    AgentLeases(u64),
    /// Pass units held: (holder, pass id)
    PassBalance(Address, u128),
    PassExpiry(u128),
    /// Current bearer of a pass
    PassHolder(u128),
}

/* ---------------- CONFIG ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_agent_nft(env: &Env, agent_nft: &Address) {
    env.storage().instance().set(&DataKey::AgentNft, agent_nft);
}

pub fn get_agent_nft(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::AgentNft)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- COUNTERS ---------------- */

fn next_id(env: &Env, key: &DataKey) -> Result<u64, ContractError> {
    let current: u64 = env.storage().instance().get(key).unwrap_or(0);
    let next = current.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(key, &next);
    Ok(next)
}

/// Ids start at 1; 0 never names a record.
pub fn next_agent_id(env: &Env) -> Result<u64, ContractError> {
    next_id(env, &DataKey::AgentCounter)
}

pub fn next_lease_id(env: &Env) -> Result<u64, ContractError> {
    next_id(env, &DataKey::LeaseCounter)
}

pub fn agent_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::AgentCounter).unwrap_or(0)
}

pub fn lease_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::LeaseCounter).unwrap_or(0)
}

/* ---------------- RECORDS ---------------- */

fn persist<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

fn load<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    env.storage().persistent().get(key)
}

pub fn save_agent(env: &Env, agent: &Agent) {
    persist(env, &DataKey::Agent(agent.id), agent);
}

pub fn load_agent(env: &Env, agent_id: u64) -> Option<Agent> {
    load(env, &DataKey::Agent(agent_id))
}

pub fn save_lease(env: &Env, lease: &Lease) {
    persist(env, &DataKey::Lease(lease.id), lease);
}

pub fn load_lease(env: &Env, lease_id: u64) -> Option<Lease> {
    load(env, &DataKey::Lease(lease_id))
}

pub fn agent_leases(env: &Env, agent_id: u64) -> Vec<u64> {
    load(env, &DataKey::AgentLeases(agent_id)).unwrap_or_else(|| Vec::new(env))
}

pub fn append_agent_lease(env: &Env, agent_id: u64, lease_id: u64) {
    let mut ids = agent_leases(env, agent_id);
    ids.push_back(lease_id);
    persist(env, &DataKey::AgentLeases(agent_id), &ids);
}

/* ---------------- ACCESS PASSES ---------------- */

pub fn pass_balance(env: &Env, holder: &Address, pass_id: u128) -> u32 {
    load(env, &DataKey::PassBalance(holder.clone(), pass_id)).unwrap_or(0)
}

pub fn set_pass_balance(env: &Env, holder: &Address, pass_id: u128, units: u32) {
    let key = DataKey::PassBalance(holder.clone(), pass_id);
    if units == 0 {
        env.storage().persistent().remove(&key);
    } else {
        persist(env, &key, &units);
    }
}

pub fn pass_expiry(env: &Env, pass_id: u128) -> u64 {
    load(env, &DataKey::PassExpiry(pass_id)).unwrap_or(0)
}

pub fn set_pass_expiry(env: &Env, pass_id: u128, expires_at: u64) {
    persist(env, &DataKey::PassExpiry(pass_id), &expires_at);
}

pub fn pass_holder(env: &Env, pass_id: u128) -> Option<Address> {
    load(env, &DataKey::PassHolder(pass_id))
}

pub fn set_pass_holder(env: &Env, pass_id: u128, holder: Option<&Address>) {
    let key = DataKey::PassHolder(pass_id);
    match holder {
        Some(holder) => persist(env, &key, holder),
        None => env.storage().persistent().remove(&key),
    }
}
