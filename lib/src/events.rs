//! Event payloads published for off-chain indexers.
//!
//! Every event is published under a single topic symbol with a typed
//! `#[contracttype]` body, so indexers can decode them from the contract interface metadata.
use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AgentCreated {
    pub agent_id: u64,
    pub creator: Address,
    pub metadata_ref: String,
    pub lease_rate: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LeaseCreated {
    pub lease_id: u64,
    pub agent_id: u64,
    pub renter: Address,
    pub expires_at: u64,
    pub price_paid: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LeaseRevoked {
    pub lease_id: u64,
    pub agent_id: u64,
    pub revoked_by: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PassTransferred {
    pub agent_id: u64,
    pub lease_id: u64,
    pub from: Address,
    pub to: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SwapExecuted {
    pub agent_id: u64,
    pub lease_id: u64,
    pub executor: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub timestamp: u64,
}

pub fn agent_created(env: &Env, event: AgentCreated) {
    env.events().publish((Symbol::new(env, "agent_created"),), event);
}

pub fn lease_created(env: &Env, event: LeaseCreated) {
    env.events().publish((Symbol::new(env, "lease_created"),), event);
}

pub fn lease_revoked(env: &Env, event: LeaseRevoked) {
    env.events().publish((Symbol::new(env, "lease_revoked"),), event);
}

pub fn pass_transferred(env: &Env, event: PassTransferred) {
    env.events().publish((Symbol::new(env, "pass_transferred"),), event);
}

pub fn swap_executed(env: &Env, event: SwapExecuted) {
    env.events().publish((Symbol::new(env, "swap_executed"),), event);
}

pub fn pause_changed(env: &Env, admin: &Address, paused: bool) {
    let topic = if paused { "paused" } else { "unpaused" };
    env.events().publish((Symbol::new(env, topic),), admin.clone());
}

pub fn admin_changed(env: &Env, previous: &Address, next: &Address) {
    env.events()
        .publish((Symbol::new(env, "admin_changed"),), (previous.clone(), next.clone()));
}
