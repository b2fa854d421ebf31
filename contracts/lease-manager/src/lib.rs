#![no_std]

//! Lease manager: agent registry, time-boxed leases and the access passes
//! that carry delegated execution rights.
//!
//! ```text
//! create_agent ──► agent record + ownership token (agent-nft)
//! create_lease ──► payment to owner ──► lease record ──► access pass
//! revoke_lease ──► lease inactive ──► pass burned
//! ```
//!
//! The execution hub asks `is_lease_valid` and `is_paused` before every swap.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use agentlease_lib::{
    admin,
    events::{self, PassTransferred},
    pass_id, Agent, ContractError, Lease,
};

mod agents;
mod leases;
mod pass;
mod storage;

#[cfg(test)]
mod test_lease;

#[contract]
pub struct LeaseManager;

#[contractimpl]
impl LeaseManager {
    /// Initialize contract with admin and collaborator addresses
    pub fn init_contract(
        env: Env,
        admin: Address,
        payment_token: Address,
        agent_nft: Address,
    ) -> Result<(), ContractError> {
        if admin::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        admin::set_admin(&env, &admin);
        storage::set_payment_token(&env, &payment_token);
        storage::set_agent_nft(&env, &agent_nft);
        Ok(())
    }

    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        admin::transfer_admin(&env, &admin, &new_admin)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, ContractError> {
        storage::get_payment_token(&env)
    }

    pub fn agent_nft(env: Env) -> Result<Address, ContractError> {
        storage::get_agent_nft(&env)
    }

    // ---------------- PAUSE ----------------

    /// Stop every state-changing entry point here and in the execution hub.
    pub fn pause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::set_paused(&env, &admin, true)
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::set_paused(&env, &admin, false)
    }

    pub fn is_paused(env: Env) -> bool {
        admin::is_paused(&env)
    }

    // ---------------- AGENTS ----------------

    /// Register an agent priced at `lease_rate` payment units per second.
    pub fn create_agent(
        env: Env,
        creator: Address,
        metadata_ref: String,
        lease_rate: i128,
    ) -> Result<u64, ContractError> {
        creator.require_auth();
        admin::ensure_not_paused(&env)?;
        agents::create_agent(&env, &creator, metadata_ref, lease_rate)
    }

    pub fn get_agent(env: Env, agent_id: u64) -> Option<Agent> {
        storage::load_agent(&env, agent_id)
    }

    pub fn total_agents(env: Env) -> u64 {
        storage::agent_count(&env)
    }

    // ---------------- LEASES ----------------

    /// Exact payment required to lease `agent_id` for `duration` seconds.
    pub fn lease_price(env: Env, agent_id: u64, duration: u64) -> Result<i128, ContractError> {
        let agent = storage::load_agent(&env, agent_id).ok_or(ContractError::AgentNotFound)?;
        agentlease_lib::validation::lease_price(agent.lease_rate, duration)
    }

    pub fn create_lease(
        env: Env,
        renter: Address,
        agent_id: u64,
        duration: u64,
        payment: i128,
    ) -> Result<u64, ContractError> {
        renter.require_auth();
        admin::ensure_not_paused(&env)?;
        leases::create_lease(&env, &renter, agent_id, duration, payment)
    }

    pub fn revoke_lease(env: Env, caller: Address, lease_id: u64) -> Result<(), ContractError> {
        caller.require_auth();
        admin::ensure_not_paused(&env)?;
        leases::revoke_lease(&env, &caller, lease_id)
    }

    /// True while the lease is active, unexpired and `user` holds its pass.
    pub fn is_lease_valid(env: Env, agent_id: u64, lease_id: u64, user: Address) -> bool {
        leases::is_lease_valid(&env, agent_id, lease_id, &user)
    }

    pub fn get_lease(env: Env, lease_id: u64) -> Option<Lease> {
        storage::load_lease(&env, lease_id)
    }

    /// Every lease ever created for the agent, oldest first.
    pub fn get_agent_leases(env: Env, agent_id: u64) -> Vec<u64> {
        storage::agent_leases(&env, agent_id)
    }

    pub fn total_leases(env: Env) -> u64 {
        storage::lease_count(&env)
    }

    // ---------------- ACCESS PASSES ----------------

    pub fn get_pass_id(_env: Env, agent_id: u64, lease_id: u64) -> u128 {
        pass_id(agent_id, lease_id)
    }

    pub fn pass_balance(env: Env, holder: Address, agent_id: u64, lease_id: u64) -> u32 {
        storage::pass_balance(&env, &holder, pass_id(agent_id, lease_id))
    }

    pub fn pass_expiry(env: Env, agent_id: u64, lease_id: u64) -> u64 {
        storage::pass_expiry(&env, pass_id(agent_id, lease_id))
    }

    pub fn pass_holder(env: Env, agent_id: u64, lease_id: u64) -> Option<Address> {
        storage::pass_holder(&env, pass_id(agent_id, lease_id))
    }

    pub fn is_pass_valid(env: Env, user: Address, agent_id: u64, lease_id: u64) -> bool {
        pass::is_valid(&env, &user, agent_id, lease_id)
    }

    /// Hand a pass to another account. Execution rights follow the pass.
    pub fn transfer_pass(
        env: Env,
        from: Address,
        to: Address,
        agent_id: u64,
        lease_id: u64,
    ) -> Result<(), ContractError> {
        from.require_auth();
        admin::ensure_not_paused(&env)?;
        pass::transfer(&env, &from, &to, agent_id, lease_id)?;

        events::pass_transferred(
            &env,
            PassTransferred {
                agent_id,
                lease_id,
                from,
                to,
            },
        );
        Ok(())
    }
}
