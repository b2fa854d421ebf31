//! Cross-contract interfaces.
//!
//! The leasing contracts only ever talk to collaborators through these
//! clients, so any contract exposing the same functions can be wired in at
//! `init_contract` time.
use soroban_sdk::{contractclient, Address, Env, Vec};

/// Ownership ledger for agent tokens.
#[contractclient(name = "AgentOwnershipClient")]
pub trait AgentOwnershipInterface {
    /// Mint the ownership token for `agent_id` to `to`. `minter` must be an
    /// approved minter and authorize the call.
    fn mint(env: Env, minter: Address, to: Address, agent_id: u64);

    /// Current owner, `None` when the token was never minted.
    fn owner_of(env: Env, agent_id: u64) -> Option<Address>;
}

/// Swap venue. Input tokens are drawn from `sender` through the allowance
/// `sender` granted to the router; output goes to `to`.
#[contractclient(name = "ExchangeRouterClient")]
pub trait ExchangeRouterInterface {
    /// Returns the amount at every hop; the last element is the realized
    /// output.
    fn swap_exact_tokens_for_tokens(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;
}

/// The slice of the lease manager the execution hub depends on.
#[contractclient(name = "LeaseGateClient")]
pub trait LeaseGateInterface {
    fn is_lease_valid(env: Env, agent_id: u64, lease_id: u64, user: Address) -> bool;

    fn is_paused(env: Env) -> bool;

    /// Ownership ledger the manager mints into and checks revocations against.
    fn agent_nft(env: Env) -> Address;
}
