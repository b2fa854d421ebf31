#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};
use agentlease_lib::{
    admin,
    events::{self, SwapExecuted},
    interfaces::{ExchangeRouterClient, LeaseGateClient},
    validation::{is_null_identity, validate_path},
    AccessGrant, ContractError,
};

mod gate;
mod storage;


/// Lifetime of the router allowance, roughly 30 days of ledgers.
pub const ROUTER_ALLOWANCE_LEDGERS: u32 = 518_400;

#[contract]
pub struct ExecutionHub;

#[contractimpl]
impl ExecutionHub {
    /// Initialize contract with admin and collaborator addresses. Agent
    /// ownership is always resolved through the lease manager's ledger.
    pub fn init_contract(
        env: Env,
        admin: Address,
        lease_manager: Address,
        router: Address,
    ) -> Result<(), ContractError> {
        if admin::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        admin::set_admin(&env, &admin);
        storage::set_lease_manager(&env, &lease_manager);
        storage::set_router(&env, &router);
        Ok(())
    }

    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        admin::transfer_admin(&env, &admin, &new_admin)
    }

    /// Point the hub at a different swap venue.
    pub fn set_router(env: Env, admin: Address, router: Address) -> Result<(), ContractError> {
        admin.require_auth();
        admin::verify_admin(&env, &admin)?;
        storage::set_router(&env, &router);
        Ok(())
    }

    pub fn router(env: Env) -> Result<Address, ContractError> {
        storage::get_router(&env)
    }

    pub fn lease_manager(env: Env) -> Result<Address, ContractError> {
        storage::get_lease_manager(&env)
    }

    /// The hub has no switch of its own; it obeys the lease manager's.
    pub fn is_paused(env: Env) -> Result<bool, ContractError> {
        Ok(LeaseGateClient::new(&env, &storage::get_lease_manager(&env)?).is_paused())
    }

    /// Read-only permission check. Owners pass `lease_id = 0`.
    pub fn authorize(
        env: Env,
        caller: Address,
        agent_id: u64,
        lease_id: u64,
    ) -> Result<AccessGrant, ContractError> {
        gate::authorize(&env, &caller, agent_id, lease_id)
    }

    /// Swap `amount_in` of `path[0]` into `path[last]` on behalf of an agent.
    ///
    /// The caller must own the agent (with `lease_id = 0`) or hold a live
    /// pass for `lease_id`. Input tokens are pulled from the caller, the
    /// router's allowance is topped up to the maximum when it runs short, and
    /// output goes straight to `recipient`. Router failures (slippage,
    /// deadline, liquidity) abort the whole call, including the pull-in.
    pub fn execute_swap(
        env: Env,
        caller: Address,
        agent_id: u64,
        lease_id: u64,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        recipient: Address,
        deadline: u64,
    ) -> Result<Vec<i128>, ContractError> {
        caller.require_auth();

        let lease_manager = LeaseGateClient::new(&env, &storage::get_lease_manager(&env)?);
        if lease_manager.is_paused() {
            return Err(ContractError::Paused);
        }

        validate_path(&path)?;
        if amount_in <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if is_null_identity(&env, &recipient) {
            return Err(ContractError::InvalidRecipient);
        }

        let grant = gate::authorize(&env, &caller, agent_id, lease_id)?;
        if !grant.is_granted() {
            return Err(ContractError::NotAuthorized);
        }

        let token_in = path.first().ok_or(ContractError::InvalidPath)?;
        let token_out = path.last().ok_or(ContractError::InvalidPath)?;
        let hub = env.current_contract_address();
        let router = storage::get_router(&env)?;

        let input = token::Client::new(&env, &token_in);
        if !matches!(input.try_transfer(&caller, &hub, &amount_in), Ok(Ok(()))) {
            return Err(ContractError::TransferInFailed);
        }
        ensure_router_allowance(&env, &input, &router, amount_in);

        let amounts = ExchangeRouterClient::new(&env, &router).swap_exact_tokens_for_tokens(
            &hub,
            &amount_in,
            &amount_out_min,
            &path,
            &recipient,
            &deadline,
        );
        let amount_out = amounts.last().ok_or(ContractError::RouterOutputInvalid)?;

        storage::increment_swap_count(&env)?;
        events::swap_executed(
            &env,
            SwapExecuted {
                agent_id,
                lease_id,
                executor: caller,
                token_in,
                token_out,
                amount_in,
                amount_out,
                timestamp: env.ledger().timestamp(),
            },
        );
        log!(&env, "swap executed", agent_id, lease_id, amount_out);

        Ok(amounts)
    }

    /// Number of swaps executed through the hub.
    pub fn total_swaps(env: Env) -> u64 {
        storage::swap_count(&env)
    }
}

/// Grant the router an unlimited allowance on `token` when the standing one
/// cannot cover `amount`. Skipped while the previous grant still suffices.
fn ensure_router_allowance(env: &Env, token: &token::Client, router: &Address, amount: i128) {
    let hub = env.current_contract_address();
    if token.allowance(&hub, router) < amount {
        token.approve(&hub, router, &i128::MAX, &router_allowance_expiry(env));
    }
}

/// The asset contract refuses expirations at or past the max live ledger.
fn router_allowance_expiry(env: &Env) -> u32 {
    let ledger = env.ledger();
    ledger
        .sequence()
        .saturating_add(ROUTER_ALLOWANCE_LEDGERS)
        .min(ledger.max_live_until_ledger().saturating_sub(1))
}
