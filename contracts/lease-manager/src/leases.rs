use soroban_sdk::{log, token, Address, Env};

use agentlease_lib::{
    events::{self, LeaseCreated, LeaseRevoked},
    validation::lease_price,
    ContractError, Lease,
};

use crate::{agents, pass, storage};

/// Rent `agent_id` for `duration` seconds.
///
/// Validation runs first, then the payment is forwarded to the agent's
/// current owner, and only after the transfer succeeds is anything written.
/// A refused transfer therefore leaves no lease and no pass behind.
pub fn create_lease(
    env: &Env,
    renter: &Address,
    agent_id: u64,
    duration: u64,
    payment: i128,
) -> Result<u64, ContractError> {
    let agent = storage::load_agent(env, agent_id).ok_or(ContractError::AgentNotFound)?;
    if duration == 0 {
        return Err(ContractError::InvalidDuration);
    }

    let price = lease_price(agent.lease_rate, duration)?;
    if payment != price {
        return Err(ContractError::PaymentMismatch);
    }

    let expires_at = env
        .ledger()
        .timestamp()
        .checked_add(duration)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pass::ensure_mintable(env, renter, expires_at)?;

    let owner = agents::current_owner(env, agent_id)?;
    let payment_token = token::Client::new(env, &storage::get_payment_token(env)?);
    if !matches!(payment_token.try_transfer(renter, &owner, &payment), Ok(Ok(()))) {
        return Err(ContractError::PaymentForwardingFailed);
    }

    let lease_id = storage::next_lease_id(env)?;
    let lease = Lease {
        id: lease_id,
        renter: renter.clone(),
        agent_id,
        expires_at,
        total_price_paid: payment,
        active: true,
    };
    storage::save_lease(env, &lease);
    storage::append_agent_lease(env, agent_id, lease_id);
    pass::mint(env, renter, agent_id, lease_id, expires_at)?;

    events::lease_created(
        env,
        LeaseCreated {
            lease_id,
            agent_id,
            renter: renter.clone(),
            expires_at,
            price_paid: payment,
        },
    );
    log!(env, "lease created", lease_id, agent_id, expires_at);

    Ok(lease_id)
}

/// Terminate a lease early. Only the agent's current owner may revoke, and
/// the price already paid stays with the owner.
pub fn revoke_lease(env: &Env, caller: &Address, lease_id: u64) -> Result<(), ContractError> {
    let mut lease = storage::load_lease(env, lease_id).ok_or(ContractError::LeaseNotFound)?;
    if !lease.active {
        return Err(ContractError::LeaseNotActive);
    }

    let owner = agents::current_owner(env, lease.agent_id)?;
    if caller != &owner {
        return Err(ContractError::NotAuthorized);
    }

    lease.active = false;
    storage::save_lease(env, &lease);

    // the pass may have changed hands since it was minted to the renter
    let id = agentlease_lib::pass_id(lease.agent_id, lease_id);
    let holder = storage::pass_holder(env, id).unwrap_or(lease.renter.clone());
    pass::burn(env, &holder, lease.agent_id, lease_id)?;

    events::lease_revoked(
        env,
        LeaseRevoked {
            lease_id,
            agent_id: lease.agent_id,
            revoked_by: caller.clone(),
        },
    );
    log!(env, "lease revoked", lease_id);

    Ok(())
}

pub fn is_lease_valid(env: &Env, agent_id: u64, lease_id: u64, user: &Address) -> bool {
    match storage::load_lease(env, lease_id) {
        Some(lease) if lease.active && lease.agent_id == agent_id => {
            pass::is_valid(env, user, agent_id, lease_id)
        }
        _ => false,
    }
}
