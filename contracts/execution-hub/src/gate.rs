use soroban_sdk::{Address, Env};

use agentlease_lib::{
    interfaces::{AgentOwnershipClient, LeaseGateClient},
    AccessGrant, ContractError, OWNER_LEASE_ID,
};

use crate::storage;

/// Decide whether `caller` may act for `agent_id`.
///
/// Ownership is checked first and short-circuits: an owner never needs a
/// pass, but must name no lease. Anyone else needs a live pass for the
/// named lease, whatever their history with the agent.
pub fn authorize(
    env: &Env,
    caller: &Address,
    agent_id: u64,
    lease_id: u64,
) -> Result<AccessGrant, ContractError> {
    let leases = LeaseGateClient::new(env, &storage::get_lease_manager(env)?);
    let owner = AgentOwnershipClient::new(env, &leases.agent_nft()).owner_of(&agent_id);
    if owner.as_ref() == Some(caller) {
        if lease_id != OWNER_LEASE_ID {
            return Err(ContractError::OwnerMustUseNullLease);
        }
        return Ok(AccessGrant::DirectOwner);
    }

    if leases.is_lease_valid(&agent_id, &lease_id, caller) {
        Ok(AccessGrant::DelegatedHolder)
    } else {
        Ok(AccessGrant::Denied)
    }
}
