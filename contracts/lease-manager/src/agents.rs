use soroban_sdk::{log, Address, Env, String};

use agentlease_lib::{
    events::{self, AgentCreated},
    interfaces::AgentOwnershipClient,
    validation::{validate_metadata, validate_rate},
    Agent, ContractError,
};

use crate::storage;

/// Register a new agent and mint its ownership token to `creator`.
pub fn create_agent(
    env: &Env,
    creator: &Address,
    metadata_ref: String,
    lease_rate: i128,
) -> Result<u64, ContractError> {
    validate_rate(lease_rate)?;
    validate_metadata(&metadata_ref)?;

    let agent_nft = storage::get_agent_nft(env)?;
    let agent_id = storage::next_agent_id(env)?;
    let agent = Agent {
        id: agent_id,
        creator: creator.clone(),
        metadata_ref: metadata_ref.clone(),
        lease_rate,
        created_at: env.ledger().timestamp(),
    };
    storage::save_agent(env, &agent);

    AgentOwnershipClient::new(env, &agent_nft).mint(
        &env.current_contract_address(),
        creator,
        &agent_id,
    );

    events::agent_created(
        env,
        AgentCreated {
            agent_id,
            creator: creator.clone(),
            metadata_ref,
            lease_rate,
        },
    );
    log!(env, "agent registered", agent_id, lease_rate);

    Ok(agent_id)
}

/// Current owner according to the ownership ledger.
pub fn current_owner(env: &Env, agent_id: u64) -> Result<Address, ContractError> {
    let agent_nft = storage::get_agent_nft(env)?;
    AgentOwnershipClient::new(env, &agent_nft)
        .owner_of(&agent_id)
        .ok_or(ContractError::AgentNotFound)
}
