//! Composite access pass identifiers.
//!
//! A pass id packs `(agent_id, lease_id)` into one `u128`: the agent id fills
//! the high 64 bits and the lease id the low 64 bits. Indexers can rebuild the
//! same id off-chain with the same shift.

/// Width of the lease id field.
pub const LEASE_ID_BITS: u32 = 64;

const LEASE_ID_MASK: u128 = (1u128 << LEASE_ID_BITS) - 1;

pub fn pass_id(agent_id: u64, lease_id: u64) -> u128 {
    ((agent_id as u128) << LEASE_ID_BITS) | lease_id as u128
}

/// Inverse of [`pass_id`].
pub fn split_pass_id(id: u128) -> (u64, u64) {
    ((id >> LEASE_ID_BITS) as u64, (id & LEASE_ID_MASK) as u64)
}
