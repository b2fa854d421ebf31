use soroban_sdk::{contracttype, Address, String};

/// A leasable agent record.
///
/// Ownership lives in the agent ownership ledger; `creator` only records
/// who registered the agent and never changes.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Agent {
    pub id: u64,
    pub creator: Address,
    pub metadata_ref: String,
    /// Price per second of lease time, in payment token units.
    pub lease_rate: i128,
    pub created_at: u64,
}

/// A time-boxed rental of an agent.
///
/// `active` only flips on revocation; natural expiry is judged against the
/// ledger clock at read time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Lease {
    pub id: u64,
    pub renter: Address,
    pub agent_id: u64,
    pub expires_at: u64,
    pub total_price_paid: i128,
    pub active: bool,
}

/// Outcome of the execution permission check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum AccessGrant {
    /// Caller currently owns the agent.
    DirectOwner = 0,
    /// Caller holds a live access pass for the named lease.
    DelegatedHolder = 1,
    Denied = 2,
}

impl AccessGrant {
    pub fn is_granted(&self) -> bool {
        !matches!(self, AccessGrant::Denied)
    }
}
