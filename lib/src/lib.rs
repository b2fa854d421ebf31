#![no_std]
pub mod admin;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod pass_id;
pub mod types;
pub mod validation;

pub use errors::ContractError;
pub use pass_id::*;
pub use types::*;

// Config
pub const ADMIN_KEY: &str = "admin";
pub const MAX_STRING_LENGTH: u32 = 256;

/// Lease id passed by an agent owner acting without any lease context.
pub const OWNER_LEASE_ID: u64 = 0;

/// Units of access pass issued per lease.
pub const PASS_UNITS_PER_LEASE: u32 = 1;

// Persistent storage TTL (in ledgers, ~5s each)
pub const RECORD_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 1_036_800; // ~60 days
