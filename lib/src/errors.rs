use soroban_sdk::contracterror;

/// Error codes shared by every leasing contract.
///
/// Codes are grouped by category so off-chain callers can tell input
/// mistakes (1x) from stale references (2x), permission failures (3x) and
/// collaborator failures (4x).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    Paused = 4,

    InvalidRate = 10,
    InvalidDuration = 11,
    InvalidMetadata = 12,
    PaymentMismatch = 13,
    InvalidHolder = 14,
    ExpiryNotFuture = 15,
    InvalidPath = 16,
    InvalidRecipient = 17,
    InvalidAmount = 18,

    AgentNotFound = 20,
    LeaseNotFound = 21,
    LeaseNotActive = 22,
    InsufficientBalance = 23,
    AgentAlreadyMinted = 24,

    NotAuthorized = 30,
    OwnerMustUseNullLease = 31,
    NotOwner = 32,
    NotApprovedMinter = 33,

    PaymentForwardingFailed = 40,
    TransferInFailed = 41,
    RouterOutputInvalid = 42,

    ArithmeticOverflow = 50,
}
