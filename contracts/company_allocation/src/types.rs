use soroban_sdk::{contracttype, Address};

/// Lifecycle derived from the ledger clock. `killed` is tracked separately
/// in [`VestingState`] and can only be reached from `Expired`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum VestingPhase {
    Open = 0,
    Unlockable = 1,
    Expired = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingState {
    pub unlocked_at: u64,
    pub self_destruct_at: u64,
    /// Sum of every amount ever promised, including already unlocked ones.
    pub allocated_tokens: i128,
    /// Sum of every amount already released to a beneficiary.
    pub tokens_created: i128,
    /// Balance returned to the owner by `kill`.
    pub swept: i128,
    pub killed: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllocationEntry {
    pub amount: i128,
    pub unlocked: bool,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    State,
    Allocation(Address),
}
