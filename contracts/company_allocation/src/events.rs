use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct AllocationEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub allocated_tokens: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct UnlockEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub tokens_created: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct KillEvent {
    pub owner: Address,
    pub swept: i128,
    pub timestamp: u64,
}

pub fn emit_allocation_added(
    env: &Env,
    beneficiary: Address,
    amount: i128,
    allocated_tokens: i128,
) {
    env.events().publish(
        ("VEST", symbol_short!("ALLOC")),
        AllocationEvent {
            beneficiary,
            amount,
            allocated_tokens,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unlocked(env: &Env, beneficiary: Address, amount: i128, tokens_created: i128) {
    env.events().publish(
        ("VEST", symbol_short!("UNLOCKED")),
        UnlockEvent {
            beneficiary,
            amount,
            tokens_created,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_killed(env: &Env, owner: Address, swept: i128) {
    env.events().publish(
        ("VEST", symbol_short!("KILLED")),
        KillEvent {
            owner,
            swept,
            timestamp: env.ledger().timestamp(),
        },
    );
}
