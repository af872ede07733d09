use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PauseEvent {
    pub paused: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct MintingFinishedEvent {
    pub total_supply: i128,
    pub timestamp: u64,
}

pub fn emit_mint(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        ("TOKEN", symbol_short!("MINT")),
        MintEvent {
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        ("TOKEN", symbol_short!("TRANSFER")),
        TransferEvent {
            from,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_paused(env: &Env, paused: bool) {
    let topic = if paused {
        symbol_short!("PAUSE")
    } else {
        symbol_short!("UNPAUSE")
    };
    env.events().publish(
        ("TOKEN", topic),
        PauseEvent {
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_minting_finished(env: &Env, total_supply: i128) {
    env.events().publish(
        ("TOKEN", symbol_short!("MINT_DONE")),
        MintingFinishedEvent {
            total_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}
