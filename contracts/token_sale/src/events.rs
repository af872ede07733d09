use soroban_sdk::{contracttype, symbol_short, Address, Env};

// Published under ("SALE", symbol_short!("…")).

#[derive(Clone)]
#[contracttype]
pub struct PurchaseEvent {
    pub contribution_id: u64,
    pub purchaser: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub tokens: i128,
    pub bonus_percent: u32,
    /// False when minting is deferred to settlement.
    pub minted: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PrivateMintEvent {
    pub investor: Address,
    pub value: i128,
    pub rate: i128,
    pub bonus_percent: u32,
    pub tokens: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PostSaleMintEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SettlementEvent {
    pub settled: u32,
    pub remaining: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FinalizeEvent {
    pub wei_raised: i128,
    pub goal_reached: bool,
    pub company_tokens: i128,
    pub total_supply: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct FeeBeneficiaryEvent {
    pub beneficiary: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RefundEvent {
    pub purchaser: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct StatusEvent {
    pub owner: Address,
    pub timestamp: u64,
}

pub fn emit_purchase(
    env: &Env,
    contribution_id: u64,
    purchaser: Address,
    beneficiary: Address,
    value: i128,
    tokens: i128,
    bonus_percent: u32,
    minted: bool,
) {
    env.events().publish(
        ("SALE", symbol_short!("PURCHASE")),
        PurchaseEvent {
            contribution_id,
            purchaser,
            beneficiary,
            value,
            tokens,
            bonus_percent,
            minted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_private_mint(
    env: &Env,
    investor: Address,
    value: i128,
    rate: i128,
    bonus_percent: u32,
    tokens: i128,
) {
    env.events().publish(
        ("SALE", symbol_short!("PRIVATE")),
        PrivateMintEvent {
            investor,
            value,
            rate,
            bonus_percent,
            tokens,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_post_sale_mint(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("POSTMINT")),
        PostSaleMintEvent {
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_settlement(env: &Env, settled: u32, remaining: u64) {
    env.events().publish(
        ("SALE", symbol_short!("SETTLED")),
        SettlementEvent {
            settled,
            remaining,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_finalized(
    env: &Env,
    wei_raised: i128,
    goal_reached: bool,
    company_tokens: i128,
    total_supply: i128,
) {
    env.events().publish(
        ("SALE", symbol_short!("FINALIZE")),
        FinalizeEvent {
            wei_raised,
            goal_reached,
            company_tokens,
            total_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_fee_beneficiary_set(env: &Env, beneficiary: Address) {
    env.events().publish(
        ("SALE", symbol_short!("FEE_SET")),
        FeeBeneficiaryEvent {
            beneficiary,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_refund(env: &Env, purchaser: Address, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("REFUND")),
        RefundEvent {
            purchaser,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_sale_paused(env: &Env, owner: Address, paused: bool) {
    let topic = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    env.events().publish(
        ("SALE", topic),
        StatusEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_token_unpaused(env: &Env, owner: Address) {
    env.events().publish(
        ("SALE", symbol_short!("UNPAUSE_T")),
        StatusEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
