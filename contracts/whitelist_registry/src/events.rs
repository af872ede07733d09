use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct WhitelistedEvent {
    pub addr: Address,
    pub artist: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RateEvent {
    /// `None` for the registry-wide preferential rate.
    pub addr: Option<Address>,
    pub rate: i128,
    pub timestamp: u64,
}

pub fn emit_whitelisted(env: &Env, addr: Address, artist: bool) {
    let topic = if artist {
        symbol_short!("ARTIST")
    } else {
        symbol_short!("ADDED")
    };
    env.events().publish(
        ("WLIST", topic),
        WhitelistedEvent {
            addr,
            artist,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_preferential_rate(env: &Env, rate: i128) {
    env.events().publish(
        ("WLIST", symbol_short!("PREF_RATE")),
        RateEvent {
            addr: None,
            rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_buyer_rate(env: &Env, addr: Address, rate: i128) {
    env.events().publish(
        ("WLIST", symbol_short!("BUY_RATE")),
        RateEvent {
            addr: Some(addr),
            rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}
