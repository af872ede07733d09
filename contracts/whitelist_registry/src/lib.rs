#![no_std]

mod events;


use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Validation / authorization (3–4) ---
    InvalidParameter = 3,
    AccessViolation = 4,
}

/// Per-buyer pricing record. `custom_rate` replaces the sale's base rate
/// entirely; it does not stack with the preferential rate.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WhitelistEntry {
    pub whitelisted: bool,
    pub artist: bool,
    pub custom_rate: Option<i128>,
}

#[contracttype]
pub enum DataKey {
    Owner,
    PreferentialRate,
    Entry(Address),
}

#[contract]
pub struct WhitelistRegistry;

#[contractimpl]
impl WhitelistRegistry {
    /// `owner` is usually the sale contract that delegates to this registry.
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    pub fn add_to_whitelist(env: Env, caller: Address, addr: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_not_null(&env, &addr)?;

        let mut entry = Self::get_entry(env.clone(), addr.clone());
        entry.whitelisted = true;
        Self::write_entry(&env, &addr, &entry);

        events::emit_whitelisted(&env, addr, false);
        Ok(())
    }

    /// Artists are whitelisted as well.
    pub fn whitelist_artist(env: Env, caller: Address, addr: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_not_null(&env, &addr)?;

        let mut entry = Self::get_entry(env.clone(), addr.clone());
        entry.whitelisted = true;
        entry.artist = true;
        Self::write_entry(&env, &addr, &entry);

        events::emit_whitelisted(&env, addr, true);
        Ok(())
    }

    pub fn set_preferential_rate(env: Env, caller: Address, rate: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if rate <= 0 {
            return Err(Error::InvalidParameter);
        }
        env.storage()
            .instance()
            .set(&DataKey::PreferentialRate, &rate);

        events::emit_preferential_rate(&env, rate);
        Ok(())
    }

    pub fn set_buyer_rate(
        env: Env,
        caller: Address,
        addr: Address,
        rate: i128,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_not_null(&env, &addr)?;
        if rate <= 0 {
            return Err(Error::InvalidParameter);
        }

        let mut entry = Self::get_entry(env.clone(), addr.clone());
        entry.custom_rate = Some(rate);
        Self::write_entry(&env, &addr, &entry);

        events::emit_buyer_rate(&env, addr, rate);
        Ok(())
    }

    // View functions
    pub fn is_whitelisted(env: Env, addr: Address) -> bool {
        Self::get_entry(env, addr).whitelisted
    }

    pub fn is_artist(env: Env, addr: Address) -> bool {
        Self::get_entry(env, addr).artist
    }

    pub fn buyer_rate(env: Env, addr: Address) -> Option<i128> {
        Self::get_entry(env, addr).custom_rate
    }

    pub fn preferential_rate(env: Env) -> Option<i128> {
        env.storage().instance().get(&DataKey::PreferentialRate)
    }

    pub fn get_entry(env: Env, addr: Address) -> WhitelistEntry {
        env.storage()
            .persistent()
            .get(&DataKey::Entry(addr))
            .unwrap_or(WhitelistEntry {
                whitelisted: false,
                artist: false,
                custom_rate: None,
            })
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}

impl WhitelistRegistry {
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = Self::owner(env.clone())?;
        caller.require_auth();
        if *caller != owner {
            return Err(Error::AccessViolation);
        }
        Ok(())
    }

    // There is no zero address; the registry's own address is the sink
    // nobody can act for.
    fn require_not_null(env: &Env, addr: &Address) -> Result<(), Error> {
        if *addr == env.current_contract_address() {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }

    fn write_entry(env: &Env, addr: &Address, entry: &WhitelistEntry) {
        env.storage()
            .persistent()
            .set(&DataKey::Entry(addr.clone()), entry);
    }
}
