#![no_std]

mod events;


use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, Address, Env, String,
};

contractmeta!(
    key = "Description",
    val = "Mintable, pausable sale token owned by its crowdsale"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    TokenPaused = 5,
    NotPaused = 6,
    MintingFinished = 7,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Metadata,
    TotalSupply,
    Paused,
    MintingFinished,
    Balance(Address),
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// The token starts paused: balances can be minted but not moved until
    /// the owner unpauses it.
    pub fn initialize(
        env: Env,
        owner: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }

        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        env.storage().instance().set(&DataKey::Paused, &true);
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &false);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        if Self::minting_finished(env.clone()) {
            return Err(Error::MintingFinished);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let balance = Self::balance(env.clone(), to.clone())
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        Self::write_balance(&env, &to, balance);

        events::emit_mint(&env, to, amount);
        Ok(())
    }

    /// Irreversibly stops any further minting.
    pub fn finish_minting(env: Env) -> Result<(), Error> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        if Self::minting_finished(env.clone()) {
            return Err(Error::MintingFinished);
        }
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &true);

        events::emit_minting_finished(&env, Self::total_supply(env.clone()));
        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        if Self::paused(env.clone()) {
            return Err(Error::TokenPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &true);
        events::emit_paused(&env, true);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let owner = Self::read_owner(&env)?;
        owner.require_auth();

        if !Self::paused(env.clone()) {
            return Err(Error::NotPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &false);
        events::emit_paused(&env, false);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::read_owner(&env)?;

        if Self::paused(env.clone()) {
            return Err(Error::TokenPaused);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        Self::write_balance(&env, &from, from_balance - amount);
        let to_balance = Self::balance(env.clone(), to.clone());
        Self::write_balance(&env, &to, to_balance + amount);

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    // View functions
    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn paused(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn minting_finished(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::MintingFinished)
            .unwrap_or(false)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Self::read_owner(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Self::read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::read_metadata(&env)?.symbol)
    }
}

impl SaleToken {
    fn read_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    fn read_metadata(env: &Env) -> Result<TokenMetadata, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(Error::NotInitialized)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }
}
