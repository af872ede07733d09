use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_contribution(env: &Env, id: u64) -> Option<Contribution> {
    env.storage().persistent().get(&DataKey::Contribution(id))
}

pub fn set_contribution(env: &Env, contribution: &Contribution) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(contribution.id), contribution);
}

pub fn get_deposit(env: &Env, purchaser: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Deposit(purchaser.clone()))
        .unwrap_or(0)
}

pub fn set_deposit(env: &Env, purchaser: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Deposit(purchaser.clone()), &amount);
}
