use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Mintable, pausable token owned by the sale.
#[contractclient(name = "SaleTokenClient")]
pub trait SaleTokenInterface {
    fn mint(env: Env, to: Address, amount: i128);
    fn finish_minting(env: Env);
    fn unpause(env: Env);
    fn paused(env: Env) -> bool;
    fn total_supply(env: Env) -> i128;
}

/// Mirrors the registry's stored record so it decodes on this side.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WhitelistEntry {
    pub whitelisted: bool,
    pub artist: bool,
    pub custom_rate: Option<i128>,
}

#[contractclient(name = "WhitelistRegistryClient")]
pub trait WhitelistRegistryInterface {
    fn add_to_whitelist(env: Env, caller: Address, addr: Address);
    fn whitelist_artist(env: Env, caller: Address, addr: Address);
    fn set_preferential_rate(env: Env, caller: Address, rate: i128);
    fn set_buyer_rate(env: Env, caller: Address, addr: Address, rate: i128);
    fn get_entry(env: Env, addr: Address) -> WhitelistEntry;
    fn preferential_rate(env: Env) -> Option<i128>;
}
