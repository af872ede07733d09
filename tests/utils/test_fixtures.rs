/// Test fixtures for a fully wired sale deployment
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use company_allocation::{CompanyAllocation, CompanyAllocationClient};
use sale_token::{SaleToken, SaleTokenClient};
use token_sale::{MintStrategy, SaleConfig, TokenSaleContract, TokenSaleContractClient};
use whitelist_registry::{WhitelistRegistry, WhitelistRegistryClient};

use super::constants::*;

/// Vesting deadlines used by the fixture's company allocation.
pub const UNLOCK_AT: u64 = END + 30 * DAY;
pub const SELF_DESTRUCT_AT: u64 = END + 365 * DAY;

/// Every contract a sale needs, deployed and initialized. The sale owns the
/// token and the registry; `owner` owns the sale and the allocation.
pub struct SaleFixture<'a> {
    pub env: Env,
    pub sale_id: Address,
    pub sale: TokenSaleContractClient<'a>,
    pub token: SaleTokenClient<'a>,
    pub registry: WhitelistRegistryClient<'a>,
    pub allocation_id: Address,
    pub allocation: CompanyAllocationClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub owner: Address,
    pub treasury: Address,
    pub config: SaleConfig,
}

impl<'a> SaleFixture<'a> {
    /// Deploy with the default configuration.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Deploy, letting the caller adjust the configuration before the sale
    /// is initialized. The clock starts one day before the sale opens.
    pub fn with_config(configure: impl FnOnce(&mut SaleConfig)) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = START - DAY);

        let owner = Address::generate(&env);
        let treasury = Address::generate(&env);

        let payment_id = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let sale_id = env.register_contract(None, TokenSaleContract);

        let token_id = env.register_contract(None, SaleToken);
        let token = SaleTokenClient::new(&env, &token_id);
        token.initialize(
            &sale_id,
            &7,
            &String::from_str(&env, "Sale Token"),
            &String::from_str(&env, "SALE"),
        );

        let registry_id = env.register_contract(None, WhitelistRegistry);
        let registry = WhitelistRegistryClient::new(&env, &registry_id);
        registry.initialize(&sale_id);

        let allocation_id = env.register_contract(None, CompanyAllocation);
        let allocation = CompanyAllocationClient::new(&env, &allocation_id);
        allocation.initialize(&owner, &token_id, &UNLOCK_AT, &SELF_DESTRUCT_AT);

        let mut config = SaleConfig {
            start_time: START,
            pre_sale_end: None,
            tier1_end: None,
            tier2_end: None,
            tier3_end: None,
            end_time: END,
            base_rate: RATE,
            cap: None,
            goal: None,
            preferential_rate: None,
            treasury: treasury.clone(),
            payment_token: payment_id.clone(),
            token: token_id,
            whitelist_registry: Some(registry_id),
            whitelist_bonus: Some(20),
            tier1_bonus: 15,
            tier2_bonus: 10,
            tier3_bonus: 5,
            currency_unit: UNIT,
            mint_strategy: MintStrategy::Immediate,
            unpause_on_finalize: true,
            whitelist_early_access: false,
            whitelist_gated_until: None,
            company_share_percent: 20,
            company_allocation: Some(allocation_id.clone()),
        };
        configure(&mut config);

        let sale = TokenSaleContractClient::new(&env, &sale_id);
        sale.initialize(&owner, &config);

        Self {
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            env,
            sale_id,
            sale,
            token,
            registry,
            allocation_id,
            allocation,
            owner,
            treasury,
            config,
        }
    }

    pub fn advance_to(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    /// A fresh purchaser holding `INITIAL_BALANCE` of the payment currency.
    pub fn funded_buyer(&self) -> Address {
        let buyer = Address::generate(&self.env);
        self.payment_admin.mint(&buyer, &INITIAL_BALANCE);
        buyer
    }

    pub fn buy(&self, buyer: &Address, value: i128) -> i128 {
        self.sale.buy_tokens(buyer, buyer, &value)
    }
}

impl Default for SaleFixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
