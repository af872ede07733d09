use crate::bonus::{self, MAX_BONUS_PERCENT};
use crate::errors::Error;
use crate::events;
use crate::interfaces::{SaleTokenClient, WhitelistEntry, WhitelistRegistryClient};
use crate::pricing;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-phased token sale with bonus tiers, whitelist pricing and company allocation"
);

/// Largest number of contributions minted by one settlement call.
const MAX_SETTLEMENT_BATCH: u32 = 50;

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the token sale contract
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();
        config.validate(&env)?;

        let state = SaleState {
            wei_raised: 0,
            finalized: false,
            fee_beneficiary: None,
            two_percent_applied: false,
            paused: false,
            refunds_enabled: false,
            escrowed: 0,
            tokens_sold: 0,
            private_tokens: 0,
            private_raised: 0,
            post_sale_minted: 0,
            company_minted: 0,
            contribution_count: 0,
            settled_count: 0,
        };

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_state(&env, &state);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------

    /// Buy tokens for `beneficiary`, paid by `purchaser` in the payment
    /// currency. Returns the number of tokens bought.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        purchaser.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;

        if value <= 0 || beneficiary == env.current_contract_address() {
            return Err(Error::InvalidParameter);
        }

        let now = get_ledger_timestamp(&env);
        let entry = Self::whitelist_entry(&env, &config, &beneficiary);

        if state.paused {
            return Err(Error::PhaseViolation);
        }
        match Self::status_at(&config, &state, now) {
            SaleStatus::Active => {}
            SaleStatus::Pending if config.whitelist_early_access && entry.whitelisted => {}
            _ => return Err(Error::PhaseViolation),
        }
        if let Some(gated_until) = config.whitelist_gated_until {
            if now < gated_until && !entry.whitelisted {
                return Err(Error::AccessViolation);
            }
        }

        let raised = state
            .wei_raised
            .checked_add(value)
            .ok_or(Error::InvalidParameter)?;
        if let Some(cap) = config.cap {
            if raised > cap {
                return Err(Error::CapExceeded);
            }
        }

        let quote = Self::price(&env, &config, &entry, now, value)?;
        if quote.tokens <= 0 {
            return Err(Error::InvalidParameter);
        }

        if config.goal.is_some() {
            token::Client::new(&env, &config.payment_token).transfer(
                &purchaser,
                &env.current_contract_address(),
                &value,
            );
            state.escrowed += value;
            set_deposit(&env, &purchaser, get_deposit(&env, &purchaser) + value);
        } else {
            Self::forward_funds(&env, &config, &state.fee_beneficiary, &purchaser, value);
        }

        let contribution = Contribution {
            id: state.contribution_count,
            purchaser: purchaser.clone(),
            beneficiary: beneficiary.clone(),
            value,
            rate: quote.rate,
            bonus_percent: quote.bonus_percent,
            tokens: quote.tokens,
            timestamp: now,
        };
        set_contribution(&env, &contribution);

        state.contribution_count += 1;
        state.wei_raised = raised;
        state.tokens_sold = state
            .tokens_sold
            .checked_add(quote.tokens)
            .ok_or(Error::InvalidParameter)?;

        let minted = config.mint_strategy == MintStrategy::Immediate;
        if minted {
            SaleTokenClient::new(&env, &config.token).mint(&beneficiary, &quote.tokens);
            state.settled_count = state.contribution_count;
        }
        set_state(&env, &state);

        events::emit_purchase(
            &env,
            contribution.id,
            purchaser,
            beneficiary,
            value,
            quote.tokens,
            quote.bonus_percent,
            minted,
        );
        Ok(quote.tokens)
    }

    /// Mint every recorded but unminted contribution, oldest first, at most
    /// `limit` per call. Only used with `MintStrategy::Deferred`.
    pub fn send_tokens_to_purchasers(env: Env, caller: Address, limit: u32) -> Result<u32, Error> {
        Self::require_owner(&env, &caller)?;
        if limit == 0 || limit > MAX_SETTLEMENT_BATCH {
            return Err(Error::InvalidParameter);
        }

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let now = get_ledger_timestamp(&env);

        if config.mint_strategy != MintStrategy::Deferred
            || Self::status_at(&config, &state, now) != SaleStatus::Ended
            || !Self::goal_reached(&config, &state)
        {
            return Err(Error::PhaseViolation);
        }

        let token = SaleTokenClient::new(&env, &config.token);
        let mut settled = 0u32;
        while settled < limit && state.settled_count < state.contribution_count {
            let contribution =
                get_contribution(&env, state.settled_count).ok_or(Error::NotInitialized)?;
            token.mint(&contribution.beneficiary, &contribution.tokens);
            state.settled_count += 1;
            settled += 1;
        }
        set_state(&env, &state);

        events::emit_settlement(
            &env,
            settled,
            state.contribution_count - state.settled_count,
        );
        Ok(settled)
    }

    /// Return a purchaser's escrowed payment after a failed goal.
    pub fn claim_refund(env: Env, purchaser: Address) -> Result<i128, Error> {
        purchaser.require_auth();

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if !state.refunds_enabled {
            return Err(Error::PhaseViolation);
        }

        let deposit = get_deposit(&env, &purchaser);
        if deposit <= 0 {
            return Err(Error::InvalidParameter);
        }

        set_deposit(&env, &purchaser, 0);
        state.escrowed -= deposit;
        set_state(&env, &state);

        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &purchaser,
            &deposit,
        );

        events::emit_refund(&env, purchaser, deposit);
        Ok(deposit)
    }

    // ------------------------------------------------------------------
    // Owner configuration
    // ------------------------------------------------------------------

    /// Route 2% of every payment to `beneficiary`. Can only be set once.
    pub fn set_two_percent(env: Env, caller: Address, beneficiary: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidParameter);
        }

        let mut state = get_state(&env)?;
        if state.two_percent_applied {
            return Err(Error::AlreadySet);
        }
        state.fee_beneficiary = Some(beneficiary.clone());
        state.two_percent_applied = true;
        set_state(&env, &state);

        events::emit_fee_beneficiary_set(&env, beneficiary);
        Ok(())
    }

    pub fn add_to_whitelist(env: Env, caller: Address, addr: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_not_null(&env, &addr)?;
        Self::registry(&env)?.add_to_whitelist(&env.current_contract_address(), &addr);
        Ok(())
    }

    pub fn whitelist_artist(env: Env, caller: Address, addr: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        Self::require_not_null(&env, &addr)?;
        Self::registry(&env)?.whitelist_artist(&env.current_contract_address(), &addr);
        Ok(())
    }

    pub fn set_preferential_rate(env: Env, caller: Address, rate: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if rate <= 0 {
            return Err(Error::InvalidParameter);
        }
        Self::registry(&env)?.set_preferential_rate(&env.current_contract_address(), &rate);
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
        Self::registry(&env)?.set_buyer_rate(&env.current_contract_address(), &addr, &rate);
        Ok(())
    }

    /// Pause the sale
    pub fn pause_sale(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_paused(&env, &caller, true)
    }

    /// Unpause the sale
    pub fn unpause_sale(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_paused(&env, &caller, false)
    }

    // ------------------------------------------------------------------
    // Minting outside the public sale
    // ------------------------------------------------------------------

    /// Mint for an off-chain private sale. Only possible before the public
    /// sale starts; no bonus schedule and no fund split apply.
    pub fn mint_for_private_investors(
        env: Env,
        caller: Address,
        investor: Address,
        rate: i128,
        bonus_percent: u32,
        value: i128,
    ) -> Result<i128, Error> {
        Self::require_owner(&env, &caller)?;
        if investor == env.current_contract_address()
            || rate <= 0
            || value <= 0
            || bonus_percent > MAX_BONUS_PERCENT
        {
            return Err(Error::InvalidParameter);
        }

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if get_ledger_timestamp(&env) >= config.start_time {
            return Err(Error::PhaseViolation);
        }

        let tokens = pricing::token_amount(value, rate, bonus_percent)?;
        if tokens <= 0 {
            return Err(Error::InvalidParameter);
        }

        SaleTokenClient::new(&env, &config.token).mint(&investor, &tokens);
        state.private_tokens += tokens;
        state.private_raised += value;
        set_state(&env, &state);

        events::emit_private_mint(&env, investor, value, rate, bonus_percent, tokens);
        Ok(tokens)
    }

    /// Mint team or partner tokens once the sale window has closed and
    /// before finalization stops minting.
    pub fn mint_tokens_for(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if to == env.current_contract_address() || amount <= 0 {
            return Err(Error::InvalidParameter);
        }

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if Self::status_at(&config, &state, get_ledger_timestamp(&env)) != SaleStatus::Ended {
            return Err(Error::PhaseViolation);
        }

        SaleTokenClient::new(&env, &config.token).mint(&to, &amount);
        state.post_sale_minted += amount;
        set_state(&env, &state);

        events::emit_post_sale_mint(&env, to, amount);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Finalization
    // ------------------------------------------------------------------

    /// Close the sale for good: settle the goal escrow, mint the company
    /// share, stop minting and (when configured) release transfers.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        if Self::status_at(&config, &state, get_ledger_timestamp(&env)) != SaleStatus::Ended {
            return Err(Error::PhaseViolation);
        }

        let goal_reached = Self::goal_reached(&config, &state);
        let unsettled = state.settled_count < state.contribution_count;
        if config.mint_strategy == MintStrategy::Deferred && goal_reached && unsettled {
            return Err(Error::PhaseViolation);
        }

        if config.goal.is_some() {
            if goal_reached {
                if state.escrowed > 0 {
                    Self::forward_funds(
                        &env,
                        &config,
                        &state.fee_beneficiary,
                        &env.current_contract_address(),
                        state.escrowed,
                    );
                }
                state.escrowed = 0;
            } else {
                state.refunds_enabled = true;
            }
        }

        let token = SaleTokenClient::new(&env, &config.token);
        let company_tokens =
            pricing::company_share(token.total_supply(), config.company_share_percent)?;
        if company_tokens > 0 {
            if let Some(allocation) = &config.company_allocation {
                token.mint(allocation, &company_tokens);
            }
        }
        token.finish_minting();
        if config.unpause_on_finalize && token.paused() {
            token.unpause();
        }

        state.company_minted = company_tokens;
        state.finalized = true;
        set_state(&env, &state);

        events::emit_finalized(
            &env,
            state.wei_raised,
            goal_reached,
            company_tokens,
            token.total_supply(),
        );
        Ok(())
    }

    /// Release token transfers when finalization did not already do so.
    pub fn unpause_token(env: Env, caller: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        let config = get_config(&env)?;
        let state = get_state(&env)?;
        let token = SaleTokenClient::new(&env, &config.token);
        if !state.finalized || !token.paused() {
            return Err(Error::PhaseViolation);
        }
        token.unpause();

        events::emit_token_unpaused(&env, caller);
        Ok(())
    }

    // View functions
    pub fn quote(env: Env, beneficiary: Address, value: i128) -> Result<Quote, Error> {
        if value <= 0 {
            return Err(Error::InvalidParameter);
        }
        let config = get_config(&env)?;
        let entry = Self::whitelist_entry(&env, &config, &beneficiary);
        Self::price(&env, &config, &entry, get_ledger_timestamp(&env), value)
    }

    pub fn get_status(env: Env) -> Result<SaleStatus, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(Self::status_at(&config, &state, get_ledger_timestamp(&env)))
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn wei_raised(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.wei_raised)
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.finalized)
    }

    pub fn fee_beneficiary(env: Env) -> Result<Option<Address>, Error> {
        Ok(get_state(&env)?.fee_beneficiary)
    }

    pub fn get_contribution(env: Env, id: u64) -> Option<Contribution> {
        get_contribution(&env, id)
    }

    pub fn contribution_count(env: Env) -> Result<u64, Error> {
        Ok(get_state(&env)?.contribution_count)
    }

    pub fn pending_settlements(env: Env) -> Result<u64, Error> {
        let state = get_state(&env)?;
        Ok(state.contribution_count - state.settled_count)
    }

    pub fn deposit_of(env: Env, purchaser: Address) -> i128 {
        get_deposit(&env, &purchaser)
    }
}

impl TokenSaleContract {
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = get_owner(env)?;
        caller.require_auth();
        if *caller != owner {
            return Err(Error::AccessViolation);
        }
        Ok(())
    }

    // There is no zero address; funds or tokens sent to the sale itself
    // would be stranded.
    fn require_not_null(env: &Env, addr: &Address) -> Result<(), Error> {
        if *addr == env.current_contract_address() {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }

    fn status_at(config: &SaleConfig, state: &SaleState, now: u64) -> SaleStatus {
        if state.finalized {
            SaleStatus::Finalized
        } else if now < config.start_time {
            SaleStatus::Pending
        } else if now < config.end_time {
            SaleStatus::Active
        } else {
            SaleStatus::Ended
        }
    }

    fn goal_reached(config: &SaleConfig, state: &SaleState) -> bool {
        config.goal.map_or(true, |goal| state.wei_raised >= goal)
    }

    fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        let mut state = get_state(env)?;
        if state.paused == paused {
            return Err(Error::PhaseViolation);
        }
        state.paused = paused;
        set_state(env, &state);

        events::emit_sale_paused(env, caller.clone(), paused);
        Ok(())
    }

    fn registry<'a>(env: &'a Env) -> Result<WhitelistRegistryClient<'a>, Error> {
        let config = get_config(env)?;
        let registry = config.whitelist_registry.ok_or(Error::InvalidParameter)?;
        Ok(WhitelistRegistryClient::new(env, &registry))
    }

    fn whitelist_entry(env: &Env, config: &SaleConfig, addr: &Address) -> WhitelistEntry {
        match &config.whitelist_registry {
            Some(registry) => WhitelistRegistryClient::new(env, registry).get_entry(addr),
            None => WhitelistEntry {
                whitelisted: false,
                artist: false,
                custom_rate: None,
            },
        }
    }

    /// Custom buyer rate first, then the preferential rate for whitelisted
    /// buyers, then the base rate.
    fn price(
        env: &Env,
        config: &SaleConfig,
        entry: &WhitelistEntry,
        now: u64,
        value: i128,
    ) -> Result<Quote, Error> {
        let rate = match entry.custom_rate {
            Some(rate) => rate,
            None if entry.whitelisted => Self::preferential_rate(env, config)
                .unwrap_or(config.base_rate),
            None => config.base_rate,
        };
        let bonus_percent =
            bonus::bonus_percent(config, now, value, entry.whitelisted, entry.artist);
        let tokens = pricing::token_amount(value, rate, bonus_percent)?;
        Ok(Quote {
            rate,
            bonus_percent,
            tokens,
        })
    }

    fn preferential_rate(env: &Env, config: &SaleConfig) -> Option<i128> {
        let registered = config
            .whitelist_registry
            .as_ref()
            .and_then(|registry| WhitelistRegistryClient::new(env, registry).preferential_rate());
        registered.or(config.preferential_rate)
    }

    fn forward_funds(
        env: &Env,
        config: &SaleConfig,
        fee_beneficiary: &Option<Address>,
        from: &Address,
        value: i128,
    ) {
        let payment = token::Client::new(env, &config.payment_token);
        let (fee, treasury_share) = pricing::split_funds(value, fee_beneficiary.is_some());
        if let Some(fee_beneficiary) = fee_beneficiary {
            if fee > 0 {
                payment.transfer(from, fee_beneficiary, &fee);
            }
        }
        if treasury_share > 0 {
            payment.transfer(from, &config.treasury, &treasury_share);
        }
    }
}
