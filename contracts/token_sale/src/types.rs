use crate::bonus::{tier_bounds, MAX_BONUS_PERCENT};
use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Env};

/// How purchased tokens reach the beneficiary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum MintStrategy {
    /// Mint inside `buy_tokens`.
    Immediate,
    /// Record only; `send_tokens_to_purchasers` mints after the sale ends.
    Deferred,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SaleStatus {
    Pending = 0,
    Active = 1,
    Ended = 2,
    Finalized = 3,
}

/// Immutable once the sale is initialized. Optional fields switch their
/// behaviour off when left empty.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub start_time: u64,
    /// End of the size-tiered presale.
    pub pre_sale_end: Option<u64>,
    pub tier1_end: Option<u64>,
    pub tier2_end: Option<u64>,
    pub tier3_end: Option<u64>,
    pub end_time: u64,

    /// Token smallest-units minted per currency smallest-unit.
    pub base_rate: i128,
    pub cap: Option<i128>,
    /// Refundable minimum raise. Funds are escrowed while a goal is set.
    pub goal: Option<i128>,
    pub preferential_rate: Option<i128>,

    pub treasury: Address,
    /// Currency accepted for purchases (the native asset contract).
    pub payment_token: Address,
    /// Token sold; this contract must own it.
    pub token: Address,
    pub whitelist_registry: Option<Address>,

    /// Flat bonus for whitelisted buyers.
    pub whitelist_bonus: Option<u32>,
    pub tier1_bonus: u32,
    pub tier2_bonus: u32,
    pub tier3_bonus: u32,
    /// Currency smallest-units per whole unit, used by the presale size tiers.
    pub currency_unit: i128,

    pub mint_strategy: MintStrategy,
    pub unpause_on_finalize: bool,
    /// Whitelisted beneficiaries may buy before `start_time`.
    pub whitelist_early_access: bool,
    /// Before this instant only whitelisted beneficiaries may buy.
    pub whitelist_gated_until: Option<u64>,

    /// Share of the final supply minted to `company_allocation`, in percent.
    pub company_share_percent: u32,
    pub company_allocation: Option<Address>,
}

impl SaleConfig {
    /// Rejects inconsistent configurations with `InvalidParameter`.
    pub fn validate(&self, env: &Env) -> Result<(), Error> {
        let this = env.current_contract_address();

        // Every populated boundary must be strictly later than the previous one.
        let boundaries = [
            Some(self.start_time),
            self.pre_sale_end,
            self.tier1_end,
            self.tier2_end,
            self.tier3_end,
            Some(self.end_time),
        ];
        let mut previous: Option<u64> = None;
        for boundary in boundaries.iter().flatten() {
            if matches!(previous, Some(p) if *boundary <= p) {
                return Err(Error::InvalidParameter);
            }
            previous = Some(*boundary);
        }

        // Unset tier ends fall back to ten-day windows; the resolved
        // schedule must still be strictly increasing.
        let anchor = self.pre_sale_end.unwrap_or(self.start_time);
        let tiers = tier_bounds(self);
        if anchor >= tiers.tier1_end
            || tiers.tier1_end >= tiers.tier2_end
            || tiers.tier2_end >= tiers.tier3_end
        {
            return Err(Error::InvalidParameter);
        }

        if self.base_rate <= 0 || self.currency_unit <= 0 {
            return Err(Error::InvalidParameter);
        }
        if matches!(self.cap, Some(cap) if cap <= 0)
            || matches!(self.goal, Some(goal) if goal <= 0)
            || matches!(self.preferential_rate, Some(rate) if rate <= 0)
        {
            return Err(Error::InvalidParameter);
        }
        if let (Some(goal), Some(cap)) = (self.goal, self.cap) {
            if goal > cap {
                return Err(Error::InvalidParameter);
            }
        }

        let bonuses = [self.tier1_bonus, self.tier2_bonus, self.tier3_bonus];
        if bonuses.iter().any(|b| *b > MAX_BONUS_PERCENT)
            || matches!(self.whitelist_bonus, Some(b) if b > MAX_BONUS_PERCENT)
        {
            return Err(Error::InvalidParameter);
        }

        if self.treasury == this {
            return Err(Error::InvalidParameter);
        }
        if self.company_share_percent >= 100 {
            return Err(Error::InvalidParameter);
        }
        if self.company_share_percent > 0 {
            match &self.company_allocation {
                Some(allocation) if *allocation != this => {}
                _ => return Err(Error::InvalidParameter),
            }
        }

        let needs_registry =
            self.whitelist_early_access || self.whitelist_gated_until.is_some();
        if needs_registry && self.whitelist_registry.is_none() {
            return Err(Error::InvalidParameter);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub wei_raised: i128,
    pub finalized: bool,
    pub fee_beneficiary: Option<Address>,
    pub two_percent_applied: bool,
    pub paused: bool,
    pub refunds_enabled: bool,
    /// Currency held by the contract while a goal is pending.
    pub escrowed: i128,
    /// Tokens owed to purchasers, minted or not.
    pub tokens_sold: i128,
    pub private_tokens: i128,
    pub private_raised: i128,
    pub post_sale_minted: i128,
    pub company_minted: i128,
    pub contribution_count: u64,
    /// Contributions with an id below this have been minted.
    pub settled_count: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Contribution {
    pub id: u64,
    pub purchaser: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub rate: i128,
    pub bonus_percent: u32,
    pub tokens: i128,
    pub timestamp: u64,
}

/// Side-effect free pricing of a prospective purchase.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Quote {
    pub rate: i128,
    pub bonus_percent: u32,
    pub tokens: i128,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    State,
    Contribution(u64),
    Deposit(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
