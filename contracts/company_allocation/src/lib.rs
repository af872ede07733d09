//! Time-locked company/team allocation.
//!
//! The sale mints its post-sale remainder here at finalization. The owner
//! splits that balance among beneficiaries, who may each claim their share
//! once `unlocked_at` has passed. After `self_destruct_at` the owner may
//! sweep whatever is left and close the ledger for good.
#![no_std]

mod events;
mod types;


pub use types::{AllocationEntry, VestingPhase, VestingState};

use soroban_sdk::{contract, contracterror, contractimpl, contractmeta, token, Address, Env};
use types::DataKey;

contractmeta!(
    key = "Description",
    val = "Time-locked company allocation fed by the token sale"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Domain (3–6) ---
    InvalidParameter = 3,
    PhaseViolation = 4,
    AccessViolation = 5,
    CapExceeded = 6,
}

#[contract]
pub struct CompanyAllocation;

#[contractimpl]
impl CompanyAllocation {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        unlocked_at: u64,
        self_destruct_at: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if self_destruct_at <= unlocked_at {
            return Err(Error::InvalidParameter);
        }

        let state = VestingState {
            unlocked_at,
            self_destruct_at,
            allocated_tokens: 0,
            tokens_created: 0,
            swept: 0,
            killed: false,
        };
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::State, &state);
        Ok(())
    }

    /// Promise `amount` more tokens to `beneficiary`. The running total of
    /// promises can never exceed what has been deposited.
    pub fn add_allocation(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if beneficiary == env.current_contract_address() || amount <= 0 {
            return Err(Error::InvalidParameter);
        }

        let mut state = Self::read_state(&env)?;
        if state.killed {
            return Err(Error::PhaseViolation);
        }

        let mut entry = Self::read_allocation(&env, &beneficiary);
        if entry.unlocked {
            return Err(Error::PhaseViolation);
        }

        let allocated = state
            .allocated_tokens
            .checked_add(amount)
            .ok_or(Error::InvalidParameter)?;
        if allocated > Self::deposited(env.clone())? {
            return Err(Error::CapExceeded);
        }

        entry.amount += amount;
        state.allocated_tokens = allocated;
        Self::write_allocation(&env, &beneficiary, &entry);
        env.storage().instance().set(&DataKey::State, &state);

        events::emit_allocation_added(&env, beneficiary, amount, allocated);
        Ok(())
    }

    /// Release the caller's whole allocation. Returns the amount transferred.
    pub fn unlock(env: Env, beneficiary: Address) -> Result<i128, Error> {
        beneficiary.require_auth();

        let mut state = Self::read_state(&env)?;
        if state.killed || env.ledger().timestamp() < state.unlocked_at {
            return Err(Error::PhaseViolation);
        }

        let mut entry = Self::read_allocation(&env, &beneficiary);
        if entry.unlocked || entry.amount == 0 {
            return Err(Error::PhaseViolation);
        }

        let amount = entry.amount;
        entry.amount = 0;
        entry.unlocked = true;
        state.tokens_created += amount;
        Self::write_allocation(&env, &beneficiary, &entry);
        env.storage().instance().set(&DataKey::State, &state);

        Self::token_client(&env)?.transfer(&env.current_contract_address(), &beneficiary, &amount);

        events::emit_unlocked(&env, beneficiary, amount, state.tokens_created);
        Ok(amount)
    }

    /// Sweep every unclaimed token back to the owner once the sweep deadline
    /// has passed. The ledger stays readable afterwards.
    pub fn kill(env: Env, caller: Address) -> Result<i128, Error> {
        Self::require_owner(&env, &caller)?;

        let mut state = Self::read_state(&env)?;
        if state.killed || env.ledger().timestamp() < state.self_destruct_at {
            return Err(Error::PhaseViolation);
        }

        let token = Self::token_client(&env)?;
        let remaining = token.balance(&env.current_contract_address());

        state.killed = true;
        state.swept = remaining;
        env.storage().instance().set(&DataKey::State, &state);

        if remaining > 0 {
            token.transfer(&env.current_contract_address(), &caller, &remaining);
        }

        events::emit_killed(&env, caller, remaining);
        Ok(remaining)
    }

    // View functions
    pub fn get_state(env: Env) -> Result<VestingState, Error> {
        Self::read_state(&env)
    }

    pub fn get_phase(env: Env) -> Result<VestingPhase, Error> {
        let state = Self::read_state(&env)?;
        let now = env.ledger().timestamp();
        Ok(if now < state.unlocked_at {
            VestingPhase::Open
        } else if now < state.self_destruct_at {
            VestingPhase::Unlockable
        } else {
            VestingPhase::Expired
        })
    }

    pub fn allocation_of(env: Env, beneficiary: Address) -> i128 {
        Self::read_allocation(&env, &beneficiary).amount
    }

    pub fn is_unlocked(env: Env, beneficiary: Address) -> bool {
        Self::read_allocation(&env, &beneficiary).unlocked
    }

    /// Tokens held now plus everything that has left the contract, whether
    /// released to beneficiaries or swept back to the owner.
    pub fn deposited(env: Env) -> Result<i128, Error> {
        let state = Self::read_state(&env)?;
        let held = Self::token_client(&env)?.balance(&env.current_contract_address());
        Ok(held + state.tokens_created + state.swept)
    }

    pub fn allocated_tokens(env: Env) -> Result<i128, Error> {
        Ok(Self::read_state(&env)?.allocated_tokens)
    }

    pub fn tokens_created(env: Env) -> Result<i128, Error> {
        Ok(Self::read_state(&env)?.tokens_created)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}

impl CompanyAllocation {
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = Self::owner(env.clone())?;
        caller.require_auth();
        if *caller != owner {
            return Err(Error::AccessViolation);
        }
        Ok(())
    }

    fn read_state(env: &Env) -> Result<VestingState, Error> {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(Error::NotInitialized)
    }

    fn read_allocation(env: &Env, beneficiary: &Address) -> AllocationEntry {
        env.storage()
            .persistent()
            .get(&DataKey::Allocation(beneficiary.clone()))
            .unwrap_or(AllocationEntry {
                amount: 0,
                unlocked: false,
            })
    }

    fn write_allocation(env: &Env, beneficiary: &Address, entry: &AllocationEntry) {
        env.storage()
            .persistent()
            .set(&DataKey::Allocation(beneficiary.clone()), entry);
    }

    fn token_client(env: &Env) -> Result<token::Client<'_>, Error> {
        let address: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)?;
        Ok(token::Client::new(env, &address))
    }
}
