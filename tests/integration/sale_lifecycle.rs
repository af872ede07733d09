use soroban_sdk::{testutils::Address as _, Address};

use company_allocation::{Error as VestingError, VestingPhase};
use token_sale::{Error, MintStrategy, SaleStatus};

use crate::utils::constants::*;
use crate::utils::{SaleFixture, SELF_DESTRUCT_AT, UNLOCK_AT};

#[test]
fn test_full_sale_and_vesting_lifecycle() {
    let f = SaleFixture::new();
    let investor = Address::generate(&f.env);
    let early = f.funded_buyer();
    let listed = f.funded_buyer();
    let fee = Address::generate(&f.env);

    // Before the sale: private round, whitelist and fee beneficiary.
    assert_eq!(f.sale.get_status(), SaleStatus::Pending);
    let private = f
        .sale
        .mint_for_private_investors(&f.owner, &investor, &60, &30, &(10 * UNIT));
    assert_eq!(private, 7_800_000_000);
    f.sale.add_to_whitelist(&f.owner, &listed);
    f.sale.set_two_percent(&f.owner, &fee);

    // First window.
    f.advance_to(START);
    assert_eq!(f.buy(&early, UNIT), 575_000_000);

    // Second window, flat whitelist bonus.
    f.advance_to(START + 12 * DAY);
    assert_eq!(f.buy(&listed, UNIT), 600_000_000);

    assert_eq!(f.payment.balance(&fee), 400_000);
    assert_eq!(f.payment.balance(&f.treasury), 19_600_000);
    assert_eq!(f.sale.wei_raised(), 2 * UNIT);

    // Transfers stay locked while the sale runs.
    assert!(f.token.try_transfer(&early, &listed, &1).is_err());

    f.advance_to(END);
    f.sale.finalize(&f.owner);

    // The company ends up with exactly 20% of the final supply.
    let sold = 7_800_000_000 + 575_000_000 + 600_000_000;
    let company = 2_243_750_000;
    assert_eq!(f.token.balance(&f.allocation_id), company);
    assert_eq!(f.token.total_supply(), sold + company);
    assert_eq!(company * 5, f.token.total_supply());
    assert!(f.token.minting_finished());
    assert!(!f.token.paused());
    f.token.transfer(&early, &listed, &75_000_000);
    assert_eq!(f.token.balance(&listed), 675_000_000);

    // Vesting.
    let founder1 = Address::generate(&f.env);
    let founder2 = Address::generate(&f.env);
    f.allocation.add_allocation(&f.owner, &founder1, &300_000_000);
    f.allocation.add_allocation(&f.owner, &founder2, &100_000_000);
    let headroom = company - 400_000_000;
    assert_eq!(
        f.allocation.try_add_allocation(&f.owner, &founder2, &(headroom + 1)),
        Err(Ok(VestingError::CapExceeded))
    );

    assert_eq!(f.allocation.get_phase(), VestingPhase::Open);
    assert_eq!(
        f.allocation.try_unlock(&founder1),
        Err(Ok(VestingError::PhaseViolation))
    );
    assert_eq!(f.allocation.tokens_created(), 0);
    assert_eq!(f.token.balance(&founder1), 0);

    f.advance_to(UNLOCK_AT);
    assert_eq!(f.allocation.unlock(&founder1), 300_000_000);
    assert_eq!(f.token.balance(&founder1), 300_000_000);
    assert_eq!(f.allocation.deposited(), company);
    assert_eq!(
        f.allocation.try_kill(&f.owner),
        Err(Ok(VestingError::PhaseViolation))
    );

    f.advance_to(SELF_DESTRUCT_AT);
    assert_eq!(f.allocation.get_phase(), VestingPhase::Expired);
    assert_eq!(f.allocation.kill(&f.owner), company - 300_000_000);
    assert_eq!(f.token.balance(&f.owner), company - 300_000_000);
    assert!(f.allocation.get_state().killed);
    assert_eq!(f.allocation.deposited(), company);
    assert!(f.allocation.allocated_tokens() <= f.allocation.deposited());
    assert_eq!(
        f.allocation.try_unlock(&founder2),
        Err(Ok(VestingError::PhaseViolation))
    );
}

#[test]
fn test_deferred_sale_settles_before_finalize() {
    let f = SaleFixture::with_config(|c| c.mint_strategy = MintStrategy::Deferred);
    let buyers = [f.funded_buyer(), f.funded_buyer(), f.funded_buyer()];

    f.advance_to(START);
    for buyer in buyers.iter() {
        f.buy(buyer, UNIT);
    }
    assert_eq!(f.token.total_supply(), 0);

    f.advance_to(END);
    assert_eq!(f.sale.try_finalize(&f.owner), Err(Ok(Error::PhaseViolation)));

    assert_eq!(f.sale.send_tokens_to_purchasers(&f.owner, &2), 2);
    assert_eq!(f.sale.send_tokens_to_purchasers(&f.owner, &2), 1);
    for buyer in buyers.iter() {
        assert_eq!(f.token.balance(buyer), 575_000_000);
    }

    f.sale.finalize(&f.owner);
    assert_eq!(f.token.total_supply(), 3 * 575_000_000 * 5 / 4);
}

#[test]
fn test_failed_goal_refunds_every_purchaser() {
    let f = SaleFixture::with_config(|c| {
        c.goal = Some(5 * UNIT);
        c.cap = Some(10 * UNIT);
    });
    let first = f.funded_buyer();
    let second = f.funded_buyer();

    f.advance_to(START);
    f.buy(&first, UNIT);
    f.buy(&second, 2 * UNIT);
    assert_eq!(f.payment.balance(&f.sale_id), 3 * UNIT);

    f.advance_to(END);
    f.sale.finalize(&f.owner);
    assert_eq!(f.payment.balance(&f.treasury), 0);

    assert_eq!(f.sale.claim_refund(&first), UNIT);
    assert_eq!(f.sale.claim_refund(&second), 2 * UNIT);
    assert_eq!(f.payment.balance(&first), INITIAL_BALANCE);
    assert_eq!(f.payment.balance(&second), INITIAL_BALANCE);
    assert_eq!(f.payment.balance(&f.sale_id), 0);
    assert_eq!(f.sale.get_state().escrowed, 0);
}

#[test]
fn test_registry_is_owned_by_the_sale() {
    let f = SaleFixture::new();
    let buyer = Address::generate(&f.env);

    // Only the sale may write to its registry.
    assert!(f
        .registry
        .try_add_to_whitelist(&f.owner, &buyer)
        .is_err());
    f.sale.whitelist_artist(&f.owner, &buyer);
    assert!(f.registry.is_artist(&buyer));
    assert_eq!(f.registry.owner(), f.sale_id);
}
