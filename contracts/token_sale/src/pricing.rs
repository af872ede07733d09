use crate::errors::Error;

pub const FEE_PERCENT: i128 = 2;

/// Returns `(fee_share, treasury_share)`. The fee is floored and the
/// treasury takes the remainder, so the two always add up to `value`.
pub fn split_funds(value: i128, has_fee_beneficiary: bool) -> (i128, i128) {
    if !has_fee_beneficiary {
        return (0, value);
    }
    let fee = value * FEE_PERCENT / 100;
    (fee, value - fee)
}

/// `value × rate × (100 + bonus) / 100`, floored.
pub fn token_amount(value: i128, rate: i128, bonus_percent: u32) -> Result<i128, Error> {
    value
        .checked_mul(rate)
        .and_then(|base| base.checked_mul(100 + i128::from(bonus_percent)))
        .map(|scaled| scaled / 100)
        .ok_or(Error::InvalidParameter)
}

/// Tokens owed to the company so that it ends up holding `share_percent`
/// of the final supply.
pub fn company_share(total_supply: i128, share_percent: u32) -> Result<i128, Error> {
    if share_percent == 0 {
        return Ok(0);
    }
    if share_percent >= 100 {
        return Err(Error::InvalidParameter);
    }
    total_supply
        .checked_mul(i128::from(share_percent))
        .map(|scaled| scaled / (100 - i128::from(share_percent)))
        .ok_or(Error::InvalidParameter)
}
