//! Bonus schedule.
//!
//! Two regimes share one entry point, [`bonus_percent`]:
//!
//! * Presale (`now < pre_sale_end`): the bonus depends on contribution size
//!   and artist status. Candidates are the size tier, the artist bonus and
//!   the whitelist flat bonus; the highest applicable one wins.
//! * Afterwards: ten-day time tiers anchored at the end of the presale (or
//!   at `start_time` when there is none). A whitelisted buyer with a flat
//!   bonus configured gets the flat bonus instead, whatever the time.
//!
//! Every window is half-open, so an instant exactly on a boundary already
//! belongs to the later tier.

use crate::types::SaleConfig;

pub const DAY: u64 = 86_400;
pub const TIER_WINDOW: u64 = 10 * DAY;
pub const ARTIST_BONUS: u32 = 25;
pub const MAX_BONUS_PERCENT: u32 = 100;

/// (minimum whole currency units, bonus percent), largest first.
const SIZE_TIERS: [(i128, u32); 4] = [(1000, 45), (500, 40), (100, 30), (35, 25)];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierBounds {
    pub tier1_end: u64,
    pub tier2_end: u64,
    pub tier3_end: u64,
}

/// Configured boundaries, with missing ones filled in as consecutive
/// ten-day windows.
pub fn tier_bounds(config: &SaleConfig) -> TierBounds {
    let anchor = config.pre_sale_end.unwrap_or(config.start_time);
    let tier1_end = config
        .tier1_end
        .unwrap_or_else(|| anchor.saturating_add(TIER_WINDOW));
    let tier2_end = config
        .tier2_end
        .unwrap_or_else(|| tier1_end.saturating_add(TIER_WINDOW));
    let tier3_end = config
        .tier3_end
        .unwrap_or_else(|| tier2_end.saturating_add(TIER_WINDOW));
    TierBounds {
        tier1_end,
        tier2_end,
        tier3_end,
    }
}

pub fn in_presale(config: &SaleConfig, now: u64) -> bool {
    matches!(config.pre_sale_end, Some(end) if now < end)
}

pub fn size_bonus(value: i128, currency_unit: i128) -> u32 {
    if currency_unit <= 0 {
        return 0;
    }
    let units = value / currency_unit;
    SIZE_TIERS
        .iter()
        .find(|(min_units, _)| units >= *min_units)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

pub fn time_bonus(config: &SaleConfig, now: u64) -> u32 {
    let bounds = tier_bounds(config);
    if now < bounds.tier1_end {
        config.tier1_bonus
    } else if now < bounds.tier2_end {
        config.tier2_bonus
    } else if now < bounds.tier3_end {
        config.tier3_bonus
    } else {
        0
    }
}

pub fn bonus_percent(
    config: &SaleConfig,
    now: u64,
    value: i128,
    whitelisted: bool,
    artist: bool,
) -> u32 {
    let flat = if whitelisted {
        config.whitelist_bonus
    } else {
        None
    };

    if in_presale(config, now) {
        let mut bonus = size_bonus(value, config.currency_unit);
        if artist {
            bonus = bonus.max(ARTIST_BONUS);
        }
        if let Some(flat) = flat {
            bonus = bonus.max(flat);
        }
        return bonus;
    }

    match flat {
        Some(flat) => flat,
        None => time_bonus(config, now),
    }
}
