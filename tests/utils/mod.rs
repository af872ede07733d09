/// Shared fixtures for the cross-contract tests.
pub mod test_fixtures;

pub use test_fixtures::*;

/// Common test constants
pub mod constants {
    pub const DAY: u64 = 86_400;
    pub const START: u64 = 1_700_000_000;
    pub const END: u64 = START + 60 * DAY;
    /// One whole unit of the payment currency (7 decimals).
    pub const UNIT: i128 = 10_000_000;
    pub const RATE: i128 = 50;
    pub const INITIAL_BALANCE: i128 = 10_000 * UNIT;
}
