#![no_std]
#![allow(clippy::too_many_arguments)]

mod bonus;
mod contract;
mod errors;
mod events;
mod interfaces;
mod pricing;
mod storage;
mod types;


pub use bonus::{ARTIST_BONUS, MAX_BONUS_PERCENT, TIER_WINDOW};
pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use pricing::FEE_PERCENT;
pub use types::{Contribution, MintStrategy, Quote, SaleConfig, SaleState, SaleStatus};
