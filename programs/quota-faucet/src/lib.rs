pub mod access_control;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("CPWnuoaFcTM4BKNQu2XrVUeXMzb9Q36d2ER7KJsvovtP");

#[program]
pub mod quota_faucet {
    use super::*;

    /// Create the faucet owned by the program's upgrade authority, with one
    /// quota per mint.
    /// `mints`, `periods` and `amounts` are read as aligned columns.
    pub fn initialize(
        ctx: Context<Initialize>,
        mints: Vec<Pubkey>,
        periods: Vec<u64>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        initialize::handler(ctx, mints, periods, amounts)
    }

    /// Register or overwrite the quota of a mint (owner only)
    pub fn set_quota(ctx: Context<SetQuota>, mint: Pubkey, period: u64, amount: u64) -> Result<()> {
        set_quota::handler(ctx, mint, period, amount)
    }

    /// Top up the faucet supply of a configured mint
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        donate::handler(ctx, amount)
    }

    /// Withdraw within the signer's quota for the current period
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }

    /// Hand the faucet over to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        transfer_ownership::handler(ctx, new_owner)
    }

    /// Current owner of the faucet
    pub fn get_owner(ctx: Context<ReadFaucet>) -> Result<Pubkey> {
        views::get_owner(ctx)
    }

    /// Quota of a mint, zeroed when none is configured
    pub fn get_quota(ctx: Context<ReadFaucet>, mint: Pubkey) -> Result<Quota> {
        views::get_quota(ctx, mint)
    }

    /// Tokens the faucet holds for a mint
    pub fn get_total_supply(ctx: Context<ReadFaucet>, mint: Pubkey) -> Result<u64> {
        views::get_total_supply(ctx, mint)
    }
}
