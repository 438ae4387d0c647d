use crate::constants::FAUCET_SEED;
use crate::state::{Faucet, Quota};
use anchor_lang::prelude::*;

pub fn get_owner(ctx: Context<ReadFaucet>) -> Result<Pubkey> {
    Ok(ctx.accounts.faucet.owner)
}

pub fn get_quota(ctx: Context<ReadFaucet>, mint: Pubkey) -> Result<Quota> {
    Ok(ctx.accounts.faucet.quota(&mint))
}

pub fn get_total_supply(ctx: Context<ReadFaucet>, mint: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.faucet.total_supply(&mint))
}

/// Read-only access to the faucet store, no signer required.
#[derive(Accounts)]
pub struct ReadFaucet<'info> {
    #[account(
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Account<'info, Faucet>,
}
