use crate::access_control::only_upgrade_authority;
use crate::constants::FAUCET_SEED;
use crate::error::FaucetError;
use crate::events::{FaucetInitialized, QuotaSet};
use crate::program::QuotaFaucet;
use crate::state::{Faucet, Quota};
use anchor_lang::prelude::*;

pub fn handler(
    ctx: Context<Initialize>,
    mints: Vec<Pubkey>,
    periods: Vec<u64>,
    amounts: Vec<u64>,
) -> Result<()> {
    only_upgrade_authority(
        ctx.accounts.program_data.upgrade_authority_address,
        &ctx.accounts.owner.key(),
    )?;
    require!(
        mints.len() == periods.len() && mints.len() == amounts.len(),
        FaucetError::QuotaLengthMismatch
    );

    let faucet = &mut ctx.accounts.faucet;
    faucet.owner = ctx.accounts.owner.key();
    faucet.assets = Vec::new();
    faucet.bump = ctx.bumps.faucet;

    for ((mint, period), amount) in mints.iter().zip(periods).zip(amounts) {
        faucet.set_quota(*mint, Quota::new(period, amount)?)?;
        emit!(QuotaSet {
            mint: *mint,
            period,
            amount,
        });
    }

    msg!(
        "Faucet initialized by {} with {} quota(s)",
        faucet.owner,
        faucet.assets.len()
    );

    emit!(FaucetInitialized {
        faucet: faucet.key(),
        owner: faucet.owner,
        asset_count: faucet.assets.len() as u32,
        initialized_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Faucet store PDA
    #[account(
        init,
        payer = owner,
        space = Faucet::SPACE,
        seeds = [FAUCET_SEED],
        bump
    )]
    pub faucet: Account<'info, Faucet>,

    /// Deployer, becomes the faucet owner
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, QuotaFaucet>,

    /// Upgradeable loader data of this program, holds the upgrade authority
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}
