use crate::access_control::only_owner;
use crate::constants::FAUCET_SEED;
use crate::events::QuotaSet;
use crate::state::{Faucet, Quota};
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<SetQuota>, mint: Pubkey, period: u64, amount: u64) -> Result<()> {
    let faucet = &mut ctx.accounts.faucet;
    only_owner(faucet, &ctx.accounts.owner.key())?;

    faucet.set_quota(mint, Quota::new(period, amount)?)?;

    msg!("Quota for {} set to {} every {}s", mint, amount, period);
    emit!(QuotaSet {
        mint,
        period,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetQuota<'info> {
    #[account(
        mut,
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Account<'info, Faucet>,

    pub owner: Signer<'info>,
}
