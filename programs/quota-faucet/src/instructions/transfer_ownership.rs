use crate::access_control;
use crate::constants::FAUCET_SEED;
use crate::state::Faucet;
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let event = access_control::transfer_ownership(&mut ctx.accounts.faucet, &caller, new_owner)?;

    msg!(
        "Ownership transferred from {} to {}",
        event.previous_owner,
        event.new_owner
    );
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Account<'info, Faucet>,

    /// Must match the current owner
    pub owner: Signer<'info>,
}
