use crate::constants::FAUCET_SEED;
use crate::events::TokensDonated;
use crate::state::{vault_inflow, Faucet};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

pub fn handler(ctx: Context<Donate>, amount: u64) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    ctx.accounts.faucet.ensure_accepts_donation(&mint)?;

    // Pull first, the supply is only credited once the tokens are in the vault
    let vault_balance = ctx.accounts.vault.amount;
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.donor_token_account.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.donor.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new(cpi_program, cpi_accounts);

    transfer_checked(cpi_context, amount, ctx.accounts.mint.decimals)?;

    // Token-2022 transfer fees are withheld from what lands in the vault
    ctx.accounts.vault.reload()?;
    let received = vault_inflow(vault_balance, ctx.accounts.vault.amount)?;
    let total_supply = ctx.accounts.faucet.credit(&mint, received)?;

    msg!(
        "Received {} of {} ({} sent) from {}, supply is now {}",
        received,
        mint,
        amount,
        ctx.accounts.donor.key(),
        total_supply
    );

    emit!(TokensDonated {
        mint,
        donor: ctx.accounts.donor.key(),
        amount: received,
        total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Donate<'info> {
    /// Faucet store PDA
    #[account(
        mut,
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Account<'info, Faucet>,

    /// Mint of the donated asset
    pub mint: InterfaceAccount<'info, Mint>,

    /// Faucet vault for this mint, owned by the faucet PDA
    #[account(
        init_if_needed,
        payer = donor,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Donor's token account (source)
    #[account(
        mut,
        token::mint = mint,
        token::authority = donor,
        token::token_program = token_program,
    )]
    pub donor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub donor: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
