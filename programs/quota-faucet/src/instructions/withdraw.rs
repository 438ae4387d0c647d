use crate::constants::{FAUCET_SEED, WITHDRAWAL_WINDOW_SEED};
use crate::events::TokensWithdrawn;
use crate::state::{Faucet, WithdrawalWindow};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    let account = ctx.accounts.account.key();
    let clock = Clock::get()?;

    let window = &mut ctx.accounts.withdrawal_window;
    window.account = account;
    window.mint = mint;
    window.bump = ctx.bumps.withdrawal_window;

    // The debit is undone with the rest of the transaction if the push fails
    let total_supply = ctx
        .accounts
        .faucet
        .debit(&mint, window, amount, clock.unix_timestamp)?;
    let consumed = window.consumed;

    let faucet_bump = ctx.accounts.faucet.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[FAUCET_SEED, &[faucet_bump]]];

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.account_token_account.to_account_info(),
        authority: ctx.accounts.faucet.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

    // The vault always gives up `amount`, a mint transfer fee is withheld on
    // the receiving side
    transfer_checked(cpi_context, amount, ctx.accounts.mint.decimals)?;

    msg!(
        "Sent {} of {} to {} ({} used this period), supply is now {}",
        amount,
        mint,
        account,
        consumed,
        total_supply
    );

    emit!(TokensWithdrawn {
        mint,
        account,
        amount,
        total_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Faucet store PDA, also the vault authority
    #[account(
        mut,
        seeds = [FAUCET_SEED],
        bump = faucet.bump,
    )]
    pub faucet: Account<'info, Faucet>,

    /// Mint of the requested asset
    pub mint: InterfaceAccount<'info, Mint>,

    /// Faucet vault for this mint (source)
    #[account(
        init_if_needed,
        payer = account,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Consumption window of this account for this mint
    #[account(
        init_if_needed,
        payer = account,
        space = WithdrawalWindow::SPACE,
        seeds = [WITHDRAWAL_WINDOW_SEED, mint.key().as_ref(), account.key().as_ref()],
        bump
    )]
    pub withdrawal_window: Account<'info, WithdrawalWindow>,

    /// Account's token account (destination)
    #[account(
        init_if_needed,
        payer = account,
        associated_token::mint = mint,
        associated_token::authority = account,
        associated_token::token_program = token_program,
    )]
    pub account_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Account requesting tokens
    #[account(mut)]
    pub account: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
