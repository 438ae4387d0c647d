use anchor_lang::prelude::*;

use crate::constants::MAX_ASSETS;
use crate::error::FaucetError;
use crate::state::{Quota, WithdrawalWindow};

/// Quota and custodied supply of a single mint.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetLedger {
    pub mint: Pubkey,
    pub quota: Quota,
    /// Tokens currently held in the mint's vault on behalf of the faucet
    pub total_supply: u64,
}

/// Singleton faucet store, PDA seeds: `[FAUCET_SEED]`.
///
/// The PDA is also the authority of every vault, so withdrawals are signed
/// with its seeds.
#[account]
#[derive(InitSpace, Default)]
pub struct Faucet {
    /// Only key allowed to change quotas or hand over ownership
    pub owner: Pubkey,
    #[max_len(MAX_ASSETS)]
    pub assets: Vec<AssetLedger>,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Faucet {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    fn ledger(&self, mint: &Pubkey) -> Option<&AssetLedger> {
        self.assets.iter().find(|ledger| ledger.mint == *mint)
    }

    fn ledger_mut(&mut self, mint: &Pubkey) -> Option<&mut AssetLedger> {
        self.assets.iter_mut().find(|ledger| ledger.mint == *mint)
    }

    pub fn quota(&self, mint: &Pubkey) -> Quota {
        self.ledger(mint).map(|ledger| ledger.quota).unwrap_or_default()
    }

    pub fn total_supply(&self, mint: &Pubkey) -> u64 {
        self.ledger(mint).map_or(0, |ledger| ledger.total_supply)
    }

    /// Inserts or overwrites the quota of `mint`. Existing withdrawal windows
    /// are left alone and pick up the new values on their next access.
    pub fn set_quota(&mut self, mint: Pubkey, quota: Quota) -> Result<()> {
        if let Some(ledger) = self.ledger_mut(&mint) {
            ledger.quota = quota;
            return Ok(());
        }

        require!(self.assets.len() < MAX_ASSETS, FaucetError::TooManyAssets);
        self.assets.push(AssetLedger {
            mint,
            quota,
            total_supply: 0,
        });
        Ok(())
    }

    /// Donations are only accepted for mints with a configured quota, anything
    /// else would sit in a vault nobody can withdraw from.
    pub fn ensure_accepts_donation(&self, mint: &Pubkey) -> Result<()> {
        require!(
            self.quota(mint).is_configured(),
            FaucetError::QuotaNotConfigured
        );
        Ok(())
    }

    /// Records a donation that already landed in the vault and returns the new
    /// supply.
    pub fn credit(&mut self, mint: &Pubkey, amount: u64) -> Result<u64> {
        self.ensure_accepts_donation(mint)?;
        let ledger = self
            .ledger_mut(mint)
            .ok_or(error!(FaucetError::QuotaNotConfigured))?;

        ledger.total_supply = ledger
            .total_supply
            .checked_add(amount)
            .ok_or(error!(FaucetError::MathOverflow))?;
        Ok(ledger.total_supply)
    }

    /// Charges `amount` against both the account's window and the supply of
    /// `mint`, returning the new supply. Nothing is mutated on failure.
    ///
    /// Quota is checked before supply. A mint without a quota reports
    /// `NotEnoughSupply`.
    pub fn debit(
        &mut self,
        mint: &Pubkey,
        window: &mut WithdrawalWindow,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        let quota = self.quota(mint);
        let mut next = window.clone();
        next.reset_if_stale(now, quota.period);

        require!(quota.is_configured(), FaucetError::NotEnoughSupply);

        let consumed = match next.consumed.checked_add(amount) {
            Some(consumed) if consumed <= quota.amount => consumed,
            _ => return err!(FaucetError::AmountExceedsQuota),
        };

        let ledger = self
            .ledger_mut(mint)
            .ok_or(error!(FaucetError::NotEnoughSupply))?;
        ledger.total_supply = ledger
            .total_supply
            .checked_sub(amount)
            .ok_or(error!(FaucetError::NotEnoughSupply))?;
        next.consumed = consumed;
        *window = next;

        Ok(ledger.total_supply)
    }
}

/// Tokens that actually reached a vault, given its balance around a pull.
pub fn vault_inflow(balance_before: u64, balance_after: u64) -> Result<u64> {
    balance_after
        .checked_sub(balance_before)
        .ok_or(error!(FaucetError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_MONTH: u64 = 60 * 60 * 24 * 30;
    const NOW: i64 = 1_700_000_000;

    fn expect_err<T: std::fmt::Debug>(result: Result<T>, expected: FaucetError) {
        let expected: anchor_lang::error::Error = expected.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    fn faucet_with(mint: Pubkey, period: u64, amount: u64) -> Faucet {
        let mut faucet = Faucet {
            owner: Pubkey::new_unique(),
            ..Default::default()
        };
        faucet
            .set_quota(mint, Quota::new(period, amount).unwrap())
            .unwrap();
        faucet
    }

    #[test]
    fn unknown_mint_reads_as_zero() {
        let faucet = faucet_with(Pubkey::new_unique(), ONE_MONTH, 100);
        let unknown = Pubkey::new_unique();

        assert_eq!(faucet.quota(&unknown), Quota::default());
        assert_eq!(faucet.total_supply(&unknown), 0);
    }

    #[test]
    fn unknown_mint_rejects_donations_and_withdrawals() {
        let mut faucet = faucet_with(Pubkey::new_unique(), ONE_MONTH, 100);
        let unknown = Pubkey::new_unique();
        let mut window = WithdrawalWindow::default();

        expect_err(faucet.credit(&unknown, 1), FaucetError::QuotaNotConfigured);
        expect_err(
            faucet.debit(&unknown, &mut window, 1, NOW),
            FaucetError::NotEnoughSupply,
        );
        assert_eq!(window.consumed, 0);
    }

    #[test]
    fn donations_accumulate_running_total() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);

        assert_eq!(faucet.credit(&mint, 7).unwrap(), 7);
        assert_eq!(faucet.credit(&mint, 7).unwrap(), 14);
        assert_eq!(faucet.credit(&mint, 30).unwrap(), 44);
        assert_eq!(faucet.total_supply(&mint), 44);
    }

    #[test]
    fn withdrawals_reduce_supply_and_fill_window() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 500).unwrap();
        let mut window = WithdrawalWindow::default();

        assert_eq!(faucet.debit(&mint, &mut window, 1, NOW).unwrap(), 499);
        assert_eq!(faucet.debit(&mint, &mut window, 1, NOW + 10).unwrap(), 498);
        assert_eq!(faucet.total_supply(&mint), 498);
        assert_eq!(window.consumed, 2);
        assert_eq!(window.period_start, NOW);
    }

    #[test]
    fn quota_exhaustion_and_period_reset() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 500).unwrap();
        let mut window = WithdrawalWindow::default();

        for i in 0..100 {
            faucet.debit(&mint, &mut window, 1, NOW + i).unwrap();
        }
        assert_eq!(window.consumed, 100);

        expect_err(
            faucet.debit(&mint, &mut window, 1, NOW + 100),
            FaucetError::AmountExceedsQuota,
        );
        assert_eq!(faucet.total_supply(&mint), 400);
        assert_eq!(window.consumed, 100);

        let later = NOW + ONE_MONTH as i64;
        assert_eq!(faucet.debit(&mint, &mut window, 1, later).unwrap(), 399);
        assert_eq!(window.consumed, 1);
        assert_eq!(window.period_start, later);
    }

    #[test]
    fn full_quota_in_one_withdrawal() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 500).unwrap();
        let mut window = WithdrawalWindow::default();

        faucet.debit(&mint, &mut window, 100, NOW).unwrap();
        expect_err(
            faucet.debit(&mint, &mut window, 1, NOW + ONE_MONTH as i64 - 1),
            FaucetError::AmountExceedsQuota,
        );
        faucet
            .debit(&mint, &mut window, 1, NOW + ONE_MONTH as i64)
            .unwrap();
    }

    #[test]
    fn withdrawal_beyond_supply_fails() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        let mut window = WithdrawalWindow::default();

        expect_err(
            faucet.debit(&mint, &mut window, 1, NOW),
            FaucetError::NotEnoughSupply,
        );

        faucet.credit(&mint, 5).unwrap();
        expect_err(
            faucet.debit(&mint, &mut window, 6, NOW),
            FaucetError::NotEnoughSupply,
        );
        assert_eq!(faucet.total_supply(&mint), 5);
        assert_eq!(window, WithdrawalWindow::default());
    }

    #[test]
    fn quota_is_checked_before_supply() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 5).unwrap();
        let mut window = WithdrawalWindow::default();

        expect_err(
            faucet.debit(&mint, &mut window, 101, NOW),
            FaucetError::AmountExceedsQuota,
        );
    }

    #[test]
    fn windows_are_independent_per_account() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 500).unwrap();
        let mut first = WithdrawalWindow::default();
        let mut second = WithdrawalWindow::default();

        faucet.debit(&mint, &mut first, 100, NOW).unwrap();
        faucet.debit(&mint, &mut second, 100, NOW).unwrap();
        assert_eq!(faucet.total_supply(&mint), 300);
    }

    #[test]
    fn quotas_are_independent_per_mint() {
        let token = Pubkey::new_unique();
        let another = Pubkey::new_unique();
        let mut faucet = faucet_with(token, ONE_MONTH, 100);
        faucet
            .set_quota(another, Quota::new(2 * ONE_MONTH, 50).unwrap())
            .unwrap();

        assert_eq!(faucet.quota(&token), Quota::new(ONE_MONTH, 100).unwrap());
        assert_eq!(
            faucet.quota(&another),
            Quota::new(2 * ONE_MONTH, 50).unwrap()
        );

        faucet.credit(&another, 10).unwrap();
        assert_eq!(faucet.total_supply(&token), 0);
        assert_eq!(faucet.total_supply(&another), 10);
    }

    #[test]
    fn raised_quota_applies_to_live_window() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 500).unwrap();
        let mut window = WithdrawalWindow::default();

        faucet.debit(&mint, &mut window, 100, NOW).unwrap();
        faucet
            .set_quota(mint, Quota::new(ONE_MONTH, 150).unwrap())
            .unwrap();
        faucet.debit(&mint, &mut window, 50, NOW + 1).unwrap();
        assert_eq!(window.consumed, 150);
        assert_eq!(window.period_start, NOW);
        assert_eq!(faucet.total_supply(&mint), 350);
    }

    #[test]
    fn cleared_quota_blocks_donations_but_keeps_supply() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, 20).unwrap();

        faucet.set_quota(mint, Quota::new(0, 0).unwrap()).unwrap();
        expect_err(faucet.credit(&mint, 1), FaucetError::QuotaNotConfigured);
        assert_eq!(faucet.total_supply(&mint), 20);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut faucet = Faucet::default();
        for _ in 0..MAX_ASSETS {
            faucet
                .set_quota(Pubkey::new_unique(), Quota::new(1, 1).unwrap())
                .unwrap();
        }
        expect_err(
            faucet.set_quota(Pubkey::new_unique(), Quota::new(1, 1).unwrap()),
            FaucetError::TooManyAssets,
        );

        let existing = faucet.assets[0].mint;
        faucet
            .set_quota(existing, Quota::new(5, 5).unwrap())
            .unwrap();
        assert_eq!(faucet.quota(&existing), Quota::new(5, 5).unwrap());
    }

    #[test]
    fn donation_overflow_is_rejected() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        faucet.credit(&mint, u64::MAX).unwrap();

        expect_err(faucet.credit(&mint, 1), FaucetError::MathOverflow);
        assert_eq!(faucet.total_supply(&mint), u64::MAX);
    }

    #[test]
    fn fee_bearing_donation_credits_what_arrived() {
        let mint = Pubkey::new_unique();
        let mut faucet = faucet_with(mint, ONE_MONTH, 100);
        let mut window = WithdrawalWindow::default();

        // 1% withheld by the mint: 100 sent, 99 land in the vault
        let received = vault_inflow(0, 99).unwrap();
        assert_eq!(faucet.credit(&mint, received).unwrap(), 99);

        expect_err(
            faucet.debit(&mint, &mut window, 100, NOW),
            FaucetError::NotEnoughSupply,
        );
        assert_eq!(faucet.debit(&mint, &mut window, 99, NOW).unwrap(), 0);
    }

    #[test]
    fn vault_inflow_is_the_balance_change() {
        assert_eq!(vault_inflow(500, 600).unwrap(), 100);
        assert_eq!(vault_inflow(7, 7).unwrap(), 0);
        expect_err(vault_inflow(10, 9), FaucetError::MathOverflow);
    }
}
