use anchor_lang::prelude::*;

/// Per-account consumption window for one mint.
///
/// PDA seeds: `[WITHDRAWAL_WINDOW_SEED, mint, account]`. Created lazily on the
/// account's first withdrawal, so a fresh window starts zeroed and is always
/// stale on first access.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct WithdrawalWindow {
    /// Account the window belongs to
    pub account: Pubkey,
    /// Mint the window tracks
    pub mint: Pubkey,
    /// Unix timestamp at which the current period began
    pub period_start: i64,
    /// Amount withdrawn since `period_start`
    pub consumed: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl WithdrawalWindow {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn is_stale(&self, now: i64, period: u64) -> bool {
        let elapsed = now.saturating_sub(self.period_start);
        elapsed >= 0 && elapsed as u64 >= period
    }

    /// Starts a new period at `now` once the previous one has run out.
    /// The period length is read at access time, so a quota update moves the
    /// boundary of an open window without touching its start.
    pub fn reset_if_stale(&mut self, now: i64, period: u64) {
        if self.is_stale(now, period) {
            self.period_start = now;
            self.consumed = 0;
        }
    }
}
