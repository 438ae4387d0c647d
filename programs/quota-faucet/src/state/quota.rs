use anchor_lang::prelude::*;

use crate::error::FaucetError;

/// Withdrawal allowance for one mint.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quota {
    /// Length of the rolling period in seconds
    pub period: u64,
    /// Maximum an account can withdraw per period, in the mint's base units
    pub amount: u64,
}

impl Quota {
    pub fn new(period: u64, amount: u64) -> Result<Self> {
        require!(
            (period == 0) == (amount == 0),
            FaucetError::InvalidQuota
        );
        Ok(Self { period, amount })
    }

    /// A quota counts as configured as soon as it has a non-zero amount.
    pub fn is_configured(&self) -> bool {
        self.amount > 0
    }
}
