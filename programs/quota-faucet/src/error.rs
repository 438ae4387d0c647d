use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    #[msg("OWNABLE_SENDER_NOT_OWNER: only the faucet owner can perform this action")]
    NotOwner,

    #[msg("OWNABLE_NEW_OWNER_ADDRESS_ZERO: the new owner cannot be the zero key")]
    NewOwnerIsZero,

    #[msg("FAUCET_QUOTA_AMOUNT_ZERO: no quota is configured for this mint")]
    QuotaNotConfigured,

    #[msg("FAUCET_NOT_ENOUGH_SUPPLY: the faucet does not hold enough tokens")]
    NotEnoughSupply,

    #[msg("FAUCET_AMOUNT_EXCEEDS_QUOTA: withdrawal exceeds the quota for the current period")]
    AmountExceedsQuota,

    #[msg("Mints, periods and amounts must have the same length")]
    QuotaLengthMismatch,

    #[msg("Maximum number of assets reached")]
    TooManyAssets,

    #[msg("Quota period and amount must both be zero or both be positive")]
    InvalidQuota,

    #[msg("Only the program upgrade authority can initialize the faucet")]
    NotUpgradeAuthority,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
