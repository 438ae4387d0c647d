use anchor_lang::prelude::*;

#[event]
pub struct FaucetInitialized {
    pub faucet: Pubkey,
    pub owner: Pubkey,
    pub asset_count: u32,
    pub initialized_at: i64,
}

#[event]
pub struct QuotaSet {
    pub mint: Pubkey,
    pub period: u64,
    pub amount: u64,
}

#[event]
pub struct TokensDonated {
    pub mint: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

#[event]
pub struct TokensWithdrawn {
    pub mint: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

#[event]
#[derive(Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
