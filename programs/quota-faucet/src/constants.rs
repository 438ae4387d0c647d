use anchor_lang::prelude::*;

#[constant]
pub const FAUCET_SEED: &[u8] = b"faucet";

#[constant]
pub const WITHDRAWAL_WINDOW_SEED: &[u8] = b"withdrawal_window";

/// Number of distinct mints a single faucet can track.
pub const MAX_ASSETS: usize = 32;
