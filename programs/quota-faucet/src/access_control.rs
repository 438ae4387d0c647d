use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::events::OwnershipTransferred;
use crate::state::Faucet;

/// Guard shared by every owner-only instruction.
pub fn only_owner(faucet: &Faucet, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, faucet.owner, FaucetError::NotOwner);
    Ok(())
}

/// The faucet can only be created by whoever deployed the program. A program
/// without an upgrade authority can no longer be initialized.
pub fn only_upgrade_authority(upgrade_authority: Option<Pubkey>, caller: &Pubkey) -> Result<()> {
    require!(
        upgrade_authority == Some(*caller),
        FaucetError::NotUpgradeAuthority
    );
    Ok(())
}

/// Hands the faucet over to `new_owner` and returns the observation to emit.
///
/// The zero key is refused before the caller is looked at, so it reports
/// `NewOwnerIsZero` whoever signs.
pub fn transfer_ownership(
    faucet: &mut Faucet,
    caller: &Pubkey,
    new_owner: Pubkey,
) -> Result<OwnershipTransferred> {
    require!(new_owner != Pubkey::default(), FaucetError::NewOwnerIsZero);
    only_owner(faucet, caller)?;

    let previous_owner = faucet.owner;
    faucet.owner = new_owner;
    Ok(OwnershipTransferred {
        previous_owner,
        new_owner,
    })
}
