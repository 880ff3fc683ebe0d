use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{AdmissionGate, VestingConfig, VestingLedger};

/// Admin removal of an entitlement before it unlocks. Direct-authority
/// instances only.
///
/// The time window is read off the caller's own ledger record, not the
/// target's; see DESIGN.md.
pub fn delist(ctx: Context<Delist>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::Unauthorized);
    require!(
        cfg.gate == AdmissionGate::DirectAuthority,
        VestingError::GateMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.ledger;

    let caller_unlock = ledger
        .find(&ctx.accounts.admin.key())
        .map(|e| e.unlock_time)
        .unwrap_or(0);
    require!(now < caller_unlock, VestingError::CannotDelistAfterUnlock);

    let entry = ledger
        .find_mut(&wallet)
        .filter(|e| e.is_present())
        .ok_or(VestingError::BeneficiaryNotFound)?;
    entry.clear_entitlement();

    emit!(Delisted { beneficiary: wallet });

    Ok(())
}

#[derive(Accounts)]
pub struct Delist<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"ledger", config.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct Delisted {
    pub beneficiary: Pubkey,
}
