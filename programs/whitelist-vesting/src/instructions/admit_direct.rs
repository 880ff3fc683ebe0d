use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::gates;
use crate::state::{AdmissionGate, VestingConfig, VestingLedger};

/// Batch admission by the admin. Parallel arrays of (beneficiary, amount,
/// unlock delay); re-whitelisting an existing beneficiary overwrites the
/// record and resets its claimed amount.
pub fn admit_direct(
    ctx: Context<AdmitDirect>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
    unlock_delays: Vec<u64>,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::Unauthorized);
    require!(
        cfg.gate == AdmissionGate::DirectAuthority,
        VestingError::GateMismatch
    );
    require!(!cfg.halted, VestingError::Halted);

    let now = Clock::get()?.unix_timestamp;
    gates::admit_direct(
        &mut ctx.accounts.ledger,
        &beneficiaries,
        &amounts,
        &unlock_delays,
        now,
    )?;

    for ((beneficiary, amount), unlock_delay) in
        beneficiaries.iter().zip(&amounts).zip(&unlock_delays)
    {
        emit!(Admitted {
            beneficiary: *beneficiary,
            amount: *amount,
            unlock_delay: *unlock_delay,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct AdmitDirect<'info> {
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
pub struct Admitted {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub unlock_delay: u64,
}
