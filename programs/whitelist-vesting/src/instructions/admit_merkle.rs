use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::gates;
use crate::instructions::admit_direct::Admitted;
use crate::state::{AdmissionGate, Blacklist, VestingConfig, VestingLedger};

/// Self-service admission against the Merkle commitment root fixed at
/// initialization. One-shot per beneficiary.
pub fn admit_merkle(
    ctx: Context<AdmitMerkle>,
    beneficiary: Pubkey,
    amount: u64,
    unlock_delay: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(
        cfg.gate == AdmissionGate::MerkleMembership,
        VestingError::GateMismatch
    );
    require!(!cfg.halted, VestingError::Halted);

    let now = Clock::get()?.unix_timestamp;
    gates::admit_merkle(
        &mut ctx.accounts.ledger,
        &ctx.accounts.blacklist,
        &cfg.merkle_root,
        &beneficiary,
        amount,
        unlock_delay,
        &proof,
        now,
    )?;

    emit!(Admitted {
        beneficiary,
        amount,
        unlock_delay,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AdmitMerkle<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"ledger", config.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        seeds = [b"blacklist", config.key().as_ref()],
        bump
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

    pub payer: Signer<'info>,
}
