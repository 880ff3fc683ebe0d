use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::gates;
use crate::instructions::admit_direct::Admitted;
use crate::state::{AdmissionGate, Blacklist, VestingConfig, VestingLedger};

/// Self-service admission with an offline secp256k1 authorization. Each
/// `(beneficiary, nonce)` pair is consumable once; a fresh nonce re-admits
/// the same wallet with a new schedule.
pub fn admit_signed(
    ctx: Context<AdmitSigned>,
    beneficiary: Pubkey,
    amount: u64,
    unlock_delay: u64,
    nonce: u64,
    recovery_id: u8,
    signature: [u8; 64],
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(
        cfg.gate == AdmissionGate::SignatureAuthority,
        VestingError::GateMismatch
    );
    require!(!cfg.halted, VestingError::Halted);

    let now = Clock::get()?.unix_timestamp;
    gates::admit_signed(
        &mut ctx.accounts.ledger,
        &ctx.accounts.blacklist,
        &cfg.claim_signer,
        &beneficiary,
        amount,
        unlock_delay,
        nonce,
        recovery_id,
        &signature,
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
pub struct AdmitSigned<'info> {
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
