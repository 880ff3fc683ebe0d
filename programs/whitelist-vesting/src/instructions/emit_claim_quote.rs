use anchor_lang::prelude::*;

use crate::state::{VestingConfig, VestingLedger};
use crate::utils::accrual;

/// Read surface: emits the entitlement record, the remaining eligible amount
/// (`total - claimed`) and the reward claimable right now under the
/// instance's policy. Absent wallets quote as the zero record.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let now = Clock::get()?.unix_timestamp;

    let record = ctx.accounts.ledger.read(&wallet);
    let eligible = record.eligible_amount()?;
    let reward = accrual::claimable(cfg.gate.claim_policy(), &record, now)?;

    emit!(ClaimQuote {
        beneficiary: wallet,
        total_amount: record.total_amount,
        unlock_time: record.unlock_time,
        claimed_amount: record.claimed_amount,
        eligible_amount: eligible,
        reward,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [b"ledger", config.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,
}

#[event]
pub struct ClaimQuote {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub unlock_time: i64,
    pub claimed_amount: u64,
    pub eligible_amount: u64,
    pub reward: u64,
    pub timestamp: i64,
}
