use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Blacklist, VestingConfig, VestingLedger};
use crate::utils::accrual::{self, ClaimPolicy};

/// Beneficiary-invoked payout. The ledger mutation lands before the outbound
/// vault transfer, and the whole call is bracketed by the re-entrancy guard
/// so a nested entry cannot interleave between check and effect.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture AccountInfos/bumps before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;
    let beneficiary = ctx.accounts.beneficiary.key();

    let cfg = &mut ctx.accounts.config;
    require!(!cfg.halted, VestingError::Halted);
    require!(!cfg.claim_in_progress, VestingError::ReentrantCall);
    if cfg.gate.uses_blacklist() {
        require!(
            !ctx.accounts.blacklist.contains(&beneficiary),
            VestingError::Blacklisted
        );
    }

    let now = Clock::get()?.unix_timestamp;
    let policy = cfg.gate.claim_policy();

    let ledger = &mut ctx.accounts.ledger;
    let entry = ledger
        .find_mut(&beneficiary)
        .ok_or(VestingError::BeneficiaryNotFound)?;
    require!(entry.is_present(), VestingError::BeneficiaryNotFound);
    require!(now > entry.unlock_time, VestingError::LockActive);

    let reward = accrual::claimable(policy, entry, now)?;
    require!(reward > 0, VestingError::NothingToClaim);

    require_keys_eq!(ctx.accounts.mint.key(), cfg.mint, VestingError::InvalidTokenMint);
    let expected_ata = expected_ata_address(&beneficiary, &cfg.mint);
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.key(),
        expected_ata,
        VestingError::InvalidBeneficiaryAta
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.mint,
        cfg.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= reward,
        VestingError::InsufficientVaultBalance
    );

    // Mutate the ledger first; the transfer is the point where control leaves
    // this program's trust boundary.
    entry.record_claim(reward)?;
    if policy == ClaimPolicy::LumpSum {
        entry.clear_entitlement();
    }

    cfg.claim_in_progress = true;
    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        reward,
    )?;
    cfg.claim_in_progress = false;

    emit!(Claimed {
        beneficiary,
        amount: reward,
        timestamp: now,
    });

    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [b"config"], bump)]
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

    #[account(
        mut,
        seeds = [b"vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
