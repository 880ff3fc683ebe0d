use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{AdmissionGate, Blacklist, EntitlementRecord, VestingConfig, VestingLedger};

pub fn initialize(
    ctx: Context<Initialize>,
    gate: AdmissionGate,
    merkle_root: [u8; 32],
    claim_signer: [u8; 20],
) -> Result<()> {
    match gate {
        AdmissionGate::MerkleMembership => {
            require!(merkle_root != [0u8; 32], VestingError::InvalidConfig)
        }
        AdmissionGate::SignatureAuthority => {
            require!(claim_signer != [0u8; 20], VestingError::InvalidConfig)
        }
        AdmissionGate::DirectAuthority => {}
    }

    let cfg = &mut ctx.accounts.config;
    cfg.mint = ctx.accounts.mint.key();
    cfg.admin = ctx.accounts.admin.key();
    cfg.gate = gate;
    cfg.merkle_root = merkle_root;
    cfg.claim_signer = claim_signer;
    cfg.halted = false;
    cfg.claim_in_progress = false;

    let ledger = &mut ctx.accounts.ledger;
    for entry in ledger.entries.iter_mut() {
        *entry = EntitlementRecord::default();
    }

    let blacklist = &mut ctx.accounts.blacklist;
    blacklist.count = 0;

    emit!(VestingInitialized {
        mint: cfg.mint,
        admin: cfg.admin,
        gate,
        merkle_root,
        claim_signer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingConfig::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = admin,
        space = VestingLedger::space(),
        seeds = [b"ledger", config.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        init,
        payer = admin,
        space = Blacklist::space(),
        seeds = [b"blacklist", config.key().as_ref()],
        bump
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub gate: AdmissionGate,
    pub merkle_root: [u8; 32],
    pub claim_signer: [u8; 20],
}
