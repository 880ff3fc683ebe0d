use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Blacklist, VestingConfig};

/// Admin toggle of the blocked-beneficiary set. Blocks both admission and
/// claiming, independent of ledger state. Merkle and Signature instances only.
pub fn set_blacklist(ctx: Context<SetBlacklist>, wallet: Pubkey, blocked: bool) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::Unauthorized);
    require!(cfg.gate.uses_blacklist(), VestingError::GateMismatch);
    require!(wallet != Pubkey::default(), VestingError::ZeroAddress);

    let blacklist = &mut ctx.accounts.blacklist;
    if blocked {
        blacklist.insert(&wallet)?;
    } else {
        blacklist.remove(&wallet);
    }

    emit!(BlacklistChanged {
        beneficiary: wallet,
        blocked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetBlacklist<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"blacklist", config.key().as_ref()],
        bump
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct BlacklistChanged {
    pub beneficiary: Pubkey,
    pub blocked: bool,
}
