use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn halt(ctx: Context<Halt>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::Unauthorized);
    require!(!cfg.halted, VestingError::AlreadyHalted);
    cfg.halted = true;
    emit!(HaltToggled {
        admin: cfg.admin,
        halted: true,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Halt<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct HaltToggled {
    pub admin: Pubkey,
    pub halted: bool,
}
