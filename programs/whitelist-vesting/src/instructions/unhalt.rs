use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::instructions::halt::HaltToggled;
use crate::state::VestingConfig;

pub fn unhalt(ctx: Context<Unhalt>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, VestingError::Unauthorized);
    require!(cfg.halted, VestingError::NotHalted);
    cfg.halted = false;
    emit!(HaltToggled {
        admin: cfg.admin,
        halted: false,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Unhalt<'info> {
    #[account(mut, seeds = [b"config"], bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}
