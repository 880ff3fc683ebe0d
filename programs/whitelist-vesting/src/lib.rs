//! Token vesting with conditional whitelisting.
//!
//! One deployed instance distributes a single SPL mint to beneficiaries,
//! each gated by a lock period and a release schedule. Beneficiaries are
//! admitted through the gate the instance was initialized with: direct admin
//! writes, Merkle-proof membership, or offline secp256k1 authorization.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod gates;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::AdmissionGate;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod whitelist_vesting {
    use super::*;

    /// Creates the config, ledger, blacklist and vault PDAs and locks the
    /// instance to one admission gate.
    pub fn initialize(
        ctx: Context<Initialize>,
        gate: AdmissionGate,
        merkle_root: [u8; 32],
        claim_signer: [u8; 20],
    ) -> Result<()> {
        instructions::initialize(ctx, gate, merkle_root, claim_signer)
    }

    /// Admin batch admission (DirectAuthority instances).
    pub fn admit_direct(
        ctx: Context<AdmitDirect>,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<u64>,
        unlock_delays: Vec<u64>,
    ) -> Result<()> {
        instructions::admit_direct(ctx, beneficiaries, amounts, unlock_delays)
    }

    /// Merkle-proof admission (MerkleMembership instances).
    pub fn admit_merkle(
        ctx: Context<AdmitMerkle>,
        beneficiary: Pubkey,
        amount: u64,
        unlock_delay: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::admit_merkle(ctx, beneficiary, amount, unlock_delay, proof)
    }

    /// Offline-signature admission (SignatureAuthority instances).
    pub fn admit_signed(
        ctx: Context<AdmitSigned>,
        beneficiary: Pubkey,
        amount: u64,
        unlock_delay: u64,
        nonce: u64,
        recovery_id: u8,
        signature: [u8; 64],
    ) -> Result<()> {
        instructions::admit_signed(
            ctx,
            beneficiary,
            amount,
            unlock_delay,
            nonce,
            recovery_id,
            signature,
        )
    }

    /// Beneficiary payout under the instance's claim policy.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Admin pre-unlock removal (DirectAuthority instances).
    pub fn delist(ctx: Context<Delist>, wallet: Pubkey) -> Result<()> {
        instructions::delist(ctx, wallet)
    }

    /// Admin blacklist toggle (Merkle/Signature instances).
    pub fn set_blacklist(ctx: Context<SetBlacklist>, wallet: Pubkey, blocked: bool) -> Result<()> {
        instructions::set_blacklist(ctx, wallet, blocked)
    }

    pub fn halt(ctx: Context<Halt>) -> Result<()> {
        instructions::halt(ctx)
    }

    pub fn unhalt(ctx: Context<Unhalt>) -> Result<()> {
        instructions::unhalt(ctx)
    }

    /// Admin funding of the payout vault.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Emits an entitlement/reward quote for a wallet.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claim_quote(ctx, wallet)
    }
}
