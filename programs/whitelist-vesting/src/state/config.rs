use anchor_lang::prelude::*;

use crate::utils::accrual::ClaimPolicy;

/// The admission mechanism a deployed instance is locked to at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmissionGate {
    /// Admin writes entitlement records directly (batch, overwrite allowed).
    DirectAuthority,
    /// Beneficiaries prove membership against a fixed Merkle commitment root.
    MerkleMembership,
    /// Beneficiaries present an offline secp256k1 authorization signature.
    SignatureAuthority,
}

impl AdmissionGate {
    /// Direct-authority instances release the whole entitlement at once;
    /// the proof-based gates use linear accrual.
    pub fn claim_policy(&self) -> ClaimPolicy {
        match self {
            AdmissionGate::DirectAuthority => ClaimPolicy::LumpSum,
            AdmissionGate::MerkleMembership | AdmissionGate::SignatureAuthority => {
                ClaimPolicy::Linear
            }
        }
    }

    /// The direct-authority variant carries no blacklist.
    pub fn uses_blacklist(&self) -> bool {
        !matches!(self, AdmissionGate::DirectAuthority)
    }
}

/// Per-instance configuration PDA.
#[account]
pub struct VestingConfig {
    /// Token mint distributed by this instance.
    pub mint: Pubkey,
    /// Admin authority.
    pub admin: Pubkey,
    /// Admission gate selected at initialization (immutable).
    pub gate: AdmissionGate,
    /// Merkle commitment root (MerkleMembership gate only; zero otherwise).
    pub merkle_root: [u8; 32],
    /// Offline signer address, low 20 bytes of keccak(pubkey)
    /// (SignatureAuthority gate only; zero otherwise).
    pub claim_signer: [u8; 20],
    /// Emergency halt flag (blocks admissions and claims).
    pub halted: bool,
    /// Re-entrancy guard: set while a claim's outbound transfer is in flight.
    pub claim_in_progress: bool,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        1 +  // gate
        32 + // merkle_root
        20 + // claim_signer
        1 +  // halted
        1;   // claim_in_progress
}
