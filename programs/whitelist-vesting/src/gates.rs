//! Admission gates: the trust checks that decide whether an entitlement
//! record may be written. All three gates share the ledger write; they differ
//! only in the proof they validate first.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;
use crate::state::{Blacklist, VestingLedger};
use crate::utils::{merkle, signature};

/// Direct-authority batch admission. Caller authority is checked by the
/// instruction; here the parallel arrays are validated and written.
/// Overwriting an existing record is allowed (re-whitelisting resets it).
pub fn admit_direct(
    ledger: &mut VestingLedger,
    beneficiaries: &[Pubkey],
    amounts: &[u64],
    unlock_delays: &[u64],
    now: i64,
) -> Result<(), VestingError> {
    if beneficiaries.is_empty() {
        return Err(VestingError::EmptyInput);
    }
    if beneficiaries.len() != amounts.len() || beneficiaries.len() != unlock_delays.len() {
        return Err(VestingError::LengthMismatch);
    }
    // Validate the whole batch before the first write so a bad entry cannot
    // leave earlier entries applied.
    for (wallet, &amount) in beneficiaries.iter().zip(amounts) {
        if *wallet == Pubkey::default() {
            return Err(VestingError::ZeroAddress);
        }
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
    }
    for ((wallet, &amount), &delay) in beneficiaries.iter().zip(amounts).zip(unlock_delays) {
        ledger.write(wallet, amount, delay, now)?;
    }
    Ok(())
}

/// Merkle-membership admission: one-shot per beneficiary against the
/// commitment root fixed at initialization.
pub fn admit_merkle(
    ledger: &mut VestingLedger,
    blacklist: &Blacklist,
    root: &[u8; 32],
    beneficiary: &Pubkey,
    amount: u64,
    unlock_delay_secs: u64,
    proof: &[[u8; 32]],
    now: i64,
) -> Result<(), VestingError> {
    if *beneficiary == Pubkey::default() {
        return Err(VestingError::ZeroAddress);
    }
    if blacklist.contains(beneficiary) {
        return Err(VestingError::Blacklisted);
    }
    if ledger.find(beneficiary).map(|e| e.admitted != 0).unwrap_or(false) {
        return Err(VestingError::AlreadyAdmitted);
    }
    let leaf = merkle::admission_leaf(beneficiary, amount, unlock_delay_secs);
    if !merkle::verify_proof(leaf, proof, root) {
        return Err(VestingError::InvalidProof);
    }

    ledger.write(beneficiary, amount, unlock_delay_secs, now)?;
    let entry = ledger
        .find_mut(beneficiary)
        .ok_or(VestingError::BeneficiaryNotFound)?;
    entry.admitted = 1;
    Ok(())
}

/// Signature-authority admission: each `(beneficiary, nonce)` pair is usable
/// once, so a fresh nonce re-admits the same wallet with a new schedule.
#[allow(clippy::too_many_arguments)]
pub fn admit_signed(
    ledger: &mut VestingLedger,
    blacklist: &Blacklist,
    claim_signer: &[u8; 20],
    beneficiary: &Pubkey,
    amount: u64,
    unlock_delay_secs: u64,
    nonce: u64,
    recovery_id: u8,
    sig: &[u8; 64],
    now: i64,
) -> Result<(), VestingError> {
    if *beneficiary == Pubkey::default() {
        return Err(VestingError::ZeroAddress);
    }
    if blacklist.contains(beneficiary) {
        return Err(VestingError::Blacklisted);
    }
    if ledger.find(beneficiary).map(|e| e.nonce_used(nonce)).unwrap_or(false) {
        return Err(VestingError::NonceReused);
    }
    let digest = signature::admission_digest(beneficiary, amount, unlock_delay_secs, nonce);
    let recovered = signature::recover_signer(&digest, recovery_id, sig)?;
    if recovered != *claim_signer {
        return Err(VestingError::InvalidSignature);
    }

    ledger.write(beneficiary, amount, unlock_delay_secs, now)?;
    let entry = ledger
        .find_mut(beneficiary)
        .ok_or(VestingError::BeneficiaryNotFound)?;
    entry.consume_nonce(nonce)?;
    Ok(())
}
