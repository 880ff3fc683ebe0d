use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_BENEFICIARIES, MAX_NONCES_PER_BENEFICIARY};
use crate::error::VestingError;

/// A single beneficiary entitlement stored in the ledger PDA.
///
/// A record with `total_amount == 0` reads as absent/delisted. The slot itself
/// stays bound to the beneficiary so the consumed-nonce history survives a
/// delist or a full lump-sum payout.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct EntitlementRecord {
    pub beneficiary: Pubkey,
    /// Total grant in base units; 0 means absent.
    pub total_amount: u64,
    /// Cumulative payout; never exceeds `total_amount`.
    pub claimed_amount: u64,
    /// Absolute timestamp after which accrual begins releasing funds.
    pub unlock_time: i64,
    /// Anchor the next accrual period is measured from. Set to `unlock_time`
    /// at admission and not moved on claim; see DESIGN.md.
    pub accrual_anchor: i64,
    /// Merkle one-shot consumption flag.
    pub admitted: u8,
    /// Number of valid entries in `used_nonces`.
    pub nonce_count: u8,
    pub _padding: [u8; 6],
    /// Consumed authorization nonces (signature gate).
    pub used_nonces: [u64; MAX_NONCES_PER_BENEFICIARY],
}

impl EntitlementRecord {
    pub const SIZE: usize = core::mem::size_of::<EntitlementRecord>();

    pub fn is_present(&self) -> bool {
        self.total_amount > 0
    }

    /// Remaining entitlement (`total - claimed`).
    pub fn eligible_amount(&self) -> Result<u64, VestingError> {
        self.total_amount
            .checked_sub(self.claimed_amount)
            .ok_or(VestingError::MathOverflow)
    }

    /// `claimed += amount`, rejecting any payout past the total grant.
    pub fn record_claim(&mut self, amount: u64) -> Result<(), VestingError> {
        let claimed = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.total_amount {
            return Err(VestingError::MathOverflow);
        }
        self.claimed_amount = claimed;
        Ok(())
    }

    pub fn nonce_used(&self, nonce: u64) -> bool {
        self.used_nonces
            .iter()
            .take(self.nonce_count as usize)
            .any(|&n| n == nonce)
    }

    /// Marks a `(beneficiary, nonce)` pair consumed; each pair is usable once.
    pub fn consume_nonce(&mut self, nonce: u64) -> Result<(), VestingError> {
        if self.nonce_used(nonce) {
            return Err(VestingError::NonceReused);
        }
        let idx = self.nonce_count as usize;
        if idx >= MAX_NONCES_PER_BENEFICIARY {
            return Err(VestingError::NonceCapacity);
        }
        self.used_nonces[idx] = nonce;
        self.nonce_count = self
            .nonce_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Zeroes the entitlement; beneficiary binding and nonce history remain.
    pub fn clear_entitlement(&mut self) {
        self.total_amount = 0;
        self.claimed_amount = 0;
        self.unlock_time = 0;
        self.accrual_anchor = 0;
    }
}

/// PDA holding the full entitlement ledger (<= 64 slots), exclusively owned
/// and mutated by this program.
#[account]
#[repr(C)]
pub struct VestingLedger {
    pub entries: [EntitlementRecord; MAX_BENEFICIARIES],
}

impl VestingLedger {
    /// Space for discriminator + fixed entries array (no vec header).
    pub const fn space() -> usize {
        8 + core::mem::size_of::<VestingLedger>()
    }

    pub fn find(&self, wallet: &Pubkey) -> Option<&EntitlementRecord> {
        self.entries.iter().find(|e| e.beneficiary == *wallet)
    }

    pub fn find_mut(&mut self, wallet: &Pubkey) -> Option<&mut EntitlementRecord> {
        self.entries.iter_mut().find(|e| e.beneficiary == *wallet)
    }

    /// Returns the wallet's slot, allocating a free one on first contact.
    pub fn slot_mut(&mut self, wallet: &Pubkey) -> Result<&mut EntitlementRecord, VestingError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.beneficiary == *wallet)
            .or_else(|| {
                self.entries
                    .iter()
                    .position(|e| e.beneficiary == Pubkey::default())
            })
            .ok_or(VestingError::LedgerFull)?;
        let entry = &mut self.entries[idx];
        entry.beneficiary = *wallet;
        Ok(entry)
    }

    /// Creates/overwrites the wallet's entitlement: `unlock_time = now + delay`,
    /// accrual anchored at the unlock point, claimed reset to zero.
    pub fn write(
        &mut self,
        wallet: &Pubkey,
        total_amount: u64,
        unlock_delay_secs: u64,
        now: i64,
    ) -> Result<(), VestingError> {
        let delay = i64::try_from(unlock_delay_secs).map_err(|_| VestingError::MathOverflow)?;
        let unlock_time = now.checked_add(delay).ok_or(VestingError::MathOverflow)?;

        let entry = self.slot_mut(wallet)?;
        entry.total_amount = total_amount;
        entry.claimed_amount = 0;
        entry.unlock_time = unlock_time;
        entry.accrual_anchor = unlock_time;
        Ok(())
    }

    /// Read surface: absent wallets resolve to the zero record.
    pub fn read(&self, wallet: &Pubkey) -> EntitlementRecord {
        match self.find(wallet) {
            Some(e) if e.is_present() => *e,
            _ => EntitlementRecord::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> VestingLedger {
        VestingLedger {
            entries: [EntitlementRecord::default(); MAX_BENEFICIARIES],
        }
    }

    fn wallet(tag: u8) -> Pubkey {
        Pubkey::new_from_array([tag; 32])
    }

    #[test]
    fn write_then_read_round_trip() {
        let mut l = ledger();
        let w = wallet(1);
        l.write(&w, 5_000, 600, 1_000).unwrap();

        let r = l.read(&w);
        assert_eq!(r.total_amount, 5_000);
        assert_eq!(r.unlock_time, 1_600);
        assert_eq!(r.accrual_anchor, 1_600);
        assert_eq!(r.claimed_amount, 0);
    }

    #[test]
    fn overwrite_resets_claimed() {
        let mut l = ledger();
        let w = wallet(2);
        l.write(&w, 5_000, 600, 1_000).unwrap();
        l.find_mut(&w).unwrap().record_claim(1_200).unwrap();

        l.write(&w, 7_000, 60, 2_000).unwrap();
        let r = l.read(&w);
        assert_eq!(r.total_amount, 7_000);
        assert_eq!(r.claimed_amount, 0);
        assert_eq!(r.unlock_time, 2_060);
    }

    #[test]
    fn delist_then_read_returns_zero_record() {
        let mut l = ledger();
        let w = wallet(3);
        l.write(&w, 5_000, 600, 1_000).unwrap();
        l.find_mut(&w).unwrap().clear_entitlement();

        assert_eq!(l.read(&w), EntitlementRecord::default());
    }

    #[test]
    fn record_claim_rejects_overdraw() {
        let mut l = ledger();
        let w = wallet(4);
        l.write(&w, 100, 0, 0).unwrap();
        let e = l.find_mut(&w).unwrap();
        e.record_claim(60).unwrap();
        assert!(matches!(e.record_claim(41), Err(VestingError::MathOverflow)));
        e.record_claim(40).unwrap();
        assert_eq!(e.claimed_amount, 100);
    }

    #[test]
    fn nonce_set_is_one_shot_per_pair() {
        let mut e = EntitlementRecord::default();
        e.consume_nonce(7).unwrap();
        assert!(matches!(e.consume_nonce(7), Err(VestingError::NonceReused)));
        e.consume_nonce(8).unwrap();
        assert_eq!(e.nonce_count, 2);
    }

    #[test]
    fn nonce_set_capacity() {
        let mut e = EntitlementRecord::default();
        for n in 0..MAX_NONCES_PER_BENEFICIARY as u64 {
            e.consume_nonce(n).unwrap();
        }
        assert!(matches!(
            e.consume_nonce(999),
            Err(VestingError::NonceCapacity)
        ));
    }

    #[test]
    fn ledger_full() {
        let mut l = ledger();
        for i in 0..MAX_BENEFICIARIES {
            l.write(&wallet(i as u8 + 1), 1, 0, 0).unwrap();
        }
        assert!(matches!(
            l.write(&wallet(200), 1, 0, 0),
            Err(VestingError::LedgerFull)
        ));
        // Existing wallets can still be overwritten.
        l.write(&wallet(1), 2, 0, 0).unwrap();
    }
}
