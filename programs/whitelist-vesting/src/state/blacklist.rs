use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_BLACKLIST;
use crate::error::VestingError;

/// PDA holding the blocked-beneficiary set (Merkle and Signature gates).
/// Membership blocks both admission and claiming, independent of ledger state.
#[account]
#[repr(C)]
pub struct Blacklist {
    pub count: u8,
    pub entries: [Pubkey; MAX_BLACKLIST],
}

impl Blacklist {
    pub const fn space() -> usize {
        8 + 1 + 32 * MAX_BLACKLIST
    }

    pub fn contains(&self, wallet: &Pubkey) -> bool {
        self.entries
            .iter()
            .take(self.count as usize)
            .any(|w| w == wallet)
    }

    /// Idempotent insert.
    pub fn insert(&mut self, wallet: &Pubkey) -> Result<(), VestingError> {
        if self.contains(wallet) {
            return Ok(());
        }
        let idx = self.count as usize;
        if idx >= MAX_BLACKLIST {
            return Err(VestingError::BlacklistFull);
        }
        self.entries[idx] = *wallet;
        self.count = self
            .count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Idempotent remove; last entry is swapped into the vacated slot.
    pub fn remove(&mut self, wallet: &Pubkey) {
        let len = self.count as usize;
        if let Some(idx) = self
            .entries
            .iter()
            .take(len)
            .position(|w| w == wallet)
        {
            self.entries[idx] = self.entries[len - 1];
            self.entries[len - 1] = Pubkey::default();
            self.count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> Blacklist {
        Blacklist {
            count: 0,
            entries: [Pubkey::default(); MAX_BLACKLIST],
        }
    }

    #[test]
    fn insert_contains_remove() {
        let mut b = set();
        let w = Pubkey::new_from_array([9; 32]);
        assert!(!b.contains(&w));
        b.insert(&w).unwrap();
        b.insert(&w).unwrap(); // idempotent
        assert!(b.contains(&w));
        assert_eq!(b.count, 1);
        b.remove(&w);
        assert!(!b.contains(&w));
        assert_eq!(b.count, 0);
    }

    #[test]
    fn remove_swaps_last_entry() {
        let mut b = set();
        let a = Pubkey::new_from_array([1; 32]);
        let c = Pubkey::new_from_array([2; 32]);
        let d = Pubkey::new_from_array([3; 32]);
        b.insert(&a).unwrap();
        b.insert(&c).unwrap();
        b.insert(&d).unwrap();
        b.remove(&a);
        assert_eq!(b.count, 2);
        assert!(b.contains(&c) && b.contains(&d) && !b.contains(&a));
    }

    #[test]
    fn full_set_rejects_new_entries() {
        let mut b = set();
        for i in 0..MAX_BLACKLIST {
            b.insert(&Pubkey::new_from_array([i as u8 + 1; 32])).unwrap();
        }
        let extra = Pubkey::new_from_array([200; 32]);
        assert!(matches!(b.insert(&extra), Err(VestingError::BlacklistFull)));
    }
}
