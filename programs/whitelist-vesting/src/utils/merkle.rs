//! Keccak-256 admission leaves and sorted-pairs Merkle proof verification.
//!
//! Sibling pairs are ordered bytewise before hashing, matching trees built
//! with the sorted-pairs convention, so proofs need no left/right flags.

use anchor_lang::prelude::Pubkey;
use solana_keccak_hasher as keccak;

/// Big-endian 256-bit word encoding of a u64.
pub fn be_word(v: u64) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[24..].copy_from_slice(&v.to_be_bytes());
    w
}

/// Leaf = keccak(beneficiary || amount || unlock_delay), all words big-endian.
pub fn admission_leaf(beneficiary: &Pubkey, amount: u64, unlock_delay_secs: u64) -> [u8; 32] {
    keccak::hashv(&[
        beneficiary.as_ref(),
        &be_word(amount),
        &be_word(unlock_delay_secs),
    ])
    .0
}

/// Walks the proof up to the root, hashing each sibling pair in sorted order.
pub fn verify_proof(leaf: [u8; 32], proof: &[[u8; 32]], root: &[u8; 32]) -> bool {
    let mut node = leaf;
    for sibling in proof {
        node = hash_pair(&node, sibling);
    }
    node == *root
}

fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[a, b]).0
    } else {
        keccak::hashv(&[b, a]).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn leaves() -> Vec<[u8; 32]> {
        (1u8..=4)
            .map(|i| admission_leaf(&Pubkey::new_from_array([i; 32]), i as u64 * 1_000, 600))
            .collect()
    }

    /// Builds a 4-leaf sorted-pairs tree and returns (root, per-leaf proofs).
    fn tree() -> ([u8; 32], Vec<Vec<[u8; 32]>>) {
        let l = leaves();
        let n01 = hash_pair(&l[0], &l[1]);
        let n23 = hash_pair(&l[2], &l[3]);
        let root = hash_pair(&n01, &n23);
        let proofs = vec![
            vec![l[1], n23],
            vec![l[0], n23],
            vec![l[3], n01],
            vec![l[2], n01],
        ];
        (root, proofs)
    }

    #[test]
    fn every_leaf_verifies_against_the_root() {
        let (root, proofs) = tree();
        for (leaf, proof) in leaves().iter().zip(proofs.iter()) {
            assert!(verify_proof(*leaf, proof, &root));
        }
    }

    #[test]
    fn wrong_leaf_or_proof_fails() {
        let (root, proofs) = tree();
        let foreign = admission_leaf(&Pubkey::new_from_array([9; 32]), 1_000, 600);
        assert!(!verify_proof(foreign, &proofs[0], &root));

        let l = leaves();
        assert!(!verify_proof(l[0], &proofs[1], &root));
        assert!(!verify_proof(l[0], &[], &root));
    }

    #[test]
    fn leaf_binds_amount_and_delay() {
        let w = Pubkey::new_from_array([7; 32]);
        let a = admission_leaf(&w, 1_000, 600);
        assert_ne!(a, admission_leaf(&w, 1_001, 600));
        assert_ne!(a, admission_leaf(&w, 1_000, 601));
    }

    #[test]
    fn be_word_layout() {
        let w = be_word(0x0102_0304);
        assert_eq!(&w[..28], &[0u8; 28]);
        assert_eq!(&w[28..], &[1, 2, 3, 4]);
    }
}
