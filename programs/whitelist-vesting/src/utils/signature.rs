//! Offline-signer authorization: keccak admission digests, signed-message
//! prefixing and secp256k1 recovery to a 20-byte signer address.

use anchor_lang::prelude::Pubkey;
use solana_keccak_hasher as keccak;
use solana_secp256k1_recover::secp256k1_recover;

use crate::error::VestingError;
use crate::utils::merkle::be_word;

/// Prefix applied to the digest before recovery ("personal sign" convention).
pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// secp256k1 group order halved; signatures with `s` above this are malleable
/// duplicates and rejected.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Digest = keccak(beneficiary || amount || unlock_delay || nonce),
/// all non-address fields as big-endian 256-bit words.
pub fn admission_digest(
    beneficiary: &Pubkey,
    amount: u64,
    unlock_delay_secs: u64,
    nonce: u64,
) -> [u8; 32] {
    keccak::hashv(&[
        beneficiary.as_ref(),
        &be_word(amount),
        &be_word(unlock_delay_secs),
        &be_word(nonce),
    ])
    .0
}

/// keccak(prefix || digest): what the offline signer actually signs.
pub fn prefixed_digest(digest: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[SIGNED_MESSAGE_PREFIX, digest]).0
}

/// Low 20 bytes of keccak(uncompressed public key).
pub fn signer_address(pubkey_bytes: &[u8; 64]) -> [u8; 20] {
    let hash = keccak::hash(pubkey_bytes).0;
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..]);
    addr
}

/// Recovers the signer address of an admission authorization. Malleable `s`
/// values, invalid recovery ids and unrecoverable signatures all surface as
/// `InvalidSignature`.
pub fn recover_signer(
    digest: &[u8; 32],
    recovery_id: u8,
    signature: &[u8; 64],
) -> Result<[u8; 20], VestingError> {
    if recovery_id > 1 {
        return Err(VestingError::InvalidSignature);
    }
    let s: &[u8] = &signature[32..];
    if s > &SECP256K1_HALF_ORDER[..] {
        return Err(VestingError::InvalidSignature);
    }
    let message = prefixed_digest(digest);
    let pubkey = secp256k1_recover(&message, recovery_id, signature)
        .map_err(|_| VestingError::InvalidSignature)?;
    Ok(signer_address(&pubkey.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypair(seed: u8) -> (libsecp256k1::SecretKey, [u8; 20]) {
        let sk = libsecp256k1::SecretKey::parse(&[seed; 32]).unwrap();
        let pk = libsecp256k1::PublicKey::from_secret_key(&sk);
        // Serialized form is 65 bytes with an 0x04 tag; the address hashes
        // the raw 64-byte key.
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&pk.serialize()[1..]);
        (sk, signer_address(&raw))
    }

    fn sign(digest: &[u8; 32], sk: &libsecp256k1::SecretKey) -> ([u8; 64], u8) {
        let msg = libsecp256k1::Message::parse(&prefixed_digest(digest));
        let (sig, rid) = libsecp256k1::sign(&msg, sk);
        (sig.serialize(), rid.serialize())
    }

    #[test]
    fn recovers_the_signing_address() {
        let (sk, addr) = keypair(42);
        let w = Pubkey::new_from_array([5; 32]);
        let digest = admission_digest(&w, 1_000, 600, 1);
        let (sig, rid) = sign(&digest, &sk);
        assert_eq!(recover_signer(&digest, rid, &sig).unwrap(), addr);
    }

    #[test]
    fn tampered_digest_recovers_a_different_address() {
        let (sk, addr) = keypair(42);
        let w = Pubkey::new_from_array([5; 32]);
        let digest = admission_digest(&w, 1_000, 600, 1);
        let (sig, rid) = sign(&digest, &sk);

        let forged = admission_digest(&w, 2_000, 600, 1);
        let recovered = recover_signer(&forged, rid, &sig);
        assert!(recovered.map(|a| a != addr).unwrap_or(true));
    }

    #[test]
    fn digest_binds_the_nonce() {
        let w = Pubkey::new_from_array([5; 32]);
        assert_ne!(
            admission_digest(&w, 1_000, 600, 1),
            admission_digest(&w, 1_000, 600, 2)
        );
    }

    #[test]
    fn rejects_high_s_and_bad_recovery_id() {
        let (sk, _) = keypair(7);
        let w = Pubkey::new_from_array([5; 32]);
        let digest = admission_digest(&w, 1_000, 600, 1);
        let (sig, rid) = sign(&digest, &sk);

        assert!(matches!(
            recover_signer(&digest, 4, &sig),
            Err(VestingError::InvalidSignature)
        ));

        let mut high_s = sig;
        for b in high_s[32..].iter_mut() {
            *b = 0xff;
        }
        assert!(matches!(
            recover_signer(&digest, rid, &high_s),
            Err(VestingError::InvalidSignature)
        ));
    }
}
