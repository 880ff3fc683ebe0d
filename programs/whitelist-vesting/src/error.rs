use anchor_lang::prelude::*;

/// Custom error codes for the whitelist vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Operations are halted")]
    Halted,

    #[msg("Operations are already halted")]
    AlreadyHalted,

    #[msg("Operations are not halted")]
    NotHalted,

    #[msg("Beneficiary is blacklisted")]
    Blacklisted,

    #[msg("Zero address is not a valid beneficiary")]
    ZeroAddress,

    #[msg("Empty input batch")]
    EmptyInput,

    #[msg("Input array lengths do not match")]
    LengthMismatch,

    #[msg("Amount must be > 0")]
    InvalidAmount,

    #[msg("Beneficiary already admitted")]
    AlreadyAdmitted,

    #[msg("Nonce already consumed for this beneficiary")]
    NonceReused,

    #[msg("Nonce history full for this beneficiary")]
    NonceCapacity,

    #[msg("Merkle proof does not match the commitment root")]
    InvalidProof,

    #[msg("Signature does not recover to the configured signer")]
    InvalidSignature,

    #[msg("Lock period still active")]
    LockActive,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Cannot delist after unlock")]
    CannotDelistAfterUnlock,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Ledger is full")]
    LedgerFull,

    #[msg("Blacklist is full")]
    BlacklistFull,

    #[msg("Operation not available for the configured admission gate")]
    GateMismatch,

    #[msg("Re-entrant call rejected")]
    ReentrantCall,

    #[msg("Beneficiary has no entitlement record")]
    BeneficiaryNotFound,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidBeneficiaryAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,
}
