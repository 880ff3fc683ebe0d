pub mod admit_direct;
pub mod admit_merkle;
pub mod admit_signed;
pub mod claim;
pub mod delist;
pub mod deposit_tokens;
pub mod emit_claim_quote;
pub mod halt;
pub mod initialize;
pub mod set_blacklist;
pub mod unhalt;

pub use admit_direct::*;
pub use admit_merkle::*;
pub use admit_signed::*;
pub use claim::*;
pub use delist::*;
pub use deposit_tokens::*;
pub use emit_claim_quote::*;
pub use halt::*;
pub use initialize::*;
pub use set_blacklist::*;
pub use unhalt::*;
