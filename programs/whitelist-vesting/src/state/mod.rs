pub mod blacklist;
pub mod config;
pub mod ledger;

pub use blacklist::*;
pub use config::*;
pub use ledger::*;
