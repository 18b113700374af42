pub mod action;
pub mod gateway;
pub mod ledger;
pub mod receipt;
pub mod signer;

pub use action::*;
pub use gateway::*;
pub use ledger::*;
pub use receipt::*;
pub use signer::*;
