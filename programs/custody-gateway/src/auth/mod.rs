// Authorization pipeline
//
// encode -> digest -> recover -> quorum
// Nothing in here touches gateway state.

pub mod digest;
pub mod encoding;
pub mod quorum;
pub mod recover;

pub use digest::{digest, Digest};
pub use encoding::encode;
pub use quorum::QuorumPolicy;
pub use recover::{recover, recover_signer, DetachedSignature, RecoveryError};
