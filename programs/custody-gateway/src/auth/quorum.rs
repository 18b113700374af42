use anchor_lang::prelude::*;

use super::{
    digest::Digest,
    recover::{recover, recover_signer, DetachedSignature},
};
use crate::state::SignerId;

// How submitted signatures are matched against the signer set
//
// CanonicalDistinct: at least `threshold` distinct registered signers, in any order.
//   Recovered identities are sorted before comparison, so reordering valid
//   signatures never changes the outcome.
//
// Positional: signature i must recover to signer i, for every signer.
//   Kept for compatibility with position-bound signers; a valid but
//   reordered signature list fails.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum QuorumPolicy {
    CanonicalDistinct,
    Positional,
}

impl Default for QuorumPolicy {
    fn default() -> Self {
        QuorumPolicy::CanonicalDistinct
    }
}

// Fails closed: any recovery error, unknown signer, duplicate or length
// mismatch rejects the whole set
pub fn verify(
    policy: QuorumPolicy,
    signers: &[SignerId],
    threshold: u8,
    digest: &Digest,
    signatures: &[DetachedSignature],
) -> bool {
    match policy {
        QuorumPolicy::CanonicalDistinct => {
            verify_canonical(signers, threshold, digest, signatures)
        }
        QuorumPolicy::Positional => verify_positional(signers, digest, signatures),
    }
}

pub fn verify_positional(
    owners: &[SignerId],
    digest: &Digest,
    signatures: &[DetachedSignature],
) -> bool {
    if owners.is_empty() || owners.len() != signatures.len() {
        return false;
    }

    owners
        .iter()
        .zip(signatures)
        .all(|(owner, signature)| matches!(recover(digest, signature), Ok(id) if id == *owner))
}

pub fn verify_canonical(
    registered: &[SignerId],
    threshold: u8,
    digest: &Digest,
    signatures: &[DetachedSignature],
) -> bool {
    let threshold = threshold as usize;

    // More signatures than signers can only mean duplicates or strangers
    if threshold == 0 || signatures.len() < threshold || signatures.len() > registered.len() {
        return false;
    }

    let mut recovered = Vec::with_capacity(signatures.len());
    for signature in signatures {
        match recover_signer(digest, signature) {
            Ok(id) => recovered.push(id),
            Err(_) => return false,
        }
    }

    recovered.sort_unstable();

    let distinct = recovered.windows(2).all(|pair| pair[0] < pair[1]);
    distinct && recovered.iter().all(|id| registered.contains(id))
}
