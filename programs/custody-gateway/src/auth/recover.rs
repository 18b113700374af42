use anchor_lang::prelude::*;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use super::digest::Digest;
use crate::{constants::*, errors::*, state::SignerId};

// Detached secp256k1 signature: r (32) || s (32) || v (1)
// v is the recovery parameter, accepted as 0/1 or 27/28
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct DetachedSignature {
    pub bytes: [u8; SIGNATURE_LEN],
}

impl DetachedSignature {
    pub fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self { bytes }
    }

    pub fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.bytes[..32]);
        r
    }

    pub fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.bytes[32..64]);
        s
    }

    pub fn v(&self) -> u8 {
        self.bytes[64]
    }
}

// Why a signature could not be turned into a signer identity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RecoveryError {
    // v is not one of 0, 1, 27, 28
    InvalidRecoveryId,
    // r or s is zero or not below the curve order
    ScalarOutOfRange,
    // s is in the upper half of the order (malleable encoding)
    HighS,
    // The runtime could not recover a public key
    RecoveryFailed,
}

impl From<RecoveryError> for anchor_lang::error::Error {
    fn from(_: RecoveryError) -> Self {
        GatewayError::MalformedSignature.into()
    }
}

// Recover the signer of `digest`
//
// A successful recovery says nothing about authorization: the identity still
// has to be matched against the signer set by the quorum verifier.
pub fn recover(
    digest: &Digest,
    signature: &DetachedSignature,
) -> std::result::Result<SignerId, RecoveryError> {
    let recovery_id = match signature.v() {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(RecoveryError::InvalidRecoveryId),
    };

    let r = signature.r();
    let s = signature.s();
    if !is_valid_scalar(&r) || !is_valid_scalar(&s) {
        return Err(RecoveryError::ScalarOutOfRange);
    }

    // Only the low-s form is accepted, so each authorization has one encoding
    if s > SECP256K1_HALF_ORDER {
        return Err(RecoveryError::HighS);
    }

    let public_key = secp256k1_recover(digest.as_bytes(), recovery_id, &signature.bytes[..64])
        .map_err(|_| RecoveryError::RecoveryFailed)?;

    Ok(SignerId::from_public_key(&public_key.to_bytes()))
}

// Same as `recover`, surfaced as a program error
pub fn recover_signer(digest: &Digest, signature: &DetachedSignature) -> Result<SignerId> {
    recover(digest, signature).map_err(|err| {
        msg!("Signature recovery failed: {:?}", err);
        err.into()
    })
}

// Big-endian comparison, 0 < x < n
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    scalar != &[0u8; 32] && scalar < &SECP256K1_ORDER
}
