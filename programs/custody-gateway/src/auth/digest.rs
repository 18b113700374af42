use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use super::encoding::encode;
use crate::{constants::*, state::ActionDescriptor};

// The exact 32 bytes signers sign
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

// keccak256(DOMAIN_TAG || engine || encode(action))
//
// `engine` is the gateway account address. Leaving it out would let a signature
// set collected for one gateway authorize the same action on an identically
// configured second gateway.
pub fn action_hash(engine: &Pubkey, action: &ActionDescriptor) -> [u8; 32] {
    keccak::hashv(&[DOMAIN_TAG, engine.as_ref(), &encode(action)]).to_bytes()
}

// keccak256(SIGNED_DIGEST_PREFIX || action_hash)
pub fn digest(engine: &Pubkey, action: &ActionDescriptor) -> Digest {
    let inner = action_hash(engine, action);
    Digest(keccak::hashv(&[SIGNED_DIGEST_PREFIX, &inner]).to_bytes())
}
