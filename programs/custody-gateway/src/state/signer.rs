use std::fmt;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::SIGNER_ID_LEN;

// Signer identity
//
// 20-byte address derived from an uncompressed secp256k1 public key:
//   keccak256(x || y)[12..32]
//
// Ordering is byte-wise, which is what canonical quorum evaluation sorts by.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
    InitSpace,
)]
pub struct SignerId {
    pub address: [u8; SIGNER_ID_LEN],
}

impl SignerId {
    pub const ZERO: SignerId = SignerId {
        address: [0u8; SIGNER_ID_LEN],
    };

    // Derive the address from the 64-byte (x || y) public key returned by recovery
    pub fn from_public_key(public_key: &[u8; 64]) -> Self {
        let hash = keccak::hash(public_key).to_bytes();
        let mut address = [0u8; SIGNER_ID_LEN];
        address.copy_from_slice(&hash[32 - SIGNER_ID_LEN..]);
        Self { address }
    }

    pub fn is_zero(&self) -> bool {
        self.address == [0u8; SIGNER_ID_LEN]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.address
    }
}

impl fmt::Display for SignerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.address {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SignerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerId({})", self)
    }
}
