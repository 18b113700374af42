use anchor_lang::prelude::*;

use super::signer::SignerId;

// Action class
// Each class owns an independent sequence counter
//
// Transfer: move custodied lamports to a recipient
// RotateSigners: reserved governance class, replaces the signer set
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClassTag {
    Transfer,
    RotateSigners,
}

impl ClassTag {
    // Tag byte written at the head of the canonical encoding
    pub fn as_byte(self) -> u8 {
        match self {
            ClassTag::Transfer => 0,
            ClassTag::RotateSigners => 1,
        }
    }
}

// What the action does once authorized
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum ActionBody {
    // Send `amount` lamports from the vault to `recipient`
    Transfer { recipient: Pubkey, amount: u64 },

    // Replace the signer set and threshold
    // Authorized by the current signer set, never by the incoming one
    RotateSigners { signers: Vec<SignerId>, threshold: u8 },
}

// Action descriptor
//
// Built by the caller, signed off-chain by the signer set, submitted by any relayer.
// Never persisted: it only lives for the duration of one submission.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct ActionDescriptor {
    // Must equal the gateway's next sequence for this action class
    pub sequence: u64,

    pub body: ActionBody,
}

impl ActionDescriptor {
    pub fn transfer(recipient: Pubkey, amount: u64, sequence: u64) -> Self {
        Self {
            sequence,
            body: ActionBody::Transfer { recipient, amount },
        }
    }

    pub fn rotate_signers(signers: Vec<SignerId>, threshold: u8, sequence: u64) -> Self {
        Self {
            sequence,
            body: ActionBody::RotateSigners { signers, threshold },
        }
    }

    pub fn class_tag(&self) -> ClassTag {
        match self.body {
            ActionBody::Transfer { .. } => ClassTag::Transfer,
            ActionBody::RotateSigners { .. } => ClassTag::RotateSigners,
        }
    }
}
