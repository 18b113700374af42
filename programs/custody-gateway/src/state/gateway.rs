use anchor_lang::prelude::*;

use super::{action::*, ledger::*, receipt::*, signer::SignerId};
use crate::{
    auth::{self, DetachedSignature, QuorumPolicy},
    constants::*,
    custody::{self, Delivery},
    errors::*,
};

// Gateway account
//
// Owns every piece of mutable engine state: signer set, sequence ledger,
// custody ledger and the reentrancy guard. Its address is the engine identity
// that every digest is bound to.
#[account]
#[derive(InitSpace)]
pub struct Gateway {
    // Unique identifier for this gateway (PDA seed)
    pub gateway_id: u64,

    // Account that created the gateway, no special rights after creation
    pub creator: Pubkey,

    // Fixed at creation, rotations keep it
    pub policy: QuorumPolicy,

    // Number of distinct signers required
    // Must be: 1 <= threshold <= signer_count
    pub threshold: u8,

    // Current number of registered signers
    pub signer_count: u8,

    // Registered signers, only the first `signer_count` entries are live
    // Fixed-size array avoids realloc on rotation
    pub signers: [SignerId; MAX_SIGNERS],

    pub sequences: SequenceLedger,

    pub custody: CustodyLedger,

    // Engaged for the whole duration of `submit`
    pub locked: bool,

    // Vault PDA address, holds the custodied lamports
    pub vault: Pubkey,

    pub bump: u8,

    pub vault_bump: u8,
}

impl Gateway {
    // A gateway with no signers yet, follow with `install_signers`
    pub fn new(
        gateway_id: u64,
        creator: Pubkey,
        vault: Pubkey,
        policy: QuorumPolicy,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            gateway_id,
            creator,
            policy,
            threshold: 0,
            signer_count: 0,
            signers: [SignerId::default(); MAX_SIGNERS],
            sequences: SequenceLedger::default(),
            custody: CustodyLedger::default(),
            locked: false,
            vault,
            bump,
            vault_bump,
        }
    }

    // Live signers, in registration order
    pub fn signer_set(&self) -> &[SignerId] {
        &self.signers[..self.signer_count as usize]
    }

    pub fn next_sequence(&self, class: ClassTag) -> u64 {
        self.sequences.next_sequence(class)
    }

    pub fn balance(&self) -> u64 {
        self.custody.balance
    }

    // Check a candidate signer set against this gateway's policy
    pub fn validate_signer_set(
        policy: QuorumPolicy,
        signers: &[SignerId],
        threshold: u8,
    ) -> Result<()> {
        require!(!signers.is_empty(), GatewayError::EmptySignerSet);
        require!(signers.len() <= MAX_SIGNERS, GatewayError::TooManySigners);
        require!(threshold >= 1, GatewayError::InvalidThreshold);
        require!(
            threshold as usize <= signers.len(),
            GatewayError::ThresholdExceedsSigners
        );

        if policy == QuorumPolicy::Positional {
            require!(
                threshold as usize == signers.len(),
                GatewayError::PositionalRequiresAllSigners
            );
        }

        for (index, signer) in signers.iter().enumerate() {
            require!(!signer.is_zero(), GatewayError::InvalidSigner);
            require!(
                !signers[..index].contains(signer),
                GatewayError::DuplicateSigner
            );
        }

        Ok(())
    }

    // Replace the signer set
    // Called at creation and by an authorized RotateSigners action, nowhere else
    pub fn install_signers(&mut self, signers: &[SignerId], threshold: u8) -> Result<()> {
        Self::validate_signer_set(self.policy, signers, threshold)?;

        let mut slots = [SignerId::default(); MAX_SIGNERS];
        slots[..signers.len()].copy_from_slice(signers);

        self.signers = slots;
        self.signer_count = signers.len() as u8;
        self.threshold = threshold;
        Ok(())
    }

    // Credit the custody ledger, no authorization required
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        require!(!self.locked, GatewayError::ReentrantCall);
        require!(amount > 0, GatewayError::ZeroDepositAmount);

        self.custody.credit(amount)?;
        Ok(self.custody.balance)
    }

    // Authorize and execute one action
    //
    // Either the whole submission applies or none of it does: on any error the
    // gateway is restored to its state at entry. That includes the sequence
    // advance, so a refused delivery leaves the sequence available for a
    // fresh authorization.
    pub fn submit<D: Delivery + ?Sized>(
        &mut self,
        engine: &Pubkey,
        action: &ActionDescriptor,
        signatures: &[DetachedSignature],
        delivery: &mut D,
    ) -> Result<SubmitReceipt> {
        require!(!self.locked, GatewayError::ReentrantCall);

        let snapshot = self.clone();
        self.locked = true;

        match self.process(engine, action, signatures, delivery) {
            Ok(receipt) => {
                self.locked = false;
                Ok(receipt)
            }
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }

    fn process<D: Delivery + ?Sized>(
        &mut self,
        engine: &Pubkey,
        action: &ActionDescriptor,
        signatures: &[DetachedSignature],
        delivery: &mut D,
    ) -> Result<SubmitReceipt> {
        // 1. Reject malformed actions before any signature work
        self.validate_action(engine, action)?;

        // 2. Consumed sequences are replays, whoever signs them now
        // Read-only: the counter only moves in step 5
        require!(
            action.sequence >= self.next_sequence(action.class_tag()),
            GatewayError::StaleOrFutureSequence
        );

        // 3. Digest bound to this gateway
        let digest = auth::digest(engine, action);

        // 4. Quorum
        require!(
            auth::quorum::verify(
                self.policy,
                self.signer_set(),
                self.threshold,
                &digest,
                signatures,
            ),
            GatewayError::QuorumNotMet
        );

        // 5. Consume the sequence before anything leaves the vault
        self.sequences
            .check_and_advance(action.class_tag(), action.sequence)?;

        // 6. Execute
        match &action.body {
            ActionBody::Transfer { recipient, amount } => {
                let receipt = custody::execute_transfer(
                    &mut self.custody,
                    delivery,
                    action.sequence,
                    recipient,
                    *amount,
                )?;
                Ok(SubmitReceipt::Transfer(receipt))
            }
            ActionBody::RotateSigners { signers, threshold } => {
                self.install_signers(signers, *threshold)?;
                Ok(SubmitReceipt::SignersRotated {
                    sequence: action.sequence,
                    signer_count: self.signer_count,
                    threshold: self.threshold,
                })
            }
        }
    }

    fn validate_action(&self, engine: &Pubkey, action: &ActionDescriptor) -> Result<()> {
        match &action.body {
            ActionBody::Transfer { recipient, amount } => {
                require!(*amount > 0, GatewayError::ZeroTransferAmount);
                require_keys_neq!(*recipient, *engine, GatewayError::InvalidRecipient);
                require_keys_neq!(*recipient, self.vault, GatewayError::InvalidRecipient);
            }
            ActionBody::RotateSigners { signers, threshold } => {
                Self::validate_signer_set(self.policy, signers, *threshold)?;
            }
        }
        Ok(())
    }
}
