use anchor_lang::prelude::*;

use super::action::ClassTag;
use crate::errors::*;

// Sequence ledger
//
// One strictly monotonic counter per action class.
// Only `check_and_advance` moves a counter and it only ever moves forward by one,
// so an already consumed sequence can never be accepted again.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug, InitSpace)]
pub struct SequenceLedger {
    // Next sequence accepted for Transfer actions
    pub next_transfer: u64,

    // Next sequence accepted for RotateSigners actions
    pub next_rotation: u64,
}

impl SequenceLedger {
    pub fn next_sequence(&self, class: ClassTag) -> u64 {
        match class {
            ClassTag::Transfer => self.next_transfer,
            ClassTag::RotateSigners => self.next_rotation,
        }
    }

    // Accept `expected` only if it is exactly the next sequence, then consume it
    pub fn check_and_advance(&mut self, class: ClassTag, expected: u64) -> Result<()> {
        let next = match class {
            ClassTag::Transfer => &mut self.next_transfer,
            ClassTag::RotateSigners => &mut self.next_rotation,
        };

        require!(expected == *next, GatewayError::StaleOrFutureSequence);

        *next = next.checked_add(1).ok_or(GatewayError::Overflow)?;
        Ok(())
    }
}

// Custody ledger
//
// Source of truth for custodied value. Lamports that reach the vault
// without going through `deposit` are never counted here.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug, InitSpace)]
pub struct CustodyLedger {
    pub balance: u64,
}

impl CustodyLedger {
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(GatewayError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, GatewayError::InsufficientBalance);

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(GatewayError::Underflow)?;
        Ok(())
    }
}
