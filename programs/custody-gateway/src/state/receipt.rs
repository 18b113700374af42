use anchor_lang::prelude::*;

// Result of a delivered transfer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransferReceipt {
    pub sequence: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    // Custody balance after the transfer
    pub remaining_balance: u64,
}

// Returned by `submit`, one variant per action class
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitReceipt {
    Transfer(TransferReceipt),
    SignersRotated {
        sequence: u64,
        signer_count: u8,
        threshold: u8,
    },
}
