// Custody Executor
//
// Moves custodied value out of the vault with checks-effects-interactions:
// 1. Check the ledger covers the amount
// 2. Debit the ledger
// 3. Deliver to the recipient
//
// If delivery fails the debit is undone before the error is returned,
// so the ledger never shows value that left without arriving.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, state::*};

// Where value goes once the ledger has been debited
//
// The on-chain implementation is `VaultDelivery`. Off-chain drivers and tests
// supply their own.
pub trait Delivery {
    fn deliver(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

pub fn execute_transfer<D: Delivery + ?Sized>(
    custody: &mut CustodyLedger,
    delivery: &mut D,
    sequence: u64,
    recipient: &Pubkey,
    amount: u64,
) -> Result<TransferReceipt> {
    // Checks + effects
    custody.debit(amount)?;

    // Interaction
    if let Err(err) = delivery.deliver(recipient, amount) {
        msg!("Delivery to {} refused: {}", recipient, err);
        custody.credit(amount)?;
        return err!(GatewayError::DeliveryRefused);
    }

    Ok(TransferReceipt {
        sequence,
        recipient: *recipient,
        amount,
        remaining_balance: custody.balance,
    })
}

// Delivers lamports from the vault PDA through the system program
//
// Refuses up front (without a CPI) when the recipient cannot hold the value:
// - not writable
// - executable
// - would be left below the rent-exempt minimum
pub struct VaultDelivery<'info> {
    pub gateway: Pubkey,
    pub vault: AccountInfo<'info>,
    pub vault_bump: u8,
    pub recipient: Option<AccountInfo<'info>>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> Delivery for VaultDelivery<'info> {
    fn deliver(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        let account = self
            .recipient
            .as_ref()
            .ok_or(GatewayError::MissingRecipient)?;

        require_keys_eq!(account.key(), *recipient, GatewayError::RecipientMismatch);
        require!(account.is_writable, GatewayError::DeliveryRefused);
        require!(!account.executable, GatewayError::DeliveryRefused);

        let resulting_lamports = account
            .lamports()
            .checked_add(amount)
            .ok_or(GatewayError::Overflow)?;
        let rent = Rent::get()?;
        require!(
            rent.is_exempt(resulting_lamports, account.data_len()),
            GatewayError::DeliveryRefused
        );

        let vault_seeds = &[VAULT, self.gateway.as_ref(), &[self.vault_bump]];
        let signer_seeds = &[&vault_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: account.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
