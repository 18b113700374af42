use anchor_lang::prelude::*;

use crate::{auth::DetachedSignature, constants::*, custody::VaultDelivery, errors::*, state::*};

// Submit Instruction
//
// Any relayer may submit an action together with the detached signatures of
// the signer set. The relayer is untrusted: everything that matters is bound
// into the signed digest.
//
// Order:
// 1. Reentrancy guard
// 2. Recipient account matches the signed recipient (transfers only)
// 3. Digest -> quorum -> sequence -> execution (see Gateway::submit)

#[derive(Accounts)]
pub struct Submit<'info> {
    // Pays the fee, gains nothing
    #[account(mut)]
    pub relayer: Signer<'info>,

    #[account(
        mut,
        seeds = [
            GATEWAY,
            gateway.creator.as_ref(),
            &gateway.gateway_id.to_le_bytes(),
        ],
        bump = gateway.bump,
        has_one = vault,
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(
        mut,
        seeds = [
            VAULT,
            gateway.key().as_ref(),
        ],
        bump = gateway.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    // Recipient of a transfer, omitted for governance actions
    /// CHECK: Matched against the signed recipient and checked for deliverability
    /// in VaultDelivery before any lamports move
    #[account(mut)]
    pub recipient: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}

impl<'info> Submit<'info> {
    pub fn submit(
        &mut self,
        action: ActionDescriptor,
        signatures: Vec<DetachedSignature>,
    ) -> Result<SubmitReceipt> {
        require!(!self.gateway.locked, GatewayError::ReentrantCall);

        if let ActionBody::Transfer { recipient, .. } = &action.body {
            let account = self
                .recipient
                .as_ref()
                .ok_or(GatewayError::MissingRecipient)?;
            require_keys_eq!(account.key(), *recipient, GatewayError::RecipientMismatch);
        }

        let gateway_key = self.gateway.key();
        let mut delivery = VaultDelivery {
            gateway: gateway_key,
            vault: self.vault.to_account_info(),
            vault_bump: self.gateway.vault_bump,
            recipient: self.recipient.as_ref().map(|account| account.to_account_info()),
            system_program: self.system_program.to_account_info(),
        };

        let receipt = self
            .gateway
            .submit(&gateway_key, &action, &signatures, &mut delivery)?;

        match receipt {
            SubmitReceipt::Transfer(transfer) => msg!(
                "Transfer {} relayed by {}: {} lamports to {}, custody balance {}",
                transfer.sequence,
                self.relayer.key(),
                transfer.amount,
                transfer.recipient,
                transfer.remaining_balance
            ),
            SubmitReceipt::SignersRotated {
                sequence,
                signer_count,
                threshold,
            } => msg!(
                "Signer set rotated at {} by {}: {}-of-{}",
                sequence,
                self.relayer.key(),
                threshold,
                signer_count
            ),
        }

        Ok(receipt)
    }
}
