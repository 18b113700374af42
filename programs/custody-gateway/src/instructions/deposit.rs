use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, state::*};

// Deposit Instruction
//
// Anyone may fund the gateway. No signatures are involved: inbound value
// cannot be refused, it can only be accounted for.

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        // Ledger first, then the inbound transfer
        let balance = self.gateway.deposit(amount)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.depositor.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            ),
            amount,
        )?;

        msg!(
            "Deposit of {} lamports from {}, custody balance {}",
            amount,
            self.depositor.key(),
            balance
        );

        Ok(())
    }
}
