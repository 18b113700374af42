use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{auth::QuorumPolicy, constants::*, state::*};

// Initialize Gateway Instruction
//
// Creates the gateway account and its vault PDA with:
// - The initial signer set and threshold
// - The quorum policy (fixed for the gateway's lifetime)
// - Both sequence counters at 0 and an empty custody ledger
//
// The creator pays for the accounts and gets no authority over them.

#[derive(Accounts)]
#[instruction(gateway_id: u64)]
pub struct InitializeGateway<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    // Gateway PDA
    // Seeds: ["gateway", creator, gateway_id]
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Gateway::INIT_SPACE,
        seeds = [
            GATEWAY,
            creator.key().as_ref(),
            &gateway_id.to_le_bytes(),
        ],
        bump,
    )]
    pub gateway: Account<'info, Gateway>,

    // Vault PDA - holds the custodied lamports
    // Seeds: ["vault", gateway]
    #[account(
        mut,
        seeds = [
            VAULT,
            gateway.key().as_ref(),
        ],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGateway<'info> {
    pub fn initialize_gateway(
        &mut self,
        gateway_id: u64,
        signers: Vec<SignerId>,
        threshold: u8,
        policy: QuorumPolicy,
        bumps: &InitializeGatewayBumps,
    ) -> Result<()> {
        let gateway_key = self.gateway.key();

        // 1. Gateway state
        self.gateway.set_inner(Gateway::new(
            gateway_id,
            self.creator.key(),
            self.vault.key(),
            policy,
            bumps.gateway,
            bumps.vault,
        ));

        // 2. Signer set, validated against the policy
        self.gateway.install_signers(&signers, threshold)?;

        // 3. Vault account, topped up to the rent minimum only
        // The rent reserve is never part of the custody ledger. A vault address
        // that was funded ahead of time only gets the difference.
        let rent = Rent::get()?;
        let top_up = rent
            .minimum_balance(0)
            .saturating_sub(self.vault.lamports());

        if top_up > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.creator.to_account_info(),
                        to: self.vault.to_account_info(),
                    },
                ),
                top_up,
            )?;
        }

        msg!(
            "Gateway {} initialized: {}-of-{} ({:?})",
            gateway_key,
            threshold,
            signers.len(),
            policy
        );

        Ok(())
    }
}
