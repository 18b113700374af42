// Custody Gateway Program
//
// Multi-party signature authorization gateway. A registered signer set
// pre-authorizes actions off-chain; any relayer submits the action and the
// detached signatures; the gateway executes it exactly once.
//
// Instructions:
// - initialize_gateway: Create gateway + vault with the initial signer set
// - deposit: Fund the vault (no authorization)
// - submit: Verify quorum, consume the sequence, execute the action
// - get_next_sequence / get_signer_set / get_balance: Read-only views

use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod custody;
pub mod errors;
pub mod instructions;
pub mod state;

pub use auth::{DetachedSignature, Digest, QuorumPolicy};
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("GQHe3o1qqFSkXnwEb7yhwnijgXvpvz8dB27ZAsmG8qwX");

#[program]
pub mod custody_gateway {
    use super::*;

    // Create the gateway account and its vault PDA
    // The quorum policy is fixed here for the lifetime of the gateway
    pub fn initialize_gateway(
        ctx: Context<InitializeGateway>,
        gateway_id: u64,
        signers: Vec<SignerId>,
        threshold: u8,
        policy: QuorumPolicy,
    ) -> Result<()> {
        ctx.accounts
            .initialize_gateway(gateway_id, signers, threshold, policy, &ctx.bumps)
    }

    // Fund the vault, anyone can call this
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    // Execute a quorum-approved action
    // Transfers need the recipient account, RotateSigners does not
    pub fn submit(
        ctx: Context<Submit>,
        action: ActionDescriptor,
        signatures: Vec<DetachedSignature>,
    ) -> Result<SubmitReceipt> {
        ctx.accounts.submit(action, signatures)
    }

    pub fn get_next_sequence(ctx: Context<GatewayView>, class: ClassTag) -> Result<u64> {
        Ok(ctx.accounts.next_sequence(class))
    }

    pub fn get_signer_set(ctx: Context<GatewayView>) -> Result<Vec<SignerId>> {
        Ok(ctx.accounts.signer_set())
    }

    pub fn get_balance(ctx: Context<GatewayView>) -> Result<u64> {
        Ok(ctx.accounts.balance())
    }
}
