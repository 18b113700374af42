use anchor_lang::prelude::*;

use crate::state::*;

// Read-only views
// Values are returned through program return data

#[derive(Accounts)]
pub struct GatewayView<'info> {
    pub gateway: Account<'info, Gateway>,
}

impl<'info> GatewayView<'info> {
    pub fn next_sequence(&self, class: ClassTag) -> u64 {
        self.gateway.next_sequence(class)
    }

    pub fn signer_set(&self) -> Vec<SignerId> {
        self.gateway.signer_set().to_vec()
    }

    pub fn balance(&self) -> u64 {
        self.gateway.balance()
    }
}
