use crate::state::{ActionBody, ActionDescriptor};

// Canonical action encoding
//
// Fixed layout, every field that affects authorization is included:
//   tag: u8 || sequence: u64 le || body
//
// Transfer body:      recipient: [u8; 32] || amount: u64 le
// RotateSigners body: threshold: u8 || count: u32 le || count * signer: [u8; 20]
//
// The tag fixes the body layout and the count prefixes the only variable-length
// field, so two different descriptors never share an encoding.
pub fn encode(action: &ActionDescriptor) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(action));

    out.push(action.class_tag().as_byte());
    out.extend_from_slice(&action.sequence.to_le_bytes());

    match &action.body {
        ActionBody::Transfer { recipient, amount } => {
            out.extend_from_slice(recipient.as_ref());
            out.extend_from_slice(&amount.to_le_bytes());
        }
        ActionBody::RotateSigners { signers, threshold } => {
            out.push(*threshold);
            out.extend_from_slice(&(signers.len() as u32).to_le_bytes());
            for signer in signers {
                out.extend_from_slice(signer.as_bytes());
            }
        }
    }

    out
}

pub fn encoded_len(action: &ActionDescriptor) -> usize {
    let header = 1 + 8;
    match &action.body {
        ActionBody::Transfer { .. } => header + 32 + 8,
        ActionBody::RotateSigners { signers, .. } => header + 1 + 4 + signers.len() * 20,
    }
}
