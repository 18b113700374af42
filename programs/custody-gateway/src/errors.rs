use anchor_lang::prelude::*;

#[error_code]
pub enum GatewayError {
    // Authorization errors
    #[msg("Signature is not a well-formed recoverable secp256k1 signature")]
    MalformedSignature,

    #[msg("Signatures do not satisfy the quorum for this action")]
    QuorumNotMet,

    #[msg("Action sequence does not match the next expected sequence")]
    StaleOrFutureSequence,

    // Custody errors
    #[msg("Custodied balance is insufficient for this transfer")]
    InsufficientBalance,

    #[msg("Recipient refused or cannot accept the transfer")]
    DeliveryRefused,

    #[msg("Transfer amount cannot be zero")]
    ZeroTransferAmount,

    #[msg("Deposit amount cannot be zero")]
    ZeroDepositAmount,

    #[msg("Recipient cannot be the gateway or its vault")]
    InvalidRecipient,

    #[msg("Recipient account does not match the authorized recipient")]
    RecipientMismatch,

    #[msg("Transfer actions require a recipient account")]
    MissingRecipient,

    // Signer set errors
    #[msg("Invalid threshold: must be between 1 and signer count")]
    InvalidThreshold,

    #[msg("Threshold cannot exceed number of signers")]
    ThresholdExceedsSigners,

    #[msg("Positional quorum requires every signer to sign")]
    PositionalRequiresAllSigners,

    #[msg("Signer set cannot be empty")]
    EmptySignerSet,

    #[msg("Maximum number of signers exceeded")]
    TooManySigners,

    #[msg("Signer appears more than once in the signer set")]
    DuplicateSigner,

    #[msg("Signer address cannot be zero")]
    InvalidSigner,

    // Engine state errors
    #[msg("Gateway is already executing a submission")]
    ReentrantCall,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,
}
