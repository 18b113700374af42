// Test utilities for the custody gateway program

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorSerialize};
use custody_gateway::{
    auth, ActionDescriptor, DetachedSignature, Digest, Gateway, GatewayError, SignerId,
};
use litesvm::LiteSVM;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(custody_gateway::ID.to_bytes());

pub const COMPUTE_BUDGET_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ComputeBudget111111111111111111111111111111");

// PDA Seeds (must match constants.rs)
pub const GATEWAY_SEED: &[u8] = b"gateway";
pub const VAULT_SEED: &[u8] = b"vault";

// Borsh enum tags (must match QuorumPolicy / ActionBody declaration order)
pub const POLICY_CANONICAL: u8 = 0;
pub const POLICY_POSITIONAL: u8 = 1;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the gateway program
// Read at runtime so the host-only engine tests, which share this module,
// build without the SBF artifact. The LiteSVM tests are #[ignore]d and run
// through `anchor test`.
pub fn setup_svm() -> LiteSVM {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/target/deploy/custody_gateway.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|err| panic!("{} not found ({}), build with `anchor test`", path, err));

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(PROGRAM_ID, &program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Derive gateway PDA
pub fn derive_gateway_pda(creator: &Pubkey, gateway_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[GATEWAY_SEED, creator.as_ref(), &gateway_id.to_le_bytes()],
        &PROGRAM_ID,
    )
}

// Derive vault PDA
pub fn derive_vault_pda(gateway: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, gateway.as_ref()], &PROGRAM_ID)
}

pub fn to_anchor_pubkey(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn fetch_gateway(svm: &LiteSVM, gateway: &Pubkey) -> Gateway {
    let account = svm.get_account(gateway).expect("Gateway account should exist");
    Gateway::try_deserialize(&mut account.data.as_slice()).expect("Gateway should deserialize")
}

pub fn lamports(svm: &LiteSVM, key: &Pubkey) -> u64 {
    svm.get_account(key).map(|account| account.lamports).unwrap_or(0)
}

pub fn error_code(error: GatewayError) -> u32 {
    error as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}

// ======================== SIGNERS ========================

pub struct TestSigner {
    secret: SecretKey,
    pub id: SignerId,
}

impl TestSigner {
    pub fn from_seed(seed: u8) -> Self {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&[seed; 32]).expect("Seed should be a valid secret key");
        let uncompressed = PublicKey::from_secret_key(&secp, &secret).serialize_uncompressed();

        let mut raw = [0u8; 64];
        raw.copy_from_slice(&uncompressed[1..]);

        Self {
            secret,
            id: SignerId::from_public_key(&raw),
        }
    }

    pub fn sign_digest(&self, digest: &Digest) -> DetachedSignature {
        let secp = Secp256k1::new();
        let message = Message::from_digest(digest.to_bytes());
        let (recovery_id, compact) = secp
            .sign_ecdsa_recoverable(&message, &self.secret)
            .serialize_compact();

        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&compact);
        bytes[64] = recovery_id.to_i32() as u8;
        DetachedSignature::new(bytes)
    }

    // Sign `action` for the gateway at `gateway`
    pub fn sign(&self, gateway: &Pubkey, action: &ActionDescriptor) -> DetachedSignature {
        self.sign_digest(&auth::digest(&to_anchor_pubkey(gateway), action))
    }
}

// ======================== INSTRUCTIONS ========================

// Build initialize_gateway instruction
pub fn build_initialize_gateway_ix(
    creator: &Pubkey,
    gateway_id: u64,
    signers: &[SignerId],
    threshold: u8,
    policy: u8,
) -> Instruction {
    let (gateway, _) = derive_gateway_pda(creator, gateway_id);
    let (vault, _) = derive_vault_pda(&gateway);

    let mut data = anchor_discriminator("initialize_gateway").to_vec();
    data.extend_from_slice(&gateway_id.to_le_bytes());
    // Borsh Vec: len (4 bytes) + items
    data.extend_from_slice(&(signers.len() as u32).to_le_bytes());
    for signer in signers {
        data.extend_from_slice(signer.as_bytes());
    }
    data.push(threshold);
    data.push(policy);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(gateway, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build deposit instruction
pub fn build_deposit_ix(depositor: &Pubkey, gateway: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = derive_vault_pda(gateway);

    let mut data = anchor_discriminator("deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new(*gateway, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build submit instruction
// `recipient` is None for governance actions; Anchor reads the program ID as "no account"
pub fn build_submit_ix(
    relayer: &Pubkey,
    gateway: &Pubkey,
    recipient: Option<&Pubkey>,
    action: &ActionDescriptor,
    signatures: &[DetachedSignature],
) -> Instruction {
    let (vault, _) = derive_vault_pda(gateway);

    let mut data = anchor_discriminator("submit").to_vec();
    action
        .serialize(&mut data)
        .expect("Action should serialize");
    data.extend_from_slice(&(signatures.len() as u32).to_le_bytes());
    for signature in signatures {
        data.extend_from_slice(&signature.bytes);
    }

    let recipient_meta = match recipient {
        Some(key) => AccountMeta::new(*key, false),
        None => AccountMeta::new_readonly(PROGRAM_ID, false),
    };

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*relayer, true),
            AccountMeta::new(*gateway, false),
            AccountMeta::new(vault, false),
            recipient_meta,
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build get_balance instruction
pub fn build_get_balance_ix(gateway: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(*gateway, false)],
        data: anchor_discriminator("get_balance").to_vec(),
    }
}

// Build get_next_sequence instruction
pub fn build_get_next_sequence_ix(gateway: &Pubkey, class: u8) -> Instruction {
    let mut data = anchor_discriminator("get_next_sequence").to_vec();
    data.push(class);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(*gateway, false)],
        data,
    }
}

// Build a SetComputeUnitLimit instruction (compute budget program, variant 2)
pub fn build_compute_unit_limit_ix(units: u32) -> Instruction {
    let mut data = vec![2u8];
    data.extend_from_slice(&units.to_le_bytes());

    Instruction {
        program_id: COMPUTE_BUDGET_PROGRAM_ID,
        accounts: vec![],
        data,
    }
}

// ======================== TRANSACTION HELPERS ========================

/// Send a transaction and expect success, returning the program return data
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Vec<u8> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let metadata = svm
        .send_transaction(tx)
        .expect("Transaction should succeed");
    metadata.return_data.data
}

/// Send several instructions in one transaction and expect success
pub fn send_ixs_expect_success(
    svm: &mut LiteSVM,
    ixs: &[Instruction],
    payer: &Keypair,
    signers: &[&Keypair],
) {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    svm.send_transaction(tx)
        .expect("Transaction should succeed");
}

/// Send a transaction and expect failure
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err())
}

/// Send a transaction and expect it to fail with a specific gateway error
pub fn send_tx_expect_error(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
    expected: GatewayError,
) {
    let failure = send_tx_expect_failure(svm, ix, payer, signers);
    let code = format!("Custom({})", error_code(expected));
    assert!(
        failure.contains(&code),
        "Expected {:?} ({}), got: {}",
        expected,
        code,
        failure
    );
}
