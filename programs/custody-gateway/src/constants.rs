pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["gateway", creator, gateway_id]
// The resulting address is the engine identity bound into every digest
pub const GATEWAY: &[u8] = b"gateway";

// Seeds for PDA derivation: ["vault", gateway]
pub const VAULT: &[u8] = b"vault";

// Maximum number of registered signers
// Each signature costs one secp256k1_recover syscall (25k CU). Above 7
// signatures the default 200k CU instruction limit is not enough and the
// relayer must prepend a SetComputeUnitLimit instruction.
pub const MAX_SIGNERS: usize = 10;

// Domain separation tag, bump the version whenever the encoding changes
pub const DOMAIN_TAG: &[u8] = b"custody-gateway:v1";

// Signing-format prefix applied over the domain-separated action hash
// Keeps a gateway digest from ever being a valid message for another format
pub const SIGNED_DIGEST_PREFIX: &[u8] = b"\x19Custody Gateway Signed Digest:\n32";

// r (32) || s (32) || v (1)
pub const SIGNATURE_LEN: usize = 65;

// Width of a signer address (keccak256(pubkey)[12..])
pub const SIGNER_ID_LEN: usize = 20;

// secp256k1 group order n
pub const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

// n / 2, upper bound for s (low-s form only)
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];
