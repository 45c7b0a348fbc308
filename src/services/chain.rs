//! Stand-ins for values a chain would return. Nothing here touches a network.

use rand::Rng;

fn random_hex(bytes: usize) -> String {
    let mut rng = rand::rng();
    let buf: Vec<u8> = (0..bytes).map(|_| rng.random()).collect();
    format!("0x{}", hex::encode(buf))
}

/// `0x` followed by 64 hex characters.
pub fn mock_tx_hash() -> String {
    random_hex(32)
}

/// `0x` followed by 40 hex characters.
pub fn mock_address() -> String {
    random_hex(20)
}
