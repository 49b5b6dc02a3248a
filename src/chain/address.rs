//! Recipient address validation.
//!
//! # Responsibilities
//! - Bech32 checksum check for caller-supplied addresses
//! - Human-readable-prefix check against the configured network
//!
//! Both checks are pure and never panic; anything undecodable is simply
//! invalid. Handlers run the prefix check first, then the checksum check,
//! and reject before any network round-trip.

/// True if the address decodes under the bech32 checksum scheme.
pub fn is_well_formed(address: &str) -> bool {
    bech32::decode(address).is_ok()
}

/// True if the address decodes and its human-readable prefix matches
/// `expected` exactly.
pub fn has_expected_prefix(address: &str, expected: &str) -> bool {
    match bech32::decode(address) {
        Ok((hrp, _)) => hrp.as_str() == expected,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bech32::{Bech32, Hrp};

    fn encode(prefix: &str, payload: &[u8]) -> String {
        bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), payload).unwrap()
    }

    #[test]
    fn accepts_valid_address() {
        let address = encode("cosmos", &[7u8; 20]);
        assert!(is_well_formed(&address));
        assert!(has_expected_prefix(&address, "cosmos"));
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let mut address = encode("cosmos", &[7u8; 20]);
        // Flip the final checksum character.
        let last = address.pop().unwrap();
        address.push(if last == 'q' { 'p' } else { 'q' });
        assert!(!is_well_formed(&address));
        assert!(!has_expected_prefix(&address, "cosmos"));
    }

    #[test]
    fn rejects_garbage() {
        for junk in ["", "cosmos", "not-an-address", "cosmos1", "1qqqqq"] {
            assert!(!is_well_formed(junk), "{junk:?} should be malformed");
            assert!(!has_expected_prefix(junk, "cosmos"));
        }
    }

    #[test]
    fn rejects_foreign_prefix() {
        let address = encode("osmo", &[7u8; 20]);
        assert!(is_well_formed(&address));
        assert!(!has_expected_prefix(&address, "cosmos"));
    }
}
