//! State Checksums for Rollback Verification
//!
//! Peers running the same simulation compare these checksums to detect
//! desyncs. Values are hashed by their raw bit pattern, never through the
//! display conversion, so equal checksums mean bit-identical state.

use sha2::{Digest, Sha256};

use super::fixed::Fixed;
use super::vec3::FixedVec3;

/// Domain separator prefixed to every simulation checksum.
const STATE_DOMAIN: &[u8] = b"ROLLBACK_MATH_STATE_V1";

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// SHA-256 over the raw little-endian bits of fixed-point values.
///
/// Order of updates is part of the checksum.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Start a checksum for one simulation frame.
    pub fn for_simulation_state() -> Self {
        let mut hasher = Sha256::new();
        hasher.update(STATE_DOMAIN);
        Self { hasher }
    }

    /// Feed a scalar's raw bits.
    #[inline]
    pub fn update_fixed(&mut self, value: Fixed) {
        self.hasher.update(value.raw().to_le_bytes());
    }

    /// Feed a vector, x then y then z.
    #[inline]
    pub fn update_vec3(&mut self, value: FixedVec3) {
        self.update_fixed(value.x);
        self.update_fixed(value.y);
        self.update_fixed(value.z);
    }

    /// Finish and return the digest.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Lowercase hex rendering of a checksum, for logs.
pub fn checksum_hex(hash: &StateHash) -> String {
    hex::encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum_of(values: &[Fixed]) -> StateHash {
        let mut hasher = StateHasher::for_simulation_state();
        for value in values {
            hasher.update_fixed(*value);
        }
        hasher.finalize()
    }

    #[test]
    fn test_checksum_is_repeatable() {
        let frame = [Fixed::from_raw(180_224), Fixed::from_int(-3)];
        assert_eq!(checksum_of(&frame), checksum_of(&frame));
    }

    #[test]
    fn test_checksum_depends_on_order() {
        let a = Fixed::from_int(1);
        let b = Fixed::from_int(2);
        assert_ne!(checksum_of(&[a, b]), checksum_of(&[b, a]));
    }

    #[test]
    fn test_one_ulp_changes_checksum() {
        assert_ne!(
            checksum_of(&[Fixed::from_raw(32_768)]),
            checksum_of(&[Fixed::from_raw(32_769)])
        );
    }

    #[test]
    fn test_vec3_checksum_matches_components() {
        let mut hasher = StateHasher::for_simulation_state();
        hasher.update_vec3(FixedVec3::from_ints(3, -4, 5));

        let components = [Fixed::from_int(3), Fixed::from_int(-4), Fixed::from_int(5)];
        assert_eq!(hasher.finalize(), checksum_of(&components));
    }

    #[test]
    fn test_checksum_hex_of_empty_frame() {
        let hex = checksum_hex(&checksum_of(&[]));
        assert_eq!(hex.len(), 64);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}
