//! Hashing functions
//!
//! Hashes are stored in the byte order they are hashed and serialized in,
//! and displayed reversed, as is usual for block and transaction ids.

use std::fmt::{self, Debug, Display, Formatter};

use serde_derive::{Deserialize, Serialize};


/// Owned, 32-byte hash value
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);


impl Hash {

    /// Parses a hash from its display form
    ///
    /// Leading whitespace and a "0x" prefix are skipped and parsing stops at
    /// the first non-hex character. The last two digits become the first
    /// byte; shorter input leaves the high bytes zero, and of longer input
    /// only the last 64 digits are used.
    pub fn from_hex(s: &str) -> Hash {
        let s = s.trim_start();
        let s = s.strip_prefix("0x").unwrap_or(s);

        let digits: Vec<u8> = s.chars()
            .map_while(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        let mut result = [0u8; 32];
        for (byte, pair) in result.iter_mut().zip(digits.rchunks(2)) {
            *byte = match pair {
                &[hi, lo] => (hi << 4) | lo,
                &[lo]     => lo,
                _         => 0,
            };
        }
        Hash(result)
    }

    /// Returns true if this hash consists only of zeros
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|x| *x == 0)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hashes the input twice with SHA256
    pub fn double_sha256(input: &[u8]) -> Hash {
        let digest1 = ring::digest::digest(&ring::digest::SHA256, input);
        let digest2 = ring::digest::digest(&ring::digest::SHA256, digest1.as_ref());

        let mut result = [0; 32];
        result.copy_from_slice(digest2.as_ref());
        Hash(result)
    }
}


impl Display for Hash {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for n in self.0.iter().rev() {
            write!(fmt, "{:02x}", n)?;
        }
        Ok(())
    }
}

impl Debug for Hash {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        Display::fmt(self, fmt)
    }
}
