//! Merkle tree implementation
//!

// minimum number of hashes to use parallel hashing
const PARALLEL_HASHING_THRESHOLD: usize = 60;

use rayon::prelude::*;

use crate::hash::Hash;


fn hash_pair(first: &Hash, second: &Hash) -> Hash {
    let mut pair = [0u8; 64];
    pair[..32].copy_from_slice(first.as_bytes());
    pair[32..].copy_from_slice(second.as_bytes());
    Hash::double_sha256(&pair)
}

/// This halves the merkle tree leaves, taking it one level up
///
/// Loops until one is left
fn shrink_merkle_tree(mut hashes: Vec<Hash>) -> Vec<Hash> {

    while hashes.len() > 1 {

        // the result is half the size rounded up
        let count = (hashes.len() + 1) / 2;

        let reduce = |n: usize| {
            let first = &hashes[n * 2];

            // the last one is doubled if this layer is odd
            let second = hashes.get(n * 2 + 1).unwrap_or(first);

            hash_pair(first, second)
        };

        hashes = if count > PARALLEL_HASHING_THRESHOLD
            { (0..count).into_par_iter().map(reduce).collect() }
        else
            { (0..count).map(reduce).collect() };
    }
    hashes
}

/// Calculates the merkle root for the given set of hashes
///
/// Returns None for an empty set
pub fn get_merkle_root(hashes: Vec<Hash>) -> Option<Hash> {
    shrink_merkle_tree(hashes).first().copied()
}
