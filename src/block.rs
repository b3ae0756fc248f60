//!
//! Bitcoin block
//!
//! Blocks in network format: an 80-byte header followed by the transactions

use serde_derive::{Deserialize, Serialize};

use crate::hash::Hash;
use crate::merkle_tree;
use crate::transaction::Transaction;


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Header {
    pub version:     i32,
    pub prev_hash:   Hash,
    pub merkle_root: Hash,
    pub time:        u32,
    pub bits:        u32,
    pub nonce:       u32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Block {
    pub header: Header,
    pub txs:    Vec<Transaction>,
}


impl Header {

    /// The block hash; the double-SHA256 of the serialized header
    pub fn hash(&self) -> serde_network::Result<Hash> {
        let mut buf = Vec::with_capacity(80);
        serde_network::serialize(&mut buf, self)?;
        Ok(Hash::double_sha256(&buf))
    }
}

impl Block {

    pub fn hash(&self) -> serde_network::Result<Hash> {
        self.header.hash()
    }

    /// Computes the merkle root over the txids; None if there are no
    /// transactions
    pub fn merkle_root(&self) -> serde_network::Result<Option<Hash>> {
        let txids = self.txs.iter()
            .map(|tx| tx.txid())
            .collect::<serde_network::Result<Vec<_>>>()?;

        Ok(merkle_tree::get_merkle_root(txids))
    }

    /// Returns true if the header commits to these transactions
    pub fn has_valid_merkle_root(&self) -> serde_network::Result<bool> {
        Ok(self.merkle_root()? == Some(self.header.merkle_root))
    }
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const GENESIS_BLOCK: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b2\
        7ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c0101000000010000\
        000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d01044554\
        68652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f6620\
        7365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0\
        fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de\
        5c384df7ba0b8d578a4c702b6bf11d5fac00000000";

    #[test]
    fn test_genesis() {
        let raw = hex::decode(GENESIS_BLOCK).unwrap();
        assert_eq!(raw.len(), 285);

        let block: Block = serde_network::deserialize_exact(&raw).unwrap();

        assert_eq!(block.header.version, 1);
        assert!(block.header.prev_hash.is_null());
        assert_eq!(block.header.bits, 0x1d00ffff);
        assert_eq!(block.header.nonce, 2083236893);
        assert_eq!(block.txs.len(), 1);
        assert!(block.txs[0].is_coinbase());
        assert_eq!(block.txs[0].txs_out[0].value, 50 * 100_000_000);

        assert_eq!(block.hash().unwrap().to_string(),
                   "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");
        assert_eq!(block.header.merkle_root.to_string(),
                   "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b");
        assert!(block.has_valid_merkle_root().unwrap());
    }

    #[test]
    fn test_bad_merkle_root() {
        let raw = hex::decode(GENESIS_BLOCK).unwrap();
        let mut block: Block = serde_network::deserialize(&raw).unwrap();

        block.header.merkle_root = Hash::default();
        assert!(!block.has_valid_merkle_root().unwrap());

        block.txs.clear();
        assert_eq!(block.merkle_root().unwrap(), None);
    }
}
