//! Transactions in network format
//!

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::hash::Hash;


/// A transaction as it is serialized on the network
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub version:   i32,
    pub txs_in:    Vec<TxInput>,
    pub txs_out:   Vec<TxOutput>,
    pub lock_time: u32,
}

/// Transaction input
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prev_tx_out:     Hash,
    pub prev_tx_out_idx: u32,
    pub script:          Vec<u8>,
    pub sequence:        u32,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value:     i64,
    pub pk_script: Vec<u8>
}


impl Transaction {

    /// Serializes the transaction in network format
    pub fn to_bytes(&self) -> serde_network::Result<Vec<u8>> {
        let mut buf = Vec::new();
        serde_network::serialize(&mut buf, self)?;
        Ok(buf)
    }

    /// The transaction id; the double-SHA256 of its serialization
    pub fn txid(&self) -> serde_network::Result<Hash> {
        Ok(Hash::double_sha256(&self.to_bytes()?))
    }

    pub fn is_coinbase(&self) -> bool {
        self.txs_in.len() == 1 && self.txs_in[0].prev_tx_out.is_null()
    }
}


impl fmt::Debug for TxInput {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Prev-TX:{:?}, idx={:?}, seq={:?} script={}",
                    self.prev_tx_out,
                    self.prev_tx_out_idx,
                    self.sequence,
                    hex::encode(&self.script))
    }
}

impl fmt::Debug for TxOutput {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "v:{:?} script={}", self.value, hex::encode(&self.pk_script))
    }
}
