//! Transaction structure and serialization
//!
//! Inputs reference previous outputs by (txid, index); the transaction id is
//! SHA-256d over the canonical serialization.

use serde::{Deserialize, Serialize};

use super::Script;
use crate::crypto::{sha256d, Hash};

/// Sequence number marking a final input
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Append a variable-length integer
pub fn write_compact_size(bytes: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        bytes.push(n as u8);
    } else if n <= 0xffff {
        bytes.push(0xfd);
        bytes.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        bytes.push(0xfe);
        bytes.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        bytes.push(0xff);
        bytes.extend_from_slice(&n.to_le_bytes());
    }
}

fn write_script(bytes: &mut Vec<u8>, script: &Script) {
    write_compact_size(bytes, script.len() as u64);
    bytes.extend_from_slice(script.as_bytes());
}

/// Reference to an output of a previous transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        OutPoint {
            txid: Hash::zero(),
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == u32::MAX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: i64,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Create a version 1 transaction with no lock time
    pub fn new(inputs: Vec<TxIn>, outputs: Vec<TxOut>) -> Self {
        Self {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// Create a coinbase transaction spending the null outpoint
    pub fn coinbase(script_sig: Script, outputs: Vec<TxOut>) -> Self {
        Self::new(
            vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs,
        )
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Canonical serialization
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(input.prevout.txid.as_bytes());
            bytes.extend_from_slice(&input.prevout.index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction id
    pub fn txid(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Sum of output values
    pub fn total_output(&self) -> i64 {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::OP_CHECKSIG;

    fn genesis_tx() -> Transaction {
        let key = hex::decode(
            "0442976F7200975E487B03E4C879DECCDB801A029F0551ED897BB0707ADB58EB6FE5CFF64EC9F60A70E0729DCBE5B6969D4EB584F69997D9AFDC1E6CB3A9BCAB4D",
        )
        .unwrap();
        let script_sig = Script::new()
            .push_int(486604799)
            .push_num(4)
            .push_slice(b"The Bitcoin protocol does not care");
        let script_pubkey = Script::new().push_slice(&key).push_opcode(OP_CHECKSIG);
        Transaction::coinbase(
            script_sig,
            vec![TxOut {
                value: 0,
                script_pubkey,
            }],
        )
    }

    #[test]
    fn test_compact_size_boundaries() {
        let cases: [(u64, &[u8]); 5] = [
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0xffff, &[0xfd, 0xff, 0xff]),
            (0x10000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0x1_0000_0000, &[0xff, 0, 0, 0, 0, 1, 0, 0, 0]),
        ];
        for (n, expected) in cases {
            let mut out = Vec::new();
            write_compact_size(&mut out, n);
            assert_eq!(out, expected, "compact size of {n:#x}");
        }
    }

    #[test]
    fn test_coinbase_detection() {
        let tx = genesis_tx();
        assert!(tx.is_coinbase());

        let mut spend = tx.clone();
        spend.inputs[0].prevout.index = 0;
        assert!(!spend.is_coinbase());
    }

    #[test]
    fn test_genesis_txid() {
        let tx = genesis_tx();
        assert_eq!(tx.to_bytes().len(), 169);
        assert_eq!(
            tx.txid().to_hex(),
            "2af901602794727aad2d46f89dca5b1097fe2ea66c2d4b926b8d6d90620a5732"
        );
        assert_eq!(tx.total_output(), 0);
    }
}
