// Rust Bitcoin Library
// Written in 2014 by
//   Andrew Poelstra <apoelstra@wpsoftware.net>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//
// Changes for bitscript are licensed as below.
// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Hash functions
//!
//! Utility functions related to hashing data, including merkleization
//!

use hashes::{sha256d, Hash, HashEngine};

use crate::hash_types::{TxMerkleNode, Txid};

/// Calculates the merkle root of a list of transaction ids.
///
/// An odd level repeats its last element; a single id is its own root.
/// Returns `None` for an empty list.
pub fn bitcoin_merkle_root(txids: &[Txid]) -> Option<TxMerkleNode> {
    if txids.is_empty() {
        return None;
    }
    let mut level: Vec<[u8; 32]> = txids.iter().map(|txid| txid.into_inner()).collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                let mut engine = sha256d::Hash::engine();
                engine.input(left);
                engine.input(right);
                sha256d::Hash::from_engine(engine).into_inner()
            })
            .collect();
    }
    Some(TxMerkleNode::from_inner(level[0]))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::bitcoin_merkle_root;
    use crate::hash_types::{TxMerkleNode, Txid};

    #[test]
    fn single_leaf_is_root() {
        let txid = Txid::from_str("6b871c79b17729663ef8c6da282cdf411481cf22dd92f0721e88c4ce76f2d6ae").unwrap();
        assert_eq!(bitcoin_merkle_root(&[txid]), Some(TxMerkleNode::from(txid)));
        assert_eq!(bitcoin_merkle_root(&[]), None);
    }

    #[test]
    fn odd_level_duplicates_last() {
        let a = Txid::hash(b"a");
        let b = Txid::hash(b"b");
        let c = Txid::hash(b"c");
        let three = bitcoin_merkle_root(&[a, b, c]).unwrap();
        let four = bitcoin_merkle_root(&[a, b, c, c]).unwrap();
        assert_eq!(three, four);
        assert_ne!(bitcoin_merkle_root(&[a, b]).unwrap(), bitcoin_merkle_root(&[b, a]).unwrap());
    }

    #[test]
    fn block_170_merkle_root() {
        // bitcoin block 170, the first block spending a coin
        let txids = [
            Txid::from_str("b1fea52486ce0c62bb442b530a3f0132b826c74e473d1f2c220bfa78111c5082").unwrap(),
            Txid::from_str("f4184fc596403b9d638783cf57adfe4c75c605f6356fbc91338530e9831e9e16").unwrap(),
        ];
        assert_eq!(
            bitcoin_merkle_root(&txids).unwrap().to_string(),
            "7dac2c5666815c17a3b36427de37bb9d2e2c5ccec3f8633eb91a4205cb4c10ff"
        );
    }
}
