// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Internal helper functions for unit tests
//!
//!

use std::str::FromStr;

use crate::hash_types::BlockHash;

pub fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn block_hash(s: &str) -> BlockHash {
    BlockHash::from_str(s).unwrap()
}

/// A 1-of-1 bare multisig challenge, the shape custom signets usually use.
pub fn one_of_one_challenge() -> Vec<u8> {
    decode_hex("512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be43051ae")
}
