// Rust Bitcoin Library
// Written in 2014 by
//     Andrew Poelstra <apoelstra@wpsoftware.net>
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

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block and its
//! single transaction
//!

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::opcodes;
use crate::blockdata::script::{self, Script};
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::BlockHash;
use crate::util::amount::Amount;
use crate::util::hash::bitcoin_merkle_root;
use crate::util::key::{self, PublicKey};

pub use crate::util::amount::COIN_VALUE;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// The compact difficulty pushed first by every genesis coinbase script
pub const GENESIS_SCRIPT_BITS: i64 = 486604799;
/// The headline committed to by the genesis coinbase
pub const GENESIS_TIMESTAMP: &str = "BitScript - Blockchain Storage - UK 01/01/2025";
/// Uncompressed public key paid by the standard genesis output
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = [
    0x04, 0x70, 0xca, 0x1d, 0x89, 0x77, 0xc6, 0x94, 0x36, 0x40, 0x13, 0x9e, 0x6d,
    0x5b, 0x68, 0xd5, 0x6a, 0x78, 0x50, 0xa9, 0x84, 0x67, 0xb9, 0x2d, 0x31, 0x0f,
    0xc2, 0xfb, 0x93, 0xab, 0xf0, 0x86, 0x6b, 0x92, 0x50, 0xac, 0x50, 0x9c, 0x78,
    0x71, 0x2c, 0x62, 0xf8, 0xd9, 0x87, 0xd4, 0xb8, 0xd9, 0xad, 0x69, 0x51, 0xbd,
    0x74, 0x6a, 0xd3, 0x84, 0xab, 0x10, 0xd4, 0xfe, 0xc8, 0x52, 0xd0, 0x3d, 0xdd,
];
/// Whole coins created by every genesis block
pub const GENESIS_REWARD_COINS: u64 = 5_000_000;

/// The genesis block reward.
pub const fn genesis_reward() -> Amount {
    Amount::from_sat(GENESIS_REWARD_COINS * COIN_VALUE)
}

/// Pay-to-public-key script for `pubkey`, taken as raw bytes so that keys
/// which are not valid curve points can still be committed to.
pub fn p2pk_script(pubkey: &[u8]) -> Script {
    script::Builder::new()
        .push_slice(pubkey)
        .push_opcode(opcodes::all::OP_CHECKSIG)
        .into_script()
}

/// Constructs the coinbase (and only) transaction of a genesis block
fn genesis_tx(timestamp: &[u8], output_script: Script, reward: Amount) -> Transaction {
    let in_script = script::Builder::new()
        .push_int(GENESIS_SCRIPT_BITS)
        .push_scriptint(4)
        .push_slice(timestamp)
        .into_script();

    Transaction {
        version: 1,
        lock_time: 0,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: in_script,
            sequence: MAX_SEQUENCE,
        }],
        output: vec![TxOut {
            value: reward,
            script_pubkey: output_script,
        }],
    }
}

/// Builds a genesis block.
///
/// The coinbase input script pushes `486604799`, the number `4` and the
/// timestamp bytes; its single output pays `reward` to `output_script`. The
/// header has a zero previous hash and commits to the coinbase as its
/// merkle root.
pub fn create_genesis_block(
    timestamp: &[u8],
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let tx = genesis_tx(timestamp, output_script, reward);
    // one leaf, never empty
    let merkle_root = bitcoin_merkle_root(&[tx.txid()]).unwrap_or_default();
    let header = BlockHeader {
        version,
        prev_blockhash: BlockHash::all_zeros(),
        merkle_root,
        time,
        bits,
        nonce,
    };
    Block::new(header, vec![tx])
}

/// Builds a genesis block with the standard headline, paying to
/// [`GENESIS_OUTPUT_PUBKEY`].
///
/// Fails if the key is not a valid secp256k1 point.
pub fn standard_genesis_block(
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Result<Block, key::Error> {
    let key = PublicKey::from_slice(&GENESIS_OUTPUT_PUBKEY)?;
    let output_script = script::Builder::new()
        .push_key(&key)
        .push_opcode(opcodes::all::OP_CHECKSIG)
        .into_script();
    Ok(create_genesis_block(GENESIS_TIMESTAMP.as_bytes(), output_script, time, nonce, bits, version, reward))
}
