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

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use std::{fmt, io};
use std::sync::OnceLock;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{self, serialize, Decodable, Encodable};
use crate::hash_types::{BlockHash, TxMerkleNode, Txid};
use crate::util::hash::bitcoin_merkle_root;
use crate::util::uint::Uint256;

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}

impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);

impl BlockHeader {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::hash(&serialize(self))
    }

    /// Computes the target the header's `bits` encode, `None` if they are
    /// negative or overflow.
    pub fn target(&self) -> Option<Uint256> {
        Uint256::from_compact(self.bits)
    }
}

/// A block: a header and the transactions it commits to.
///
/// Fields are private so that the cached block hash can never go stale.
pub struct Block {
    header: BlockHeader,
    txdata: Vec<Transaction>,
    hash: OnceLock<BlockHash>,
}

impl Block {
    /// Assembles a block from its parts.
    pub fn new(header: BlockHeader, txdata: Vec<Transaction>) -> Block {
        Block {
            header,
            txdata,
            hash: OnceLock::new(),
        }
    }

    /// The block header
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// List of transactions contained in the block
    pub fn txdata(&self) -> &[Transaction] {
        &self.txdata
    }

    /// Returns the block hash, computing it on first use.
    pub fn block_hash(&self) -> BlockHash {
        *self.hash.get_or_init(|| self.header.block_hash())
    }

    /// Computes the merkle root of the transactions, `None` if there are none.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let txids: Vec<Txid> = self.txdata.iter().map(Transaction::txid).collect();
        bitcoin_merkle_root(&txids)
    }

    /// Checks if the merkle root of the header matches the merkle root of
    /// the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        self.compute_merkle_root() == Some(self.header.merkle_root)
    }

    /// Splits the block into its parts.
    pub fn into_parts(self) -> (BlockHeader, Vec<Transaction>) {
        (self.header, self.txdata)
    }
}

impl Clone for Block {
    fn clone(&self) -> Block {
        Block {
            header: self.header,
            txdata: self.txdata.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Block) -> bool {
        self.header == other.header && self.txdata == other.txdata
    }
}

impl Eq for Block {}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Block")
            .field("block_hash", &self.block_hash())
            .field("header", &self.header)
            .field("txdata", &self.txdata)
            .finish()
    }
}

impl Encodable for Block {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = self.header.consensus_encode(&mut s)?;
        len += self.txdata.consensus_encode(&mut s)?;
        Ok(len)
    }
}

impl Decodable for Block {
    fn consensus_decode<D: io::Read>(mut d: D) -> Result<Block, encode::Error> {
        let header = Decodable::consensus_decode(&mut d)?;
        let txdata = Decodable::consensus_decode(&mut d)?;
        Ok(Block::new(header, txdata))
    }
}
