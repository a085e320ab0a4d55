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

//! File defines types for hashes used throughout the library. These types are needed in order
//! to avoid mixing data of the same hash format (like SHA256d) but of different meaning
//! (transaction id, block hash etc).

sha256d_newtype!(Txid, "A transaction hash/transaction ID.");
sha256d_newtype!(BlockHash, "A block hash.");
sha256d_newtype!(TxMerkleNode, "A hash of the Merkle tree branch or root for transactions.");
sha256d_newtype!(AssumeutxoHash, "A hash of a serialized UTXO set, as committed to by an assumeutxo snapshot.");

impl From<Txid> for TxMerkleNode {
    fn from(txid: Txid) -> TxMerkleNode {
        TxMerkleNode::from_inner(txid.into_inner())
    }
}
