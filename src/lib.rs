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

//! # BitScript chain parameters
//!
//! This library defines the parameters of every BitScript network: the
//! consensus rule set, the genesis block, the 4-byte network magic and the
//! address prefixes consumed by the encoding layers.
//!
//! The genesis block of each network is constructed from scratch (coinbase
//! transaction, Merkle root, header hash) and checked against the pinned
//! hashes before any parameter set is handed out.
//!
//! # Example: recognizing a network from its magic
//!
//! ```rust
//! use bitscript::chainparams::{identify_network, NetworkParams};
//! use bitscript::Network;
//!
//! let main = NetworkParams::main().unwrap();
//! assert_eq!(identify_network(main.magic()).unwrap(), Some(Network::Main));
//! ```

#![crate_name = "bitscript"]
#![crate_type = "dylib"]
#![crate_type = "rlib"]

// Experimental features we need
#![cfg_attr(all(test, feature = "unstable"), feature(test))]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

// Re-exported dependencies.
pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

#[macro_use] extern crate log;
#[cfg(feature = "serde")] #[macro_use] extern crate serde;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;
#[cfg(all(test, feature = "unstable"))] extern crate test;

#[cfg(target_pointer_width = "16")]
compile_error!("bitscript cannot be used on 16-bit architectures");

#[cfg(test)]
mod test_helpers;
#[macro_use]
mod internal_macros;
pub mod network;
pub mod blockdata;
pub mod util;
pub mod consensus;
pub mod chainparams;
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::chainparams::NetworkParams;
pub use crate::consensus::encode::VarInt;
pub use crate::network::constants::{Magic, Network};
pub use crate::util::amount::Amount;
pub use crate::util::key::PublicKey;
pub use crate::util::uint::Uint256;
