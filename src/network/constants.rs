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

//! Network constants
//!
//! This module provides the [`Network`][1] chain type tag and the
//! [`Magic`][2] message start bytes.
//!
//! [`Magic`][2] implements the [`Decodable`][3] and [`Encodable`][4] traits
//! and encodes as its four raw bytes.
//!
//! [1]: enum.Network.html
//! [2]: struct.Magic.html
//! [3]: ../../consensus/encode/trait.Decodable.html
//! [4]: ../../consensus/encode/trait.Encodable.html
//!
//! # Example: encoding a network's magic bytes
//!
//! ```rust
//! use bitscript::network::constants::Magic;
//! use bitscript::consensus::encode::serialize;
//!
//! let magic = Magic::MAIN;
//! let bytes = serialize(&magic);
//!
//! assert_eq!(&bytes[..], &[0xf8, 0xbc, 0xb3, 0xd7]);
//! ```

use std::{error, fmt, io};
use std::str::FromStr;

use hashes::hex::{self, FromHex};
use hashes::{sha256d, Hash};

use crate::consensus::encode::{self, serialize, Decodable, Encodable};

/// The BitScript network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Production chain
    Main,
    /// Public test chain, version 3
    Test,
    /// Public test chain, version 4
    Testnet4,
    /// Test chain whose blocks are signed by a challenge script
    Signet,
    /// Private regression test chain
    Regtest,
}

impl Network {
    /// All networks, in the order they are matched against a magic.
    pub const ALL: [Network; 5] = [
        Network::Main,
        Network::Test,
        Network::Testnet4,
        Network::Regtest,
        Network::Signet,
    ];

    /// Converts a `Network` to its equivalent `-chain` argument name.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Testnet4 => "testnet4",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        }
    }

    /// Converts a `-chain` argument name to its equivalent `Network`.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        use self::Network::*;

        let network = match core_arg {
            "main" => Main,
            "test" => Test,
            "testnet4" => Testnet4,
            "signet" => Signet,
            "regtest" => Regtest,
            _ => return Err(ParseNetworkError(core_arg.to_owned())),
        };
        Ok(network)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_core_arg(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_core_arg())
    }
}

/// The four message start bytes that open every p2p message of a network.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Magic([u8; 4]);

impl Magic {
    /// Main network magic
    pub const MAIN: Magic = Magic([0xf8, 0xbc, 0xb3, 0xd7]);
    /// Test network (version 3) magic
    pub const TEST: Magic = Magic([0x0b, 0x11, 0x09, 0x07]);
    /// Test network (version 4) magic
    pub const TESTNET4: Magic = Magic([0x1c, 0x16, 0x3f, 0x28]);
    /// Regression test network magic
    pub const REGTEST: Magic = Magic([0xfa, 0xbf, 0xb5, 0xda]);

    /// Creates a magic from its bytes, in wire order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Magic {
        Magic(bytes)
    }

    /// Returns the bytes, in wire order.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Derives the magic of a signet: the first four bytes of the double
    /// SHA256 of the challenge in its length-prefixed serialization.
    pub fn from_signet_challenge(challenge: &[u8]) -> Magic {
        let digest = sha256d::Hash::hash(&serialize(challenge)).into_inner();
        Magic([digest[0], digest[1], digest[2], digest[3]])
    }
}

impl From<[u8; 4]> for Magic {
    fn from(bytes: [u8; 4]) -> Magic {
        Magic(bytes)
    }
}

impl fmt::LowerHex for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Magic({:x})", self)
    }
}

impl FromStr for Magic {
    type Err = hex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Vec::<u8>::from_hex(s)?;
        if bytes.len() != 4 {
            return Err(hex::Error::InvalidLength(8, s.len()));
        }
        Ok(Magic([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl Encodable for Magic {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, encode::Error> {
        self.0.consensus_encode(s)
    }
}

impl Decodable for Magic {
    #[inline]
    fn consensus_decode<D: io::Read>(d: D) -> Result<Self, encode::Error> {
        Ok(Magic(Decodable::consensus_decode(d)?))
    }
}
