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

//! Public keys
//!
//! A secp256k1 public key that remembers whether it was given in compressed
//! or uncompressed form, so that scripts committing to it serialize it back
//! byte for byte.
//!

use std::{error, fmt, str::FromStr};

use hashes::hex::{self, FromHex, ToHex};

/// A key-related error.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A secp256k1 error
    Secp256k1(secp256k1::Error),
    /// Hex decoding error
    Hex(hex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Secp256k1(ref e) => write!(f, "secp256k1: {}", e),
            Error::Hex(ref e) => write!(f, "hex: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Secp256k1(ref e) => Some(e),
            Error::Hex(_) => None,
        }
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::Secp256k1(e)
    }
}

#[doc(hidden)]
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::Hex(e)
    }
}

/// A public key which can be used in scripts.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    /// Whether this public key should be serialized as compressed
    pub compressed: bool,
    /// The actual secp256k1 key
    pub key: secp256k1::PublicKey,
}

impl PublicKey {
    /// Serialize the public key to bytes, in the form it was given in.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.compressed {
            self.key.serialize().to_vec()
        } else {
            self.key.serialize_uncompressed().to_vec()
        }
    }

    /// Deserialize a public key from a slice; 33 bytes means compressed.
    pub fn from_slice(data: &[u8]) -> Result<PublicKey, Error> {
        let compressed = data.len() == 33;
        Ok(PublicKey {
            compressed,
            key: secp256k1::PublicKey::from_slice(data)?,
        })
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_bytes()[..].to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<PublicKey, Error> {
        let bytes = Vec::<u8>::from_hex(s)?;
        PublicKey::from_slice(&bytes)
    }
}
