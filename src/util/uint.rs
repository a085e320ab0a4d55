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

//! Big unsigned integer types
//!
//! A 256-bit unsigned value, kept in big-endian byte order so that the
//! derived ordering is numeric ordering. Used for the proof of work limit and
//! the minimum chain work.
//!

use std::fmt;
use std::str::FromStr;

use hashes::hex::{self, FromHex};

/// A 256-bit unsigned integer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// Zero.
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// Creates a value from its big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Uint256 {
        Uint256(bytes)
    }

    /// Returns the big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Parses a big-endian hex string of at most 64 digits.
    ///
    /// Shorter strings are zero-extended on the left and an optional `0x`
    /// prefix is accepted; the empty string is zero.
    pub fn from_hex(s: &str) -> Result<Uint256, hex::Error> {
        let s = s.trim_start_matches("0x");
        if s.len() > 64 {
            return Err(hex::Error::InvalidLength(64, s.len()));
        }
        let padded = format!("{:0>64}", s);
        let bytes = Vec::<u8>::from_hex(&padded)?;
        let mut ret = [0u8; 32];
        ret.copy_from_slice(&bytes);
        Ok(Uint256(ret))
    }

    /// Decodes a compact ("nBits") difficulty encoding.
    ///
    /// Returns `None` for negative or overflowing encodings.
    pub fn from_compact(bits: u32) -> Option<Uint256> {
        let size = (bits >> 24) as usize;
        let mut mantissa = bits & 0x007f_ffff;
        if size <= 3 {
            mantissa >>= 8 * (3 - size);
        }
        // the sign bit only counts if something is left after the shift
        if bits & 0x0080_0000 != 0 && mantissa != 0 {
            return None;
        }
        let mut ret = [0u8; 32];
        if size <= 3 {
            ret[28..].copy_from_slice(&mantissa.to_be_bytes());
            return Some(Uint256(ret));
        }
        let mantissa = mantissa.to_be_bytes();
        // mantissa bytes 1..4 land at positions size-3..size, counted from the low end
        for (n, byte) in mantissa[1..].iter().enumerate() {
            if *byte == 0 {
                continue;
            }
            let exponent = size - 1 - n;
            if exponent >= 32 {
                return None;
            }
            ret[31 - exponent] = *byte;
        }
        Some(Uint256(ret))
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for Uint256 {
    type Err = hex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uint256::from_hex(s)
    }
}

impl fmt::LowerHex for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Uint256({:x})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Uint256;

    #[test]
    fn uint256_from_hex_test() {
        let limit = Uint256::from_hex("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(limit.to_be_bytes()[2], 0x0f);
        assert_eq!(limit.to_string(), "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

        let short = Uint256::from_hex("1b1f9ed6f1c6").unwrap();
        assert_eq!(short.to_be_bytes()[26..], [0x1b, 0x1f, 0x9e, 0xd6, 0xf1, 0xc6]);
        assert_eq!(Uint256::from_hex("0x01").unwrap(), "01".parse::<Uint256>().unwrap());

        assert!(Uint256::from_hex("").unwrap().is_zero());
        assert!(Uint256::from_hex(&"f".repeat(65)).is_err());
        assert!(Uint256::from_hex("xy").is_err());
    }

    #[test]
    fn uint256_ordering_is_numeric() {
        let easy = Uint256::from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
        let hard = Uint256::from_hex("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
        assert!(hard < easy);
        assert!(Uint256::ZERO < hard);
    }

    #[test]
    fn uint256_from_compact_test() {
        assert_eq!(
            Uint256::from_compact(0x1e0ffff0).unwrap().to_string(),
            "00000ffff0000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            Uint256::from_compact(0x1e0377ae).unwrap().to_string(),
            "00000377ae000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            Uint256::from_compact(0x207fffff).unwrap().to_string(),
            "7fffff0000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(Uint256::from_compact(0x01003456), Some(Uint256::ZERO));
        assert_eq!(Uint256::from_compact(0x01123456), Some(Uint256::from_hex("12").unwrap()));
        assert_eq!(Uint256::from_compact(0x02123456), Some(Uint256::from_hex("1234").unwrap()));
        assert_eq!(Uint256::from_compact(0x03123456), Some(Uint256::from_hex("123456").unwrap()));
        // sign bit shifted out along with the low bytes
        assert_eq!(Uint256::from_compact(0x01803456), Some(Uint256::ZERO));
        assert_eq!(Uint256::from_compact(0x00923456), Some(Uint256::ZERO));
        assert_eq!(Uint256::from_compact(0x01fedcba), None);
        assert_eq!(Uint256::from_compact(0x04923456), None);
        assert_eq!(Uint256::from_compact(0xff123456), None);
    }
}
