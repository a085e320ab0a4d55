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

//! Opcodes
//!
//! Script opcodes. Only the ones needed to build genesis scripts and the
//! signet challenge are named here.
//!

use std::fmt;

/// A script opcode.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All {
    code: u8,
}

impl All {
    /// Encodes the opcode as a byte.
    #[inline]
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for All {
    #[inline]
    fn from(code: u8) -> All {
        All { code }
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OP_")?;
        match *self {
            all::OP_PUSHBYTES_0 => f.write_str("0"),
            all::OP_PUSHDATA1 => f.write_str("PUSHDATA1"),
            all::OP_PUSHDATA2 => f.write_str("PUSHDATA2"),
            all::OP_PUSHDATA4 => f.write_str("PUSHDATA4"),
            all::OP_PUSHNUM_NEG1 => f.write_str("PUSHNUM_NEG1"),
            All { code: x } if x >= all::OP_PUSHNUM_1.code && x <= all::OP_PUSHNUM_16.code => {
                write!(f, "PUSHNUM_{}", x - all::OP_PUSHNUM_1.code + 1)
            }
            all::OP_CHECKSIG => f.write_str("CHECKSIG"),
            all::OP_CHECKMULTISIG => f.write_str("CHECKMULTISIG"),
            All { code: x } if x < all::OP_PUSHDATA1.code => write!(f, "PUSHBYTES_{}", x),
            All { code: x } => write!(f, "UNKNOWN_{:02x}", x),
        }
    }
}

/// Named opcodes.
pub mod all {
    use super::All;

    /// Push an empty array onto the stack
    pub const OP_PUSHBYTES_0: All = All { code: 0x00 };
    /// Push an empty array onto the stack
    pub const OP_0: All = OP_PUSHBYTES_0;
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: All = All { code: 0x4c };
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: All = All { code: 0x4d };
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA4: All = All { code: 0x4e };
    /// Push the array [0x81] onto the stack
    pub const OP_PUSHNUM_NEG1: All = All { code: 0x4f };
    /// Push the array [0x01] onto the stack
    pub const OP_PUSHNUM_1: All = All { code: 0x51 };
    /// Push the array [0x10] onto the stack
    pub const OP_PUSHNUM_16: All = All { code: 0x60 };
    /// Pop a public key and signature and validate the signature
    pub const OP_CHECKSIG: All = All { code: 0xac };
    /// Pop N public keys, M signatures and a dummy, validate M of N signatures
    pub const OP_CHECKMULTISIG: All = All { code: 0xae };
}
