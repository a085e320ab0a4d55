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

//! Amounts
//!
//! This module introduces the [Amount] type, an amount of base units as it
//! appears in transaction outputs.
//!

use std::fmt;
use std::io;
use std::ops;

use crate::consensus::encode::{self, Decodable, Encodable};

/// Number of base units in one coin.
pub const COIN_VALUE: u64 = 100_000_000;

/// An amount of base units.
///
/// Arithmetic panics on overflow like the primitive integers do; use the
/// `checked_` methods where the operands are not trusted.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);
    /// Exactly one base unit.
    pub const ONE_SAT: Amount = Amount(1);
    /// Exactly one coin.
    pub const ONE_COIN: Amount = Amount(COIN_VALUE);

    /// Create an [Amount] with base unit precision.
    pub const fn from_sat(satoshi: u64) -> Amount {
        Amount(satoshi)
    }

    /// Create an [Amount] of whole coins, `None` on overflow.
    pub fn from_coins(coins: u64) -> Option<Amount> {
        coins.checked_mul(COIN_VALUE).map(Amount)
    }

    /// Get the number of base units in this [Amount].
    pub fn as_sat(self) -> u64 {
        self.0
    }

    /// Checked addition.
    /// Returns [None] if overflow occurred.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked subtraction.
    /// Returns [None] if overflow occurred.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Checked multiplication.
    /// Returns [None] if overflow occurred.
    pub fn checked_mul(self, rhs: u64) -> Option<Amount> {
        self.0.checked_mul(rhs).map(Amount)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Amount({}.{:08})", self.0 / COIN_VALUE, self.0 % COIN_VALUE)
    }
}

impl ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        self.checked_add(rhs).expect("Amount addition error")
    }
}

impl ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        self.checked_sub(rhs).expect("Amount subtraction error")
    }
}

impl Encodable for Amount {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, encode::Error> {
        self.0.consensus_encode(s)
    }
}

impl Decodable for Amount {
    #[inline]
    fn consensus_decode<D: io::Read>(d: D) -> Result<Self, encode::Error> {
        Ok(Amount(Decodable::consensus_decode(d)?))
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, COIN_VALUE};
    use crate::consensus::encode::serialize;

    #[test]
    fn coins_and_sats() {
        let reward = Amount::from_coins(5_000_000).unwrap();
        assert_eq!(reward.as_sat(), 5_000_000 * COIN_VALUE);
        assert_eq!(reward, Amount::from_sat(500_000_000_000_000));
        assert_eq!(Amount::from_coins(u64::max_value()), None);
        assert_eq!(format!("{:?}", Amount::from_sat(150_000_001)), "Amount(1.50000001)");
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(Amount::ONE_COIN.checked_sub(Amount::ONE_SAT), Some(Amount::from_sat(COIN_VALUE - 1)));
        assert_eq!(Amount::ZERO.checked_sub(Amount::ONE_SAT), None);
        assert_eq!(Amount::from_sat(u64::max_value()).checked_add(Amount::ONE_SAT), None);
        assert_eq!(Amount::ONE_COIN.checked_mul(3), Some(Amount::from_sat(3 * COIN_VALUE)));
        assert_eq!(Amount::ONE_COIN + Amount::ONE_SAT - Amount::ONE_COIN, Amount::ONE_SAT);
    }

    #[test]
    fn wire_form() {
        assert_eq!(serialize(&Amount::from_coins(5_000_000).unwrap()), vec![0u8, 0x40, 0x63, 0x52, 0xbf, 0xc6, 0x01, 0x00]);
    }

    #[test]
    #[should_panic]
    fn add_overflow_panics() {
        let _ = Amount::from_sat(u64::max_value()) + Amount::ONE_SAT;
    }
}
