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

//! Internal macros
//!
//! Macros meant to be used inside the library.
//!

/// Implements `Encodable` and `Decodable` for a struct by encoding its fields in order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::Encodable for $thing {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                mut s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                let mut len = 0;
                $(len += $crate::consensus::Encodable::consensus_encode(&self.$field, &mut s)?;)+
                Ok(len)
            }
        }

        impl $crate::consensus::Decodable for $thing {
            #[inline]
            fn consensus_decode<D: ::std::io::Read>(
                mut d: D,
            ) -> Result<$thing, $crate::consensus::encode::Error> {
                Ok($thing {
                    $($field: $crate::consensus::Decodable::consensus_decode(&mut d)?),+
                })
            }
        }
    );
}

/// Defines a 32-byte double-SHA256 hash newtype.
///
/// The bytes are held in the order the hash function produces them; `Display`
/// and `FromStr` use the reversed order block explorers show. With serde the
/// hash is that hex string in human-readable formats and the raw bytes
/// otherwise.
macro_rules! sha256d_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Hashes `data` with double SHA256.
            pub fn hash(data: &[u8]) -> $name {
                use $crate::hashes::Hash;
                $name($crate::hashes::sha256d::Hash::hash(data).into_inner())
            }

            /// Wraps raw hash bytes, in the order the hash function produced them.
            pub const fn from_inner(inner: [u8; 32]) -> $name {
                $name(inner)
            }

            /// Returns the raw hash bytes.
            pub fn into_inner(self) -> [u8; 32] {
                self.0
            }

            /// Borrows the raw hash bytes.
            pub fn as_inner(&self) -> &[u8; 32] {
                &self.0
            }

            /// The all-zeros value, used as the "no such hash" placeholder.
            pub const fn all_zeros() -> $name {
                $name([0u8; 32])
            }

            /// Whether every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::hashes::hex::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use $crate::hashes::hex::FromHex;
                let bytes = Vec::<u8>::from_hex(s)?;
                if bytes.len() != 32 {
                    return Err($crate::hashes::hex::Error::InvalidLength(32, bytes.len()));
                }
                let mut ret = [0u8; 32];
                for (n, byte) in bytes.iter().rev().enumerate() {
                    ret[n] = *byte;
                }
                Ok($name(ret))
            }
        }

        impl ::std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                for byte in self.0.iter().rev() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::LowerHex::fmt(self, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}({:x})", stringify!($name), self)
            }
        }

        impl $crate::consensus::Encodable for $name {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                $crate::consensus::Encodable::consensus_encode(&self.0, s)
            }
        }

        impl $crate::consensus::Decodable for $name {
            #[inline]
            fn consensus_decode<D: ::std::io::Read>(
                d: D,
            ) -> Result<$name, $crate::consensus::encode::Error> {
                Ok($name($crate::consensus::Decodable::consensus_decode(d)?))
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                if s.is_human_readable() {
                    s.collect_str(self)
                } else {
                    s.serialize_bytes(&self.0)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<$name, D::Error> {
                struct BytesVisitor;

                impl<'de> ::serde::de::Visitor<'de> for BytesVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        f.write_str("32 hash bytes")
                    }

                    fn visit_bytes<E: ::serde::de::Error>(self, v: &[u8]) -> Result<$name, E> {
                        if v.len() != 32 {
                            return Err(E::invalid_length(v.len(), &self));
                        }
                        let mut ret = [0u8; 32];
                        ret.copy_from_slice(v);
                        Ok($name(ret))
                    }
                }

                if d.is_human_readable() {
                    let s: ::std::string::String = ::serde::Deserialize::deserialize(d)?;
                    <$name as ::std::str::FromStr>::from_str(&s).map_err(::serde::de::Error::custom)
                } else {
                    d.deserialize_bytes(BytesVisitor)
                }
            }
        }
    };
}

/// Implements `Encodable`/`Decodable` for a vector of consensus-encodable items.
macro_rules! impl_vec {
    ($type: ty) => {
        impl $crate::consensus::Encodable for Vec<$type> {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                mut s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                let mut len = 0;
                len += $crate::consensus::Encodable::consensus_encode(
                    &$crate::consensus::encode::VarInt(self.len() as u64),
                    &mut s,
                )?;
                for c in self.iter() {
                    len += $crate::consensus::Encodable::consensus_encode(c, &mut s)?;
                }
                Ok(len)
            }
        }

        impl $crate::consensus::Decodable for Vec<$type> {
            #[inline]
            fn consensus_decode<D: ::std::io::Read>(
                mut d: D,
            ) -> Result<Self, $crate::consensus::encode::Error> {
                let len = <$crate::consensus::encode::VarInt as $crate::consensus::Decodable>
                    ::consensus_decode(&mut d)?.0;
                let byte_size = (len as usize)
                    .checked_mul(::std::mem::size_of::<$type>())
                    .ok_or($crate::consensus::encode::Error::ParseFailed("Invalid length"))?;
                if byte_size > $crate::consensus::encode::MAX_VEC_SIZE {
                    return Err($crate::consensus::encode::Error::OversizedVectorAllocation {
                        requested: byte_size,
                        max: $crate::consensus::encode::MAX_VEC_SIZE,
                    });
                }
                let mut ret = Vec::with_capacity(len as usize);
                for _ in 0..len {
                    ret.push($crate::consensus::Decodable::consensus_decode(&mut d)?);
                }
                Ok(ret)
            }
        }
    };
}
