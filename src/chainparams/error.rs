// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Chain parameter errors

use std::{error, fmt};

use hashes::hex;

use crate::consensus::params::DeploymentPos;
use crate::network::constants::Network;
use crate::util::key;

/// An error raised while building the parameters of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The constructed genesis block does not hash to the pinned value.
    GenesisMismatch {
        /// Network being built
        network: Network,
        /// Which genesis field disagrees, `"hash"` or `"merkle root"`
        field: &'static str,
        /// The pinned value
        expected: String,
        /// The value computed from the constructed block
        computed: String,
    },
    /// A hex literal or caller supplied hex string failed to decode.
    InvalidHex(hex::Error),
    /// A public key literal is not a valid curve point.
    InvalidPublicKey(secp256k1::Error),
    /// The signet challenge exceeds the maximum script size.
    SignetChallengeTooLarge(usize),
    /// A version bits override has a timeout that does not follow its start.
    InvalidVersionBitsParameters {
        /// Deployment being overridden
        deployment: DeploymentPos,
        /// Requested start time
        start_time: i64,
        /// Requested timeout
        timeout: i64,
    },
    /// The assembled consensus rules are not internally consistent.
    InvalidConsensusRules(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::GenesisMismatch { network, field, ref expected, ref computed } => write!(
                f,
                "{} genesis {} mismatch: expected {}, computed {}",
                network, field, expected, computed
            ),
            Error::InvalidHex(ref e) => write!(f, "invalid hex: {}", e),
            Error::InvalidPublicKey(ref e) => write!(f, "invalid public key: {}", e),
            Error::SignetChallengeTooLarge(len) => {
                write!(f, "signet challenge of {} bytes exceeds the script size limit", len)
            }
            Error::InvalidVersionBitsParameters { deployment, start_time, timeout } => write!(
                f,
                "invalid version bits parameters for {}: start {}, timeout {}",
                deployment, start_time, timeout
            ),
            Error::InvalidConsensusRules(msg) => write!(f, "invalid consensus rules: {}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidPublicKey(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::InvalidHex(e)
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::InvalidPublicKey(e)
    }
}

#[doc(hidden)]
impl From<key::Error> for Error {
    fn from(e: key::Error) -> Error {
        match e {
            key::Error::Secp256k1(e) => Error::InvalidPublicKey(e),
            key::Error::Hex(e) => Error::InvalidHex(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::consensus::params::DeploymentPos;
    use crate::network::constants::Network;

    #[test]
    fn display() {
        let e = Error::GenesisMismatch {
            network: Network::Testnet4,
            field: "hash",
            expected: "00".to_owned(),
            computed: "01".to_owned(),
        };
        assert_eq!(e.to_string(), "testnet4 genesis hash mismatch: expected 00, computed 01");

        let e = Error::InvalidVersionBitsParameters {
            deployment: DeploymentPos::Taproot,
            start_time: 10,
            timeout: 5,
        };
        assert_eq!(e.to_string(), "invalid version bits parameters for taproot: start 10, timeout 5");
        assert_eq!(
            Error::SignetChallengeTooLarge(10_001).to_string(),
            "signet challenge of 10001 bytes exceeds the script size limit"
        );
    }
}
