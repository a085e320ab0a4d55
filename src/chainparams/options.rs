// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Options accepted by the signet and regtest constructors.

use std::collections::BTreeMap;

use hashes::hex::FromHex;

use crate::chainparams::Error;
use crate::consensus::params::{Bip9Deployment, BuriedDeployment, DeploymentPos};

/// Options of a signet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignetOptions {
    /// Challenge script blocks must satisfy; `None` selects the default signet.
    pub challenge: Option<Vec<u8>>,
    /// DNS seeds replacing the built-in (empty) list.
    pub seeds: Option<Vec<String>>,
}

impl SignetOptions {
    /// Sets the challenge script.
    pub fn with_challenge(mut self, challenge: Vec<u8>) -> SignetOptions {
        self.challenge = Some(challenge);
        self
    }

    /// Sets the challenge script from hex.
    pub fn with_challenge_hex(self, challenge: &str) -> Result<SignetOptions, Error> {
        let challenge = Vec::<u8>::from_hex(challenge)?;
        Ok(self.with_challenge(challenge))
    }

    /// Sets the DNS seeds.
    pub fn with_seeds<I, S>(mut self, seeds: I) -> SignetOptions
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seeds = Some(seeds.into_iter().map(Into::into).collect());
        self
    }
}

/// Replacement start time, timeout and minimum activation height of a
/// version bits deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionBitsParameters {
    /// Start time, or one of the [`Bip9Deployment`] sentinels
    pub start_time: i64,
    /// Timeout, or [`Bip9Deployment::NO_TIMEOUT`]
    pub timeout: i64,
    /// Minimum activation height
    pub min_activation_height: u32,
}

impl VersionBitsParameters {
    /// Checks the pair the way [`Bip9Deployment::has_valid_window`] does.
    pub(crate) fn validate(&self, deployment: DeploymentPos) -> Result<(), Error> {
        let candidate = Bip9Deployment {
            bit: 0,
            start_time: self.start_time,
            timeout: self.timeout,
            min_activation_height: self.min_activation_height,
        };
        if candidate.has_valid_window() {
            Ok(())
        } else {
            Err(Error::InvalidVersionBitsParameters {
                deployment,
                start_time: self.start_time,
                timeout: self.timeout,
            })
        }
    }
}

/// Options of a regtest chain.
///
/// The builder methods insert into the override maps, so a second override
/// of the same key replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegTestOptions {
    /// Activation heights replacing the defaults of buried deployments.
    pub activation_heights: BTreeMap<BuriedDeployment, u32>,
    /// Replacement parameters of version bits deployments.
    pub version_bits_parameters: BTreeMap<DeploymentPos, VersionBitsParameters>,
    /// Prune after 100 blocks instead of 1000.
    pub fastprune: bool,
    /// Enforce the BIP94 timewarp rules.
    pub enforce_bip94: bool,
}

impl RegTestOptions {
    /// Overrides the activation height of a buried deployment.
    pub fn with_activation_height(mut self, dep: BuriedDeployment, height: u32) -> RegTestOptions {
        self.activation_heights.insert(dep, height);
        self
    }

    /// Overrides the parameters of a version bits deployment.
    pub fn with_version_bits(mut self, pos: DeploymentPos, params: VersionBitsParameters) -> RegTestOptions {
        self.version_bits_parameters.insert(pos, params);
        self
    }

    /// Enables fast pruning.
    pub fn with_fastprune(mut self, fastprune: bool) -> RegTestOptions {
        self.fastprune = fastprune;
        self
    }

    /// Enables BIP94 enforcement.
    pub fn with_enforce_bip94(mut self, enforce: bool) -> RegTestOptions {
        self.enforce_bip94 = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{RegTestOptions, SignetOptions, VersionBitsParameters};
    use crate::chainparams::Error;
    use crate::consensus::params::{Bip9Deployment, BuriedDeployment, DeploymentPos};

    #[test]
    fn signet_builders() {
        let opts = SignetOptions::default().with_challenge_hex("51").unwrap().with_seeds(vec!["seed.example.org"]);
        assert_eq!(opts.challenge, Some(vec![0x51]));
        assert_eq!(opts.seeds, Some(vec!["seed.example.org".to_owned()]));

        match SignetOptions::default().with_challenge_hex("5") {
            Err(Error::InvalidHex(_)) => {}
            x => panic!("unexpected: {:?}", x),
        }
        match SignetOptions::default().with_challenge_hex("zz") {
            Err(Error::InvalidHex(_)) => {}
            x => panic!("unexpected: {:?}", x),
        }
    }

    #[test]
    fn regtest_last_write_wins() {
        let opts = RegTestOptions::default()
            .with_activation_height(BuriedDeployment::Segwit, 10)
            .with_activation_height(BuriedDeployment::Csv, 20)
            .with_activation_height(BuriedDeployment::Segwit, 30);
        assert_eq!(opts.activation_heights.len(), 2);
        assert_eq!(opts.activation_heights[&BuriedDeployment::Segwit], 30);
        assert_eq!(opts.activation_heights[&BuriedDeployment::Csv], 20);
    }

    #[test]
    fn version_bits_validation() {
        let ok = VersionBitsParameters { start_time: 100, timeout: 200, min_activation_height: 0 };
        assert!(ok.validate(DeploymentPos::TestDummy).is_ok());
        let sentinel = VersionBitsParameters {
            start_time: Bip9Deployment::NEVER_ACTIVE,
            timeout: Bip9Deployment::NO_TIMEOUT,
            min_activation_height: 0,
        };
        assert!(sentinel.validate(DeploymentPos::Taproot).is_ok());
        let backwards = VersionBitsParameters { start_time: 200, timeout: 100, min_activation_height: 0 };
        assert_eq!(
            backwards.validate(DeploymentPos::Taproot),
            Err(Error::InvalidVersionBitsParameters {
                deployment: DeploymentPos::Taproot,
                start_time: 200,
                timeout: 100,
            })
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn signet_options_from_json() {
        let json = r#"{"challenge": [81], "seeds": ["seed.example.org"]}"#;
        let opts: SignetOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts, SignetOptions::default().with_challenge(vec![0x51]).with_seeds(vec!["seed.example.org"]));

        let json = r#"{"activation_heights": {}, "version_bits_parameters": {}, "fastprune": true, "enforce_bip94": false}"#;
        let opts: RegTestOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts, RegTestOptions::default().with_fastprune(true));
    }
}
