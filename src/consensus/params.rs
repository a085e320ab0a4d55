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

//! Consensus parameters
//!
//! This module provides the rule set that influences chain consensus on a
//! given network: proof-of-work bounds, version bits deployments, buried
//! activation heights and the historical script verification exceptions.
//!

use std::collections::BTreeMap;
use std::{fmt, ops};

use crate::hash_types::BlockHash;
use crate::network::constants::Network;
use crate::util::uint::Uint256;

/// Highest bit a version bits deployment may signal on.
pub const MAX_VERSION_BIT: u8 = 28;

/// Number of version bits deployments every network carries.
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 2;

/// Rule changes activated by height only, long after their signalling
/// period ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BuriedDeployment {
    /// BIP34: block height in coinbase.
    HeightInCb,
    /// BIP65: OP_CHECKLOCKTIMEVERIFY.
    Cltv,
    /// BIP66: strict DER signatures.
    DerSig,
    /// BIP68, BIP112 and BIP113: relative lock times.
    Csv,
    /// BIP141 and BIP143: segregated witness.
    Segwit,
}

/// Slots of the version bits deployment table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeploymentPos {
    /// Dummy deployment used to exercise the signalling machinery.
    TestDummy,
    /// BIPs 340-342.
    Taproot,
}

impl DeploymentPos {
    /// All deployment slots, in table order.
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] =
        [DeploymentPos::TestDummy, DeploymentPos::Taproot];

    /// Index of this deployment in the deployment table.
    pub fn index(self) -> usize {
        match self {
            DeploymentPos::TestDummy => 0,
            DeploymentPos::Taproot => 1,
        }
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Taproot => "taproot",
        })
    }
}

/// Parameters of one BIP9 style deployment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bip9Deployment {
    /// Bit position to select the particular bit in the block version.
    pub bit: u8,
    /// Start MedianTime for version bits miner confirmation. Can be a date in the past.
    pub start_time: i64,
    /// Timeout/expiry MedianTime for the deployment attempt.
    pub timeout: i64,
    /// If lock in occurs, delay activation until at least this block height.
    pub min_activation_height: u32,
}

impl Bip9Deployment {
    /// Start time that marks the deployment as active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Start time that disables the deployment entirely.
    pub const NEVER_ACTIVE: i64 = -2;
    /// Timeout meaning the deployment never expires.
    pub const NO_TIMEOUT: i64 = i64::MAX;

    /// A deployment that can never activate.
    pub const fn never_active(bit: u8) -> Bip9Deployment {
        Bip9Deployment {
            bit,
            start_time: Bip9Deployment::NEVER_ACTIVE,
            timeout: Bip9Deployment::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }

    /// A deployment enforced from the genesis block on.
    pub const fn always_active(bit: u8) -> Bip9Deployment {
        Bip9Deployment {
            bit,
            start_time: Bip9Deployment::ALWAYS_ACTIVE,
            timeout: Bip9Deployment::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }

    /// Whether the deployment is disabled.
    pub fn is_never_active(&self) -> bool {
        self.start_time == Bip9Deployment::NEVER_ACTIVE
    }

    /// Whether the deployment is enforced unconditionally.
    pub fn is_always_active(&self) -> bool {
        self.start_time == Bip9Deployment::ALWAYS_ACTIVE
    }

    /// Checks the start and timeout pair: sentinels are accepted as-is, a
    /// concrete start must precede a finite timeout.
    pub fn has_valid_window(&self) -> bool {
        match self.start_time {
            Bip9Deployment::ALWAYS_ACTIVE | Bip9Deployment::NEVER_ACTIVE => true,
            start if start < 0 => false,
            start => self.timeout == Bip9Deployment::NO_TIMEOUT || self.timeout > start,
        }
    }
}

/// Script verification flags that a block may be exempted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptVerifyFlags(u32);

impl ScriptVerifyFlags {
    /// NONE means no verification flags apply.
    pub const NONE: ScriptVerifyFlags = ScriptVerifyFlags(0);
    /// Evaluate P2SH subscripts (BIP16).
    pub const P2SH: ScriptVerifyFlags = ScriptVerifyFlags(1 << 0);
    /// Passing a non-strict-DER signature or an undefined hashtype is a failure.
    pub const STRICTENC: ScriptVerifyFlags = ScriptVerifyFlags(1 << 1);
    /// Passing a non-strict-DER signature is a failure (BIP66).
    pub const DERSIG: ScriptVerifyFlags = ScriptVerifyFlags(1 << 2);
    /// Signatures must use the low S value.
    pub const LOW_S: ScriptVerifyFlags = ScriptVerifyFlags(1 << 3);
    /// The dummy CHECKMULTISIG element must be empty (BIP147).
    pub const NULLDUMMY: ScriptVerifyFlags = ScriptVerifyFlags(1 << 4);
    /// Verify OP_CHECKLOCKTIMEVERIFY (BIP65).
    pub const CHECKLOCKTIMEVERIFY: ScriptVerifyFlags = ScriptVerifyFlags(1 << 9);
    /// Verify OP_CHECKSEQUENCEVERIFY (BIP112).
    pub const CHECKSEQUENCEVERIFY: ScriptVerifyFlags = ScriptVerifyFlags(1 << 10);
    /// Verify witness programs (BIP141).
    pub const WITNESS: ScriptVerifyFlags = ScriptVerifyFlags(1 << 11);
    /// Verify taproot and tapscript spends (BIPs 341-342).
    pub const TAPROOT: ScriptVerifyFlags = ScriptVerifyFlags(1 << 17);

    // NOTE: When adding new flags, remember to update the Display impl accordingly.

    /// Union of two flag sets, usable in constants.
    pub const fn union(self, other: ScriptVerifyFlags) -> ScriptVerifyFlags {
        ScriptVerifyFlags(self.0 | other.0)
    }

    /// Check whether all of `flags` are included in this one.
    pub fn has(&self, flags: ScriptVerifyFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of these flags.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScriptVerifyFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ScriptVerifyFlags::NONE {
            return write!(f, "ScriptVerifyFlags(NONE)");
        }

        let mut flags = *self;
        let mut first = true;
        macro_rules! write_flag {
            ($f:ident) => {
                if flags.has(ScriptVerifyFlags::$f) {
                    if !first {
                        write!(f, "|")?;
                    }
                    first = false;
                    write!(f, stringify!($f))?;
                    flags.0 &= !ScriptVerifyFlags::$f.0;
                }
            }
        }
        write!(f, "ScriptVerifyFlags(")?;
        write_flag!(P2SH);
        write_flag!(STRICTENC);
        write_flag!(DERSIG);
        write_flag!(LOW_S);
        write_flag!(NULLDUMMY);
        write_flag!(CHECKLOCKTIMEVERIFY);
        write_flag!(CHECKSEQUENCEVERIFY);
        write_flag!(WITNESS);
        write_flag!(TAPROOT);
        // If there are unknown flags left, we append them in hex.
        if flags != ScriptVerifyFlags::NONE {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "0x{:x}", flags.0)?;
        }
        write!(f, ")")
    }
}

impl From<u32> for ScriptVerifyFlags {
    fn from(f: u32) -> Self {
        ScriptVerifyFlags(f)
    }
}

impl ops::BitOr for ScriptVerifyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl ops::BitOrAssign for ScriptVerifyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Blocks between halvings of the block subsidy.
    pub subsidy_halving_interval: u32,
    /// Blocks accepted even though they violate a script rule introduced
    /// after they were mined, mapped to the flags they are verified with.
    pub script_flag_exceptions: BTreeMap<BlockHash, ScriptVerifyFlags>,
    /// Block height at which BIP34 becomes active.
    pub bip34_height: u32,
    /// Hash of the block at `bip34_height`.
    pub bip34_hash: BlockHash,
    /// Block height at which BIP65 becomes active.
    pub bip65_height: u32,
    /// Block height at which BIP66 becomes active.
    pub bip66_height: u32,
    /// Block height at which CSV (BIP68, BIP112 and BIP113) becomes active.
    pub csv_height: u32,
    /// Block height at which Segwit (BIP141, BIP143 and BIP147) becomes active.
    pub segwit_height: u32,
    /// Don't warn about unknown BIP9 activations below this height.
    pub min_bip9_warning_height: u32,
    /// Minimum blocks including miner confirmation of the total of
    /// `miner_confirmation_window` blocks in a retargeting period, which is
    /// also used for BIP9 deployments.
    pub rule_change_activation_threshold: u32,
    /// Number of blocks with the same set of rules.
    pub miner_confirmation_window: u32,
    /// The version bits deployment table, indexed by [`DeploymentPos::index`].
    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
    /// Proof of work limit value. It contains the lowest possible difficulty.
    pub pow_limit: Uint256,
    /// Determines whether minimal difficulty may be used for blocks or not.
    pub allow_min_difficulty_blocks: bool,
    /// Enforce BIP94 timewarp attack mitigation. On testnet4 this also
    /// enforces the block storm mitigation.
    pub enforce_bip94: bool,
    /// Determines whether retargeting is disabled for this network or not.
    pub no_pow_retargeting: bool,
    /// Expected amount of time to mine one block, in seconds.
    pub pow_target_spacing: i64,
    /// Difficulty recalculation interval, in seconds.
    pub pow_target_timespan: i64,
    /// The best chain should have at least this much work.
    pub minimum_chain_work: Uint256,
    /// By default assume that the signatures in ancestors of this block are valid.
    pub default_assume_valid: BlockHash,
    /// If true, witness commitments contain a payload equal to a Signet
    /// signature paying to `signet_challenge`.
    pub signet_blocks: bool,
    /// The script blocks must satisfy on a signet.
    pub signet_challenge: Vec<u8>,
    /// Whether `signet_challenge` was supplied by the caller. A supplied
    /// challenge may be empty; the default one never is.
    pub custom_signet_challenge: bool,
    /// Hash of the genesis block.
    pub hash_genesis_block: BlockHash,
}

impl Params {
    /// Returns the deployment stored in the given slot.
    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    /// Height at which the given buried deployment is enforced.
    pub fn deployment_height(&self, dep: BuriedDeployment) -> u32 {
        match dep {
            BuriedDeployment::HeightInCb => self.bip34_height,
            BuriedDeployment::Cltv => self.bip65_height,
            BuriedDeployment::DerSig => self.bip66_height,
            BuriedDeployment::Csv => self.csv_height,
            BuriedDeployment::Segwit => self.segwit_height,
        }
    }

    /// Sets the activation height of the given buried deployment.
    pub(crate) fn set_deployment_height(&mut self, dep: BuriedDeployment, height: u32) {
        match dep {
            BuriedDeployment::HeightInCb => self.bip34_height = height,
            BuriedDeployment::Cltv => self.bip65_height = height,
            BuriedDeployment::DerSig => self.bip66_height = height,
            BuriedDeployment::Csv => self.csv_height = height,
            BuriedDeployment::Segwit => self.segwit_height = height,
        }
    }

    /// Calculates the number of blocks between difficulty adjustments.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Looks up the historical script verification exception for a block.
    pub fn script_flag_exception(&self, block_hash: &BlockHash) -> Option<ScriptVerifyFlags> {
        self.script_flag_exceptions.get(block_hash).copied()
    }

    /// Checks the internal consistency of the rule set.
    ///
    /// Returns a description of the first violated rule.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.rule_change_activation_threshold > self.miner_confirmation_window {
            return Err("rule change activation threshold exceeds the confirmation window");
        }
        if self.pow_target_spacing <= 0 || self.pow_target_timespan < self.pow_target_spacing {
            return Err("proof of work timespan must cover at least one block spacing");
        }
        if self.subsidy_halving_interval == 0 {
            return Err("subsidy halving interval must be positive");
        }
        for (n, dep) in self.deployments.iter().enumerate() {
            if dep.bit > MAX_VERSION_BIT {
                return Err("deployment bit out of range");
            }
            if !dep.has_valid_window() {
                return Err("deployment timeout does not follow its start time");
            }
            if dep.is_never_active() {
                continue;
            }
            let clash = self.deployments[n + 1..]
                .iter()
                .any(|other| !other.is_never_active() && other.bit == dep.bit);
            if clash {
                return Err("two live deployments share a version bit");
            }
        }
        if self.signet_blocks {
            if self.signet_challenge.is_empty() && !self.custom_signet_challenge {
                return Err("signet blocks require a challenge");
            }
        } else if !self.signet_challenge.is_empty() || self.custom_signet_challenge {
            return Err("signet challenge set on a non-signet network");
        }
        Ok(())
    }
}
