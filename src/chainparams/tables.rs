// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Literal parameters of every network.
//!
//! Everything that differs between networks lives in these tables, so the
//! security relevant deltas can be reviewed side by side. Hashes are written
//! in display (reversed) order; an empty string stands for the zero hash.

use crate::chainparams::ChainTxData;
use crate::consensus::params::{Bip9Deployment, ScriptVerifyFlags};
use crate::network::constants::{Magic, Network};

/// Script paid by the genesis coinbase output.
pub(crate) enum GenesisOutput {
    /// Pay to the standard uncompressed genesis key.
    StandardKey,
    /// Pay to raw bytes that need not be a valid key.
    RawKey(&'static [u8]),
}

pub(crate) struct GenesisTable {
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub output: GenesisOutput,
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

pub(crate) struct ConsensusTable {
    pub subsidy_halving_interval: u32,
    pub script_flag_exceptions: &'static [(&'static str, ScriptVerifyFlags)],
    pub bip34_height: u32,
    pub bip34_hash: &'static str,
    pub bip65_height: u32,
    pub bip66_height: u32,
    pub csv_height: u32,
    pub segwit_height: u32,
    pub min_bip9_warning_height: u32,
    pub pow_limit: &'static str,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub allow_min_difficulty_blocks: bool,
    pub enforce_bip94: bool,
    pub no_pow_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Bip9Deployment; 2],
    pub minimum_chain_work: &'static str,
    pub default_assume_valid: &'static str,
}

pub(crate) struct AssumeutxoTable {
    pub height: u32,
    pub hash_serialized: &'static str,
    pub chain_tx_count: u64,
    pub blockhash: &'static str,
}

pub(crate) struct ChainTable {
    pub network: Network,
    /// `None` when the magic is derived from the signet challenge.
    pub magic: Option<Magic>,
    pub default_port: u16,
    pub prune_after_height: u64,
    pub assumed_blockchain_size: u64,
    pub assumed_chain_state_size: u64,
    pub consensus: ConsensusTable,
    pub genesis: GenesisTable,
    pub base58_prefixes: [&'static [u8]; 5],
    pub bech32_hrp: &'static str,
    pub checkpoints: &'static [(u32, &'static str)],
    pub assumeutxo: &'static [AssumeutxoTable],
    pub chain_tx_data: ChainTxData,
    pub default_consistency_checks: bool,
    pub is_mockable_chain: bool,
}

const MAIN_BASE58: [&[u8]; 5] = [&[25], &[15], &[128], &[0x04, 0x88, 0xB2, 0x1E], &[0x04, 0x88, 0xAD, 0xE4]];
const TEST_BASE58: [&[u8]; 5] = [&[111], &[196], &[239], &[0x04, 0x35, 0x87, 0xCF], &[0x04, 0x35, 0x83, 0x94]];

const MAIN_TAPROOT_START: i64 = 1737409058;
const MAIN_DUMMY_START: i64 = 1737429115;

/// The challenge used when a signet is started without one.
pub(crate) const DEFAULT_SIGNET_CHALLENGE: &str = "5121903a57b3aae64bf6aad80e0cd44a336cb8d4235a30f3421b731b8719f2227b3c772ab16810e2269eb097a452d349bc0b094577d059cf160c5b36e0ae40220856211baa828a20d00d2e2d9ffc637a720e7462bc82c9f272d361972cb39542f9c38b4bbfceb7919c80cef91c8940ac27f7fc6430c7c49a4b58dadec061c5ed5c221e52ae";

const NO_TX_DATA: ChainTxData = ChainTxData { time: 0, tx_count: 0, tx_rate: 0.0 };

pub(crate) static MAIN: ChainTable = ChainTable {
    network: Network::Main,
    magic: Some(Magic::MAIN),
    default_port: 7333,
    prune_after_height: 100_000,
    assumed_blockchain_size: 0,
    assumed_chain_state_size: 0,
    consensus: ConsensusTable {
        subsidy_halving_interval: 5000,
        script_flag_exceptions: &[
            // BIP16 exception
            ("00000177633cc307cd7f8630cf89dea7bea821a426ef28022423cbbe518aa546", ScriptVerifyFlags::NONE),
            // Taproot exception
            (
                "000000028c03020ddf3d4772c1bdb98f161b06a0eb879fa1d4665bcc62dcb0fe",
                ScriptVerifyFlags::P2SH.union(ScriptVerifyFlags::WITNESS),
            ),
        ],
        bip34_height: 227931,
        bip34_hash: "0000086bf866c6c7054b748b9fc269c28c2d4654f720e7768b1e140b287debde",
        bip65_height: 388,
        bip66_height: 363,
        csv_height: 419,
        segwit_height: 481,
        // segwit activation height + miner confirmation window
        min_bip9_warning_height: 483,
        pow_limit: "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        pow_target_timespan: 144 * 60,
        pow_target_spacing: 60,
        allow_min_difficulty_blocks: false,
        enforce_bip94: false,
        no_pow_retargeting: false,
        rule_change_activation_threshold: 90,
        miner_confirmation_window: 100,
        deployments: [
            Bip9Deployment {
                bit: 1,
                start_time: MAIN_DUMMY_START,
                timeout: MAIN_DUMMY_START + 3600,
                min_activation_height: 50,
            },
            Bip9Deployment {
                bit: 2,
                start_time: MAIN_TAPROOT_START,
                timeout: MAIN_TAPROOT_START + 18000,
                min_activation_height: 1000,
            },
        ],
        minimum_chain_work: "00000000000000000000000000000000000000000000000000001b1f9ed6f1c6",
        // 50888
        default_assume_valid: "00000001eba2d16d93dd5638d8d914bea08f44340cf1ead81c3b3671392e3188",
    },
    genesis: GenesisTable {
        time: 1735689606,
        nonce: 73204,
        bits: 0x1e0ffff0,
        version: 1,
        output: GenesisOutput::StandardKey,
        hash: "000000722d67deca36a08defdba9de43ffd698198bf1a9876b690475e14eb0b5",
        merkle_root: "6b871c79b17729663ef8c6da282cdf411481cf22dd92f0721e88c4ce76f2d6ae",
    },
    base58_prefixes: MAIN_BASE58,
    bech32_hrp: "bs",
    checkpoints: &[
        (0, "000000722d67deca36a08defdba9de43ffd698198bf1a9876b690475e14eb0b5"),
        (10000, "00000005daf15f9f3be63b7d2da8b06878c6f242544b0290b823225f179be6d0"),
        (37820, "0000000388ea37d1328b6ceaa268a414bdc6ae532cd3435ba0448b21a02f6bde"),
        (50892, "00000001eba2d16d93dd5638d8d914bea08f44340cf1ead81c3b3671392e3188"),
    ],
    assumeutxo: &[AssumeutxoTable {
        height: 37_817,
        hash_serialized: "f5bfbfe09dc9d04e248cd9c72819533d022f250c9a4add3afa7428f39190205d",
        chain_tx_count: 114629,
        blockhash: "00000004d5055e3f69a083c997b78f8a1b148979cfca7d07c30813aa243ec443",
    }],
    chain_tx_data: ChainTxData {
        time: 1740654297,
        tx_count: 127836,
        tx_rate: 0.01541361685625738,
    },
    default_consistency_checks: false,
    is_mockable_chain: false,
};

pub(crate) static TEST: ChainTable = ChainTable {
    network: Network::Test,
    magic: Some(Magic::TEST),
    default_port: 17333,
    prune_after_height: 1000,
    assumed_blockchain_size: 93,
    assumed_chain_state_size: 19,
    consensus: ConsensusTable {
        subsidy_halving_interval: 5000,
        // BIP16 exception, never filled in
        script_flag_exceptions: &[("", ScriptVerifyFlags::NONE)],
        bip34_height: 227,
        bip34_hash: "",
        bip65_height: 388,
        bip66_height: 363,
        csv_height: 419,
        segwit_height: 481,
        min_bip9_warning_height: 483,
        pow_limit: "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        pow_target_timespan: 144 * 60,
        pow_target_spacing: 60,
        allow_min_difficulty_blocks: true,
        enforce_bip94: false,
        no_pow_retargeting: false,
        rule_change_activation_threshold: 90,
        miner_confirmation_window: 100,
        deployments: [
            Bip9Deployment::never_active(2),
            Bip9Deployment {
                bit: 2,
                start_time: MAIN_TAPROOT_START,
                timeout: MAIN_TAPROOT_START + 18000,
                min_activation_height: 1000,
            },
        ],
        minimum_chain_work: "",
        default_assume_valid: "",
    },
    genesis: GenesisTable {
        time: 1735689606,
        nonce: 73204,
        bits: 0x1e0ffff0,
        version: 1,
        output: GenesisOutput::StandardKey,
        hash: "000000722d67deca36a08defdba9de43ffd698198bf1a9876b690475e14eb0b5",
        merkle_root: "6b871c79b17729663ef8c6da282cdf411481cf22dd92f0721e88c4ce76f2d6ae",
    },
    base58_prefixes: TEST_BASE58,
    bech32_hrp: "btb",
    checkpoints: &[(546, "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70")],
    assumeutxo: &[],
    chain_tx_data: ChainTxData {
        time: 1723613341,
        tx_count: 187917082,
        tx_rate: 3.265051477698455,
    },
    default_consistency_checks: false,
    is_mockable_chain: false,
};

pub(crate) static TESTNET4: ChainTable = ChainTable {
    network: Network::Testnet4,
    magic: Some(Magic::TESTNET4),
    default_port: 47333,
    prune_after_height: 1000,
    assumed_blockchain_size: 1,
    assumed_chain_state_size: 0,
    consensus: ConsensusTable {
        subsidy_halving_interval: 5000,
        script_flag_exceptions: &[],
        bip34_height: 1,
        bip34_hash: "",
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 1,
        min_bip9_warning_height: 0,
        pow_limit: "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        pow_target_timespan: 144 * 60,
        pow_target_spacing: 60,
        allow_min_difficulty_blocks: true,
        enforce_bip94: true,
        no_pow_retargeting: false,
        rule_change_activation_threshold: 90,
        miner_confirmation_window: 100,
        deployments: [Bip9Deployment::never_active(1), Bip9Deployment::always_active(2)],
        minimum_chain_work: "",
        default_assume_valid: "",
    },
    genesis: GenesisTable {
        time: 1735689727,
        nonce: 167876,
        bits: 0x1e0ffff0,
        version: 1,
        output: GenesisOutput::RawKey(&[0u8; 33]),
        hash: "228d2a315e7e50b4f68950f3653a01d098c240f02a293353bb05b8aafcfbfff5",
        merkle_root: "c880292c273764dd51d989dacb81c768de2404ac16aa9bb663f5e320edfa66f2",
    },
    base58_prefixes: TEST_BASE58,
    bech32_hrp: "btb",
    checkpoints: &[],
    assumeutxo: &[],
    chain_tx_data: ChainTxData {
        time: 1735689727,
        tx_count: 0,
        tx_rate: 0.0,
    },
    default_consistency_checks: false,
    is_mockable_chain: false,
};

/// Signet with the default challenge; a custom challenge resets the
/// bounds and sizes, see `NetworkParams::signet`.
pub(crate) static SIGNET: ChainTable = ChainTable {
    network: Network::Signet,
    magic: None,
    default_port: 38333,
    prune_after_height: 1000,
    assumed_blockchain_size: 5,
    assumed_chain_state_size: 1,
    consensus: ConsensusTable {
        subsidy_halving_interval: 210000,
        script_flag_exceptions: &[],
        bip34_height: 1,
        bip34_hash: "",
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 1,
        min_bip9_warning_height: 0,
        pow_limit: "00000377ae000000000000000000000000000000000000000000000000000000",
        pow_target_timespan: 2 * 60 * 60,
        pow_target_spacing: 60,
        allow_min_difficulty_blocks: false,
        enforce_bip94: false,
        no_pow_retargeting: false,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [Bip9Deployment::never_active(28), Bip9Deployment::always_active(2)],
        minimum_chain_work: "",
        default_assume_valid: "",
    },
    genesis: GenesisTable {
        time: 1735689688,
        nonce: 290527,
        bits: 0x1e0377ae,
        version: 1,
        output: GenesisOutput::StandardKey,
        hash: "0000024b2e9e97e9a6e41ff2457993352318d12018f36cdc5585eeb4bb670532",
        merkle_root: "6b871c79b17729663ef8c6da282cdf411481cf22dd92f0721e88c4ce76f2d6ae",
    },
    base58_prefixes: TEST_BASE58,
    bech32_hrp: "tbs",
    checkpoints: &[],
    assumeutxo: &[],
    chain_tx_data: ChainTxData {
        time: 1735689688,
        tx_count: 0,
        tx_rate: 0.0,
    },
    default_consistency_checks: false,
    is_mockable_chain: false,
};

/// Regtest before options are applied.
pub(crate) static REGTEST: ChainTable = ChainTable {
    network: Network::Regtest,
    magic: Some(Magic::REGTEST),
    default_port: 17444,
    prune_after_height: 1000,
    assumed_blockchain_size: 0,
    assumed_chain_state_size: 0,
    consensus: ConsensusTable {
        subsidy_halving_interval: 150,
        script_flag_exceptions: &[],
        // always active unless overridden
        bip34_height: 1,
        bip34_hash: "",
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height: 0,
        min_bip9_warning_height: 0,
        pow_limit: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        pow_target_timespan: 144 * 60,
        pow_target_spacing: 60,
        allow_min_difficulty_blocks: true,
        enforce_bip94: false,
        no_pow_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            Bip9Deployment {
                bit: 1,
                start_time: 0,
                timeout: Bip9Deployment::NO_TIMEOUT,
                min_activation_height: 0,
            },
            Bip9Deployment::always_active(2),
        ],
        minimum_chain_work: "",
        default_assume_valid: "",
    },
    genesis: GenesisTable {
        time: 1735689702,
        nonce: 3,
        bits: 0x207fffff,
        version: 1,
        output: GenesisOutput::StandardKey,
        hash: "361a9b4dbb07235de1548fab66057824f15415c407361f2a97a5e23f708fa154",
        merkle_root: "6b871c79b17729663ef8c6da282cdf411481cf22dd92f0721e88c4ce76f2d6ae",
    },
    base58_prefixes: TEST_BASE58,
    bech32_hrp: "bsrt",
    checkpoints: &[(0, "361a9b4dbb07235de1548fab66057824f15415c407361f2a97a5e23f708fa154")],
    assumeutxo: &[],
    chain_tx_data: NO_TX_DATA,
    default_consistency_checks: true,
    is_mockable_chain: true,
};

/// Sizes and statistics of a signet started with a custom challenge.
pub(crate) const CUSTOM_SIGNET_TX_DATA: ChainTxData = NO_TX_DATA;

#[cfg(test)]
mod tests {
    use super::{ChainTable, MAIN, REGTEST, SIGNET, TEST, TESTNET4};

    fn all() -> [&'static ChainTable; 5] {
        [&MAIN, &TEST, &TESTNET4, &SIGNET, &REGTEST]
    }

    #[test]
    fn checkpoints_strictly_increasing() {
        for table in all().iter() {
            for pair in table.checkpoints.windows(2) {
                assert!(pair[0].0 < pair[1].0, "{} checkpoints out of order", table.network);
            }
        }
    }

    #[test]
    fn literal_magics_are_distinct() {
        let magics: Vec<_> = all().iter().filter_map(|t| t.magic).collect();
        assert_eq!(magics.len(), 4);
        for (n, m) in magics.iter().enumerate() {
            assert!(!magics[n + 1..].contains(m));
        }
    }

    #[test]
    fn pow_limit_loosest_on_regtest() {
        for table in all().iter() {
            assert!(table.consensus.pow_limit <= REGTEST.consensus.pow_limit);
        }
    }
}
