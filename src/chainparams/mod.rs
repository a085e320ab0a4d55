// Copyright (c) 2025 The BitScript developers
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Network parameters
//!
//! [`NetworkParams`] bundles everything a node needs to know about one
//! BitScript network: its consensus rules, genesis block, magic, ports,
//! address prefixes, checkpoints and assume-utxo snapshots.
//!
//! Every network is built by the same routine from its literal table. The
//! genesis block is constructed from scratch and checked against the pinned
//! hash and merkle root; a mismatch is reported as
//! [`Error::GenesisMismatch`] and no parameters are returned.
//!
//! ```rust
//! use bitscript::chainparams::{NetworkParams, RegTestOptions};
//! use bitscript::consensus::params::BuriedDeployment;
//!
//! let opts = RegTestOptions::default().with_activation_height(BuriedDeployment::Segwit, 100);
//! let regtest = NetworkParams::regtest(opts).unwrap();
//! assert_eq!(regtest.consensus().segwit_height, 100);
//! assert_eq!(regtest.bech32_hrp(), "bsrt");
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use hashes::hex::{self, FromHex, ToHex};

use crate::blockdata::block::Block;
use crate::blockdata::constants::{
    create_genesis_block, genesis_reward, p2pk_script, standard_genesis_block, GENESIS_TIMESTAMP,
};
use crate::consensus::params::Params;
use crate::hash_types::{AssumeutxoHash, BlockHash, TxMerkleNode};
use crate::network::constants::{Magic, Network};
use crate::util::uint::Uint256;

mod error;
mod options;
mod tables;

pub use self::error::Error;
pub use self::options::{RegTestOptions, SignetOptions, VersionBitsParameters};

use self::tables::{ChainTable, ConsensusTable, GenesisOutput, GenesisTable};

/// Largest script, and therefore signet challenge, a node accepts.
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// Historical transaction statistics, used to estimate sync progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known number of transactions
    pub time: i64,
    /// Total number of transactions between genesis and that timestamp
    pub tx_count: u64,
    /// Estimated number of transactions per second after that timestamp
    pub tx_rate: f64,
}

/// Kinds of base58 prefixes a network defines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay to public key hash addresses
    PubkeyAddress,
    /// Pay to script hash addresses
    ScriptAddress,
    /// WIF private keys
    SecretKey,
    /// BIP32 extended public keys
    ExtPublicKey,
    /// BIP32 extended private keys
    ExtSecretKey,
}

impl Base58Type {
    fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::ExtPublicKey => 3,
            Base58Type::ExtSecretKey => 4,
        }
    }
}

/// Describes a UTXO set snapshot a node may load instead of syncing up to
/// `height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumeutxoData {
    /// Height of the block the snapshot was taken at
    pub height: u32,
    /// Hash of the serialized UTXO set
    pub hash_serialized: AssumeutxoHash,
    /// Number of transactions from genesis up to and including the block
    pub chain_tx_count: u64,
    /// Hash of the block the snapshot was taken at
    pub blockhash: BlockHash,
}

/// Hard-coded trust anchors, ordered by height.
pub type Checkpoints = BTreeMap<u32, BlockHash>;

/// Which network to build, with the options of the configurable ones.
enum Variant {
    Main,
    Test,
    Testnet4,
    Signet(SignetOptions),
    Regtest(RegTestOptions),
}

/// The parameters of one network. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParams {
    network: Network,
    consensus: Params,
    magic: Magic,
    default_port: u16,
    prune_after_height: u64,
    assumed_blockchain_size: u64,
    assumed_chain_state_size: u64,
    genesis: Block,
    base58_prefixes: [&'static [u8]; 5],
    bech32_hrp: &'static str,
    checkpoints: Checkpoints,
    assumeutxo: Vec<AssumeutxoData>,
    chain_tx_data: ChainTxData,
    dns_seeds: Vec<String>,
    fixed_seeds: Vec<u8>,
    default_consistency_checks: bool,
    is_mockable_chain: bool,
}

impl NetworkParams {
    /// Parameters of the production network.
    pub fn main() -> Result<NetworkParams, Error> {
        NetworkParams::build(Variant::Main)
    }

    /// Parameters of the public test network, version 3.
    pub fn testnet() -> Result<NetworkParams, Error> {
        NetworkParams::build(Variant::Test)
    }

    /// Parameters of the public test network, version 4.
    pub fn testnet4() -> Result<NetworkParams, Error> {
        NetworkParams::build(Variant::Testnet4)
    }

    /// Parameters of a signet.
    ///
    /// Without a challenge the default signet is built. A custom challenge
    /// resets the minimum chain work and assume-valid hash to "no
    /// constraint" and derives a new magic.
    pub fn signet(options: SignetOptions) -> Result<NetworkParams, Error> {
        NetworkParams::build(Variant::Signet(options))
    }

    /// Parameters of a regtest chain, with `options` applied over the
    /// defaults.
    pub fn regtest(options: RegTestOptions) -> Result<NetworkParams, Error> {
        NetworkParams::build(Variant::Regtest(options))
    }

    /// Parameters of `network`, signet and regtest with default options.
    pub fn new(network: Network) -> Result<NetworkParams, Error> {
        match network {
            Network::Main => NetworkParams::main(),
            Network::Test => NetworkParams::testnet(),
            Network::Testnet4 => NetworkParams::testnet4(),
            Network::Signet => NetworkParams::signet(SignetOptions::default()),
            Network::Regtest => NetworkParams::regtest(RegTestOptions::default()),
        }
    }

    fn build(variant: Variant) -> Result<NetworkParams, Error> {
        let table: &ChainTable = match variant {
            Variant::Main => &tables::MAIN,
            Variant::Test => &tables::TEST,
            Variant::Testnet4 => &tables::TESTNET4,
            Variant::Signet(_) => &tables::SIGNET,
            Variant::Regtest(_) => &tables::REGTEST,
        };

        let genesis = build_genesis(&table.genesis)?;
        verify_genesis(
            table.network,
            &genesis,
            &parse_hash(table.genesis.hash)?,
            &parse_hash(table.genesis.merkle_root)?,
        )?;

        let mut consensus = build_consensus(table.network, &table.consensus)?;
        consensus.hash_genesis_block = genesis.block_hash();

        let mut checkpoints = Checkpoints::new();
        for &(height, hash) in table.checkpoints {
            checkpoints.insert(height, parse_hash(hash)?);
        }

        let mut assumeutxo = Vec::with_capacity(table.assumeutxo.len());
        for data in table.assumeutxo {
            assumeutxo.push(AssumeutxoData {
                height: data.height,
                hash_serialized: parse_hash(data.hash_serialized)?,
                chain_tx_count: data.chain_tx_count,
                blockhash: parse_hash(data.blockhash)?,
            });
        }

        let mut params = NetworkParams {
            network: table.network,
            consensus,
            magic: table.magic.unwrap_or_default(),
            default_port: table.default_port,
            prune_after_height: table.prune_after_height,
            assumed_blockchain_size: table.assumed_blockchain_size,
            assumed_chain_state_size: table.assumed_chain_state_size,
            genesis,
            base58_prefixes: table.base58_prefixes,
            bech32_hrp: table.bech32_hrp,
            checkpoints,
            assumeutxo,
            chain_tx_data: table.chain_tx_data,
            dns_seeds: vec![],
            fixed_seeds: vec![],
            default_consistency_checks: table.default_consistency_checks,
            is_mockable_chain: table.is_mockable_chain,
        };

        match variant {
            Variant::Signet(options) => params.apply_signet_options(options)?,
            Variant::Regtest(options) => params.apply_regtest_options(&options)?,
            Variant::Main | Variant::Test | Variant::Testnet4 => {}
        }
        if table.magic.is_none() {
            params.magic = Magic::from_signet_challenge(&params.consensus.signet_challenge);
        }

        params.consensus.check().map_err(Error::InvalidConsensusRules)?;
        debug!(
            "built {} parameters: magic {}, genesis {}",
            params.network,
            params.magic,
            params.consensus.hash_genesis_block
        );
        Ok(params)
    }

    fn apply_signet_options(&mut self, options: SignetOptions) -> Result<(), Error> {
        let challenge = match options.challenge {
            None => Vec::<u8>::from_hex(tables::DEFAULT_SIGNET_CHALLENGE)?,
            Some(challenge) => {
                if challenge.len() > MAX_SCRIPT_SIZE {
                    return Err(Error::SignetChallengeTooLarge(challenge.len()));
                }
                info!("Signet with challenge {}", challenge.to_hex());
                self.consensus.minimum_chain_work = Uint256::ZERO;
                self.consensus.default_assume_valid = BlockHash::all_zeros();
                self.assumed_blockchain_size = 0;
                self.assumed_chain_state_size = 0;
                self.chain_tx_data = tables::CUSTOM_SIGNET_TX_DATA;
                self.consensus.custom_signet_challenge = true;
                challenge
            }
        };
        self.consensus.signet_blocks = true;
        self.consensus.signet_challenge = challenge;
        if let Some(seeds) = options.seeds {
            self.dns_seeds = seeds;
        }
        Ok(())
    }

    fn apply_regtest_options(&mut self, options: &RegTestOptions) -> Result<(), Error> {
        for (&dep, &height) in &options.activation_heights {
            debug!("regtest: {:?} active from height {}", dep, height);
            self.consensus.set_deployment_height(dep, height);
        }
        for (&pos, vbparams) in &options.version_bits_parameters {
            vbparams.validate(pos)?;
            debug!(
                "regtest: {} start {} timeout {} min activation height {}",
                pos, vbparams.start_time, vbparams.timeout, vbparams.min_activation_height
            );
            let deployment = &mut self.consensus.deployments[pos.index()];
            deployment.start_time = vbparams.start_time;
            deployment.timeout = vbparams.timeout;
            deployment.min_activation_height = vbparams.min_activation_height;
        }
        self.consensus.enforce_bip94 = options.enforce_bip94;
        if options.fastprune {
            self.prune_after_height = 100;
        }
        Ok(())
    }

    /// The network these parameters describe
    pub fn network(&self) -> Network {
        self.network
    }

    /// The consensus rules
    pub fn consensus(&self) -> &Params {
        &self.consensus
    }

    /// The message start bytes
    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Default p2p port
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Height below which blocks are never pruned
    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Minimal disk space the block chain needs, in GB
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Minimal disk space the chain state needs, in GB
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    /// The genesis block
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// The base58 prefix of the given kind
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes[kind.index()]
    }

    /// Human readable part of bech32 addresses
    pub fn bech32_hrp(&self) -> &str {
        self.bech32_hrp
    }

    /// Hard-coded checkpoints
    pub fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    /// The snapshot taken at `height`, if any.
    pub fn assumeutxo_for_height(&self, height: u32) -> Option<&AssumeutxoData> {
        self.assumeutxo.iter().find(|data| data.height == height)
    }

    /// The snapshot taken at the block `blockhash`, if any.
    pub fn assumeutxo_for_blockhash(&self, blockhash: &BlockHash) -> Option<&AssumeutxoData> {
        self.assumeutxo.iter().find(|data| data.blockhash == *blockhash)
    }

    /// Heights of all snapshots, ascending.
    pub fn available_snapshot_heights(&self) -> Vec<u32> {
        let mut heights: Vec<u32> = self.assumeutxo.iter().map(|data| data.height).collect();
        heights.sort_unstable();
        heights
    }

    /// Historical transaction statistics
    pub fn tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    /// DNS seeds to bootstrap peer discovery from
    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    /// Serialized fixed peer addresses
    pub fn fixed_seeds(&self) -> &[u8] {
        &self.fixed_seeds
    }

    /// Whether this is a test chain, i.e. anything but main
    pub fn is_test_chain(&self) -> bool {
        self.network != Network::Main
    }

    /// Whether the chain allows mocking, e.g. of the clock
    pub fn is_mockable_chain(&self) -> bool {
        self.is_mockable_chain
    }

    /// Whether expensive consistency checks run by default
    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }
}

/// Finds the network whose magic is `magic`.
///
/// Networks are tried in the order main, test, testnet4, regtest, signet,
/// each built with default options. An unknown magic is `Ok(None)`.
pub fn identify_network(magic: Magic) -> Result<Option<Network>, Error> {
    for &network in Network::ALL.iter() {
        if NetworkParams::new(network)?.magic() == magic {
            return Ok(Some(network));
        }
    }
    Ok(None)
}

/// Checks a freshly built genesis block against its pinned merkle root and
/// hash.
///
/// The merkle root is recomputed from the transactions and must also match
/// the one committed to by the header.
pub fn verify_genesis(
    network: Network,
    genesis: &Block,
    expected_hash: &BlockHash,
    expected_merkle_root: &TxMerkleNode,
) -> Result<(), Error> {
    let mismatch = |computed: String| Error::GenesisMismatch {
        network,
        field: "merkle root",
        expected: expected_merkle_root.to_string(),
        computed,
    };
    match genesis.compute_merkle_root() {
        Some(root) if root == *expected_merkle_root => {}
        Some(root) => return Err(mismatch(root.to_string())),
        None => return Err(mismatch("no transactions".to_owned())),
    }
    let header_root = genesis.header().merkle_root;
    if header_root != *expected_merkle_root {
        return Err(mismatch(header_root.to_string()));
    }
    let hash = genesis.block_hash();
    if hash != *expected_hash {
        return Err(Error::GenesisMismatch {
            network,
            field: "hash",
            expected: expected_hash.to_string(),
            computed: hash.to_string(),
        });
    }
    Ok(())
}

/// Parses a hash literal; the empty string is the zero hash.
fn parse_hash<T>(s: &str) -> Result<T, Error>
where
    T: FromStr<Err = hex::Error> + Default,
{
    if s.is_empty() {
        return Ok(T::default());
    }
    Ok(T::from_str(s)?)
}

fn build_genesis(table: &GenesisTable) -> Result<Block, Error> {
    match table.output {
        GenesisOutput::StandardKey => {
            Ok(standard_genesis_block(table.time, table.nonce, table.bits, table.version, genesis_reward())?)
        }
        GenesisOutput::RawKey(bytes) => Ok(create_genesis_block(
            GENESIS_TIMESTAMP.as_bytes(),
            p2pk_script(bytes),
            table.time,
            table.nonce,
            table.bits,
            table.version,
            genesis_reward(),
        )),
    }
}

fn build_consensus(network: Network, table: &ConsensusTable) -> Result<Params, Error> {
    let mut script_flag_exceptions = BTreeMap::<BlockHash, _>::new();
    for &(hash, flags) in table.script_flag_exceptions {
        script_flag_exceptions.insert(parse_hash(hash)?, flags);
    }
    Ok(Params {
        network,
        subsidy_halving_interval: table.subsidy_halving_interval,
        script_flag_exceptions,
        bip34_height: table.bip34_height,
        bip34_hash: parse_hash(table.bip34_hash)?,
        bip65_height: table.bip65_height,
        bip66_height: table.bip66_height,
        csv_height: table.csv_height,
        segwit_height: table.segwit_height,
        min_bip9_warning_height: table.min_bip9_warning_height,
        rule_change_activation_threshold: table.rule_change_activation_threshold,
        miner_confirmation_window: table.miner_confirmation_window,
        deployments: table.deployments,
        pow_limit: Uint256::from_hex(table.pow_limit)?,
        allow_min_difficulty_blocks: table.allow_min_difficulty_blocks,
        enforce_bip94: table.enforce_bip94,
        no_pow_retargeting: table.no_pow_retargeting,
        pow_target_spacing: table.pow_target_spacing,
        pow_target_timespan: table.pow_target_timespan,
        minimum_chain_work: Uint256::from_hex(table.minimum_chain_work)?,
        default_assume_valid: parse_hash(table.default_assume_valid)?,
        signet_blocks: false,
        signet_challenge: vec![],
        custom_signet_challenge: false,
        hash_genesis_block: BlockHash::all_zeros(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::params::{Bip9Deployment, BuriedDeployment, DeploymentPos, ScriptVerifyFlags};
    use crate::blockdata::script::Script;
    use crate::test_helpers::{block_hash, decode_hex, one_of_one_challenge};
    use crate::util::hash::bitcoin_merkle_root;

    #[test]
    fn main_params() {
        let main = NetworkParams::main().unwrap();
        assert_eq!(main.network(), Network::Main);
        assert_eq!(main.magic().to_bytes(), [0xf8, 0xbc, 0xb3, 0xd7]);
        assert_eq!(main.default_port(), 7333);
        assert_eq!(main.prune_after_height(), 100_000);
        assert_eq!(main.bech32_hrp(), "bs");
        assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[25u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::ScriptAddress), &[15u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::SecretKey), &[128u8][..]);
        assert_eq!(main.base58_prefix(Base58Type::ExtPublicKey), &[0x04u8, 0x88, 0xB2, 0x1E][..]);
        assert_eq!(main.base58_prefix(Base58Type::ExtSecretKey), &[0x04u8, 0x88, 0xAD, 0xE4][..]);
        assert!(!main.is_test_chain());
        assert!(!main.is_mockable_chain());
        assert!(!main.default_consistency_checks());
        assert!(main.dns_seeds().is_empty());
        assert!(main.fixed_seeds().is_empty());

        let consensus = main.consensus();
        assert_eq!(consensus.subsidy_halving_interval, 5000);
        assert_eq!(
            consensus.hash_genesis_block,
            block_hash("000000722d67deca36a08defdba9de43ffd698198bf1a9876b690475e14eb0b5")
        );
        assert_eq!(consensus.minimum_chain_work.to_be_bytes()[26..], [0x1b, 0x1f, 0x9e, 0xd6, 0xf1, 0xc6]);
        assert_eq!(
            consensus.default_assume_valid,
            block_hash("00000001eba2d16d93dd5638d8d914bea08f44340cf1ead81c3b3671392e3188")
        );
        assert!(!consensus.signet_blocks);
        assert!(consensus.signet_challenge.is_empty());
        assert!(!consensus.allow_min_difficulty_blocks);

        let standard = standard_genesis_block(1735689606, 73204, 0x1e0ffff0, 1, genesis_reward()).unwrap();
        assert_eq!(main.genesis_block(), &standard);
    }

    #[test]
    fn main_checkpoints_and_snapshots() {
        let main = NetworkParams::main().unwrap();
        let heights: Vec<u32> = main.checkpoints().keys().cloned().collect();
        assert_eq!(heights, vec![0, 10000, 37820, 50892]);
        assert_eq!(main.checkpoints()[&0], main.genesis_block().block_hash());

        assert_eq!(main.available_snapshot_heights(), vec![37817]);
        let snapshot = main.assumeutxo_for_height(37817).unwrap();
        assert_eq!(snapshot.chain_tx_count, 114629);
        assert_eq!(
            snapshot.hash_serialized.to_string(),
            "f5bfbfe09dc9d04e248cd9c72819533d022f250c9a4add3afa7428f39190205d"
        );
        let blockhash = block_hash("00000004d5055e3f69a083c997b78f8a1b148979cfca7d07c30813aa243ec443");
        assert_eq!(main.assumeutxo_for_blockhash(&blockhash), Some(snapshot));
        assert_eq!(main.assumeutxo_for_height(37818), None);
        assert_eq!(main.assumeutxo_for_blockhash(&BlockHash::all_zeros()), None);

        assert_eq!(main.tx_data().time, 1740654297);
        assert_eq!(main.tx_data().tx_count, 127836);
    }

    #[test]
    fn main_script_flag_exceptions() {
        let consensus = NetworkParams::main().unwrap().consensus().clone();
        assert_eq!(consensus.script_flag_exceptions.len(), 2);
        let bip16 = block_hash("00000177633cc307cd7f8630cf89dea7bea821a426ef28022423cbbe518aa546");
        assert_eq!(consensus.script_flag_exception(&bip16), Some(ScriptVerifyFlags::NONE));
        let taproot = block_hash("000000028c03020ddf3d4772c1bdb98f161b06a0eb879fa1d4665bcc62dcb0fe");
        assert_eq!(
            consensus.script_flag_exception(&taproot),
            Some(ScriptVerifyFlags::P2SH | ScriptVerifyFlags::WITNESS)
        );
        assert_eq!(consensus.script_flag_exception(&consensus.hash_genesis_block), None);
    }

    #[test]
    fn genesis_single_transaction_merkle_law() {
        for &network in Network::ALL.iter() {
            let params = NetworkParams::new(network).unwrap();
            let genesis = params.genesis_block();
            assert_eq!(genesis.txdata().len(), 1);
            let txid = genesis.txdata()[0].txid();
            assert_eq!(bitcoin_merkle_root(&[txid]), Some(TxMerkleNode::from(txid)));
            assert_eq!(genesis.compute_merkle_root(), Some(genesis.header().merkle_root));
            assert!(genesis.header().prev_blockhash.is_zero());
            assert_eq!(genesis.txdata()[0].output[0].value, genesis_reward());
            assert_eq!(params.consensus().hash_genesis_block, genesis.block_hash());
        }
    }

    #[test]
    fn construction_is_deterministic() {
        for &network in Network::ALL.iter() {
            let a = NetworkParams::new(network).unwrap();
            let b = NetworkParams::new(network).unwrap();
            assert_eq!(a, b);
            assert_eq!(
                crate::consensus::serialize(a.genesis_block()),
                crate::consensus::serialize(b.genesis_block())
            );
        }
    }

    #[test]
    fn testnet_params() {
        let test = NetworkParams::testnet().unwrap();
        assert_eq!(test.magic(), Magic::TEST);
        assert_eq!(test.default_port(), 17333);
        assert_eq!(test.assumed_blockchain_size(), 93);
        assert_eq!(test.assumed_chain_state_size(), 19);
        assert_eq!(test.bech32_hrp(), "btb");
        assert_eq!(test.base58_prefix(Base58Type::PubkeyAddress), &[111u8][..]);
        assert!(test.is_test_chain());
        // same genesis as main
        assert_eq!(test.genesis_block(), NetworkParams::main().unwrap().genesis_block());

        let consensus = test.consensus();
        assert!(consensus.allow_min_difficulty_blocks);
        assert!(!consensus.enforce_bip94);
        assert!(consensus.minimum_chain_work.is_zero());
        assert!(consensus.default_assume_valid.is_zero());
        assert!(consensus.bip34_hash.is_zero());
        assert_eq!(consensus.script_flag_exception(&BlockHash::all_zeros()), Some(ScriptVerifyFlags::NONE));
        assert!(consensus.deployment(DeploymentPos::TestDummy).is_never_active());

        assert_eq!(test.checkpoints().len(), 1);
        assert!(test.available_snapshot_heights().is_empty());
        assert_eq!(test.tx_data().tx_count, 187917082);
    }

    #[test]
    fn testnet4_params() {
        let t4 = NetworkParams::testnet4().unwrap();
        assert_eq!(t4.magic().to_string(), "1c163f28");
        assert_eq!(t4.default_port(), 47333);
        assert_eq!(
            t4.genesis_block().block_hash().to_string(),
            "228d2a315e7e50b4f68950f3653a01d098c240f02a293353bb05b8aafcfbfff5"
        );
        let script = &t4.genesis_block().txdata()[0].output[0].script_pubkey;
        assert_eq!(script.as_bytes(), &[&[33u8][..], &[0u8; 33][..], &[0xac][..]].concat()[..]);

        let consensus = t4.consensus();
        assert!(consensus.enforce_bip94);
        assert!(consensus.allow_min_difficulty_blocks);
        assert!(consensus.deployment(DeploymentPos::Taproot).is_always_active());
        assert_eq!(consensus.deployment_height(BuriedDeployment::Segwit), 1);
        assert!(t4.checkpoints().is_empty());
        assert!(t4.available_snapshot_heights().is_empty());
    }

    #[test]
    fn default_signet() {
        let signet = NetworkParams::signet(SignetOptions::default()).unwrap();
        assert_eq!(signet.magic().to_string(), "57ef277a");
        assert_eq!(signet.default_port(), 38333);
        assert_eq!(signet.bech32_hrp(), "tbs");
        assert_eq!(signet.assumed_blockchain_size(), 5);
        assert_eq!(signet.assumed_chain_state_size(), 1);
        assert_eq!(signet.tx_data().time, 1735689688);
        assert!(signet.available_snapshot_heights().is_empty());
        assert_eq!(
            signet.genesis_block().block_hash().to_string(),
            "0000024b2e9e97e9a6e41ff2457993352318d12018f36cdc5585eeb4bb670532"
        );

        let consensus = signet.consensus();
        assert!(consensus.signet_blocks);
        assert_eq!(consensus.signet_challenge, decode_hex(tables::DEFAULT_SIGNET_CHALLENGE));
        assert_eq!(consensus.subsidy_halving_interval, 210000);
        assert_eq!(consensus.deployment(DeploymentPos::TestDummy).bit, 28);
        assert_eq!(consensus.difficulty_adjustment_interval(), 120);
    }

    #[test]
    fn custom_signet() {
        let challenge = one_of_one_challenge();
        let opts = SignetOptions::default()
            .with_challenge(challenge.clone())
            .with_seeds(vec!["seed.signet.example.org"]);
        let signet = NetworkParams::signet(opts).unwrap();
        assert_eq!(signet.magic(), Magic::from_signet_challenge(&challenge));
        assert_eq!(signet.magic().to_string(), "7ec653a5");
        assert_eq!(signet.consensus().signet_challenge, challenge);
        assert!(signet.consensus().minimum_chain_work.is_zero());
        assert!(signet.consensus().default_assume_valid.is_zero());
        assert_eq!(signet.assumed_blockchain_size(), 0);
        assert_eq!(signet.assumed_chain_state_size(), 0);
        assert_eq!(*signet.tx_data(), ChainTxData::default());
        assert_eq!(signet.dns_seeds(), &["seed.signet.example.org".to_owned()][..]);
        // the challenge does not enter the genesis block
        assert_eq!(
            signet.genesis_block(),
            NetworkParams::signet(SignetOptions::default()).unwrap().genesis_block()
        );

        let other = NetworkParams::signet(SignetOptions::default().with_challenge(vec![0x51])).unwrap();
        assert_eq!(other.magic().to_string(), "54d26fbd");
        assert_ne!(other.magic(), signet.magic());
    }

    #[test]
    fn signet_challenge_limits() {
        let empty = NetworkParams::signet(SignetOptions::default().with_challenge(vec![])).unwrap();
        assert_eq!(empty.magic().to_string(), "1406e058");

        let max = NetworkParams::signet(SignetOptions::default().with_challenge(vec![0; MAX_SCRIPT_SIZE])).unwrap();
        assert_eq!(max.magic().to_string(), "37502f8b");

        assert_eq!(
            NetworkParams::signet(SignetOptions::default().with_challenge(vec![0; MAX_SCRIPT_SIZE + 1])),
            Err(Error::SignetChallengeTooLarge(MAX_SCRIPT_SIZE + 1))
        );
    }

    #[test]
    fn default_regtest() {
        let regtest = NetworkParams::regtest(RegTestOptions::default()).unwrap();
        assert_eq!(regtest.magic(), Magic::REGTEST);
        assert_eq!(regtest.default_port(), 17444);
        assert_eq!(regtest.prune_after_height(), 1000);
        assert_eq!(regtest.bech32_hrp(), "bsrt");
        assert!(regtest.is_mockable_chain());
        assert!(regtest.default_consistency_checks());
        assert_eq!(regtest.checkpoints()[&0], regtest.genesis_block().block_hash());

        let consensus = regtest.consensus();
        assert_eq!(consensus.subsidy_halving_interval, 150);
        assert!(consensus.no_pow_retargeting);
        assert!(!consensus.enforce_bip94);
        assert_eq!(consensus.deployment_height(BuriedDeployment::HeightInCb), 1);
        assert_eq!(consensus.deployment_height(BuriedDeployment::Segwit), 0);
        assert_eq!(consensus.pow_limit.to_be_bytes()[0], 0x7f);
        for &network in [Network::Main, Network::Test, Network::Testnet4, Network::Signet].iter() {
            assert!(NetworkParams::new(network).unwrap().consensus().pow_limit < consensus.pow_limit);
        }
    }

    #[test]
    fn regtest_overrides() {
        let opts = RegTestOptions::default()
            .with_activation_height(BuriedDeployment::Segwit, 432)
            .with_activation_height(BuriedDeployment::Cltv, 1351)
            .with_version_bits(
                DeploymentPos::TestDummy,
                VersionBitsParameters { start_time: 100, timeout: 200, min_activation_height: 7 },
            )
            .with_fastprune(true)
            .with_enforce_bip94(true);
        let regtest = NetworkParams::regtest(opts).unwrap();
        let consensus = regtest.consensus();
        assert_eq!(consensus.segwit_height, 432);
        assert_eq!(consensus.bip65_height, 1351);
        assert_eq!(consensus.bip66_height, 1);
        assert_eq!(
            *consensus.deployment(DeploymentPos::TestDummy),
            Bip9Deployment { bit: 1, start_time: 100, timeout: 200, min_activation_height: 7 }
        );
        assert!(consensus.deployment(DeploymentPos::Taproot).is_always_active());
        assert!(consensus.enforce_bip94);
        assert_eq!(regtest.prune_after_height(), 100);
    }

    #[test]
    fn regtest_override_order() {
        let a = RegTestOptions::default()
            .with_activation_height(BuriedDeployment::Csv, 5)
            .with_activation_height(BuriedDeployment::DerSig, 6);
        let b = RegTestOptions::default()
            .with_activation_height(BuriedDeployment::DerSig, 6)
            .with_activation_height(BuriedDeployment::Csv, 5);
        assert_eq!(NetworkParams::regtest(a).unwrap(), NetworkParams::regtest(b).unwrap());

        let twice = RegTestOptions::default()
            .with_activation_height(BuriedDeployment::Csv, 5)
            .with_activation_height(BuriedDeployment::Csv, 9);
        assert_eq!(NetworkParams::regtest(twice).unwrap().consensus().csv_height, 9);
    }

    #[test]
    fn regtest_version_bits_order() {
        let dummy = VersionBitsParameters { start_time: 100, timeout: 200, min_activation_height: 7 };
        let taproot = VersionBitsParameters {
            start_time: Bip9Deployment::NEVER_ACTIVE,
            timeout: Bip9Deployment::NO_TIMEOUT,
            min_activation_height: 0,
        };
        let a = RegTestOptions::default()
            .with_version_bits(DeploymentPos::TestDummy, dummy)
            .with_version_bits(DeploymentPos::Taproot, taproot);
        let b = RegTestOptions::default()
            .with_version_bits(DeploymentPos::Taproot, taproot)
            .with_version_bits(DeploymentPos::TestDummy, dummy);
        let a = NetworkParams::regtest(a).unwrap();
        assert_eq!(a, NetworkParams::regtest(b).unwrap());
        assert_eq!(
            *a.consensus().deployment(DeploymentPos::TestDummy),
            Bip9Deployment { bit: 1, start_time: 100, timeout: 200, min_activation_height: 7 }
        );
        assert_eq!(
            *a.consensus().deployment(DeploymentPos::Taproot),
            Bip9Deployment {
                bit: 2,
                start_time: Bip9Deployment::NEVER_ACTIVE,
                timeout: Bip9Deployment::NO_TIMEOUT,
                min_activation_height: 0,
            }
        );

        let twice = RegTestOptions::default()
            .with_version_bits(DeploymentPos::TestDummy, dummy)
            .with_version_bits(
                DeploymentPos::TestDummy,
                VersionBitsParameters { start_time: 300, timeout: 400, min_activation_height: 9 },
            );
        let twice = NetworkParams::regtest(twice).unwrap();
        assert_eq!(
            *twice.consensus().deployment(DeploymentPos::TestDummy),
            Bip9Deployment { bit: 1, start_time: 300, timeout: 400, min_activation_height: 9 }
        );
    }

    #[test]
    fn regtest_rejects_bad_version_bits() {
        let opts = RegTestOptions::default().with_version_bits(
            DeploymentPos::Taproot,
            VersionBitsParameters { start_time: 200, timeout: 100, min_activation_height: 0 },
        );
        assert_eq!(
            NetworkParams::regtest(opts),
            Err(Error::InvalidVersionBitsParameters {
                deployment: DeploymentPos::Taproot,
                start_time: 200,
                timeout: 100,
            })
        );
    }

    #[test]
    fn identify_every_network() {
        for &network in Network::ALL.iter() {
            let magic = NetworkParams::new(network).unwrap().magic();
            assert_eq!(identify_network(magic), Ok(Some(network)));
        }
        assert_eq!(identify_network(Magic::from_bytes([0, 0, 0, 0])), Ok(None));
        assert_eq!(identify_network(Magic::from_bytes([0xde, 0xad, 0xbe, 0xef])), Ok(None));
        // a custom signet is not one of the known networks
        assert_eq!(identify_network(Magic::from_signet_challenge(&[0x51])), Ok(None));
    }

    #[test]
    fn genesis_mismatch_is_reported() {
        let main = NetworkParams::main().unwrap();
        let regtest = NetworkParams::regtest(RegTestOptions::default()).unwrap();
        let genesis = main.genesis_block();
        let merkle_root = genesis.header().merkle_root;

        assert_eq!(verify_genesis(Network::Main, genesis, &genesis.block_hash(), &merkle_root), Ok(()));
        match verify_genesis(Network::Main, genesis, &regtest.genesis_block().block_hash(), &merkle_root) {
            Err(Error::GenesisMismatch { network, field, expected, computed }) => {
                assert_eq!(network, Network::Main);
                assert_eq!(field, "hash");
                assert_eq!(expected, "361a9b4dbb07235de1548fab66057824f15415c407361f2a97a5e23f708fa154");
                assert_eq!(computed, "000000722d67deca36a08defdba9de43ffd698198bf1a9876b690475e14eb0b5");
            }
            x => panic!("unexpected: {:?}", x),
        }
        match verify_genesis(Network::Main, genesis, &genesis.block_hash(), &TxMerkleNode::all_zeros()) {
            Err(Error::GenesisMismatch { field, .. }) => assert_eq!(field, "merkle root"),
            x => panic!("unexpected: {:?}", x),
        }
    }

    #[test]
    fn genesis_with_edited_transactions_is_rejected() {
        let genesis = NetworkParams::main().unwrap().genesis_block().clone();
        let hash = genesis.block_hash();
        let (header, mut txdata) = genesis.into_parts();
        txdata[0].output[0].script_pubkey = Script::from(vec![0x51]);
        let edited = Block::new(header, txdata);
        // the header, and so the hash, is untouched
        assert_eq!(edited.block_hash(), hash);
        assert!(!edited.check_merkle_root());

        match verify_genesis(Network::Main, &edited, &hash, &header.merkle_root) {
            Err(Error::GenesisMismatch { network, field, expected, computed }) => {
                assert_eq!(network, Network::Main);
                assert_eq!(field, "merkle root");
                assert_eq!(expected, header.merkle_root.to_string());
                assert_eq!(computed, edited.compute_merkle_root().unwrap().to_string());
            }
            x => panic!("unexpected: {:?}", x),
        }

        let empty = Block::new(header, vec![]);
        match verify_genesis(Network::Main, &empty, &hash, &header.merkle_root) {
            Err(Error::GenesisMismatch { field, computed, .. }) => {
                assert_eq!(field, "merkle root");
                assert_eq!(computed, "no transactions");
            }
            x => panic!("unexpected: {:?}", x),
        }
    }

    #[test]
    fn hash_literals() {
        assert_eq!(parse_hash::<BlockHash>(""), Ok(BlockHash::all_zeros()));
        assert!(parse_hash::<BlockHash>("00").is_err());
        assert!(parse_hash::<BlockHash>("zz").is_err());
    }
}
