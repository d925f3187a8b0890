//! Integration tests for env layering, secret resolution, and the
//! network config resolver working together.

use std::fs;

use chainops::config::{env, resolver};
use chainops::{ChainId, SecretStore};

#[test]
fn test_layered_files_feed_the_resolver() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env.local"),
        "MNEMONIC=test test test test test test test test test test test junk\n",
    )
    .unwrap();
    fs::write(dir.path().join(".env"), "MNEMONIC=should lose\n").unwrap();

    // Merge without touching process state, then resolve through a
    // store seeded from the merge.
    let merged = env::merge_env_files(dir.path());
    let store = SecretStore::from_pairs(merged);

    let config = resolver::resolve(ChainId::Sepolia, &store).unwrap();
    assert_eq!(config.chain_id, 11155111);
    assert!(config.accounts.mnemonic.starts_with("test test"));
}

#[test]
fn test_all_networks_resolve_against_descriptor_table() {
    let store = SecretStore::default();
    for chain in ChainId::ALL {
        let config = resolver::resolve(chain, &store).unwrap();
        assert_eq!(config.chain_id, chain.descriptor().id);
        assert_eq!(config.rpc_url, chain.descriptor().rpc_url);
    }
}

#[test]
fn test_unknown_network_produces_no_partial_config() {
    let store = SecretStore::default();
    assert!(resolver::resolve_by_name("moonbase", &store).is_err());
    assert!(resolver::resolve_by_id(1337, &store).is_err());
}

#[test]
fn test_vars_store_backs_missing_env() {
    let dir = tempfile::tempdir().unwrap();
    let vars = dir.path().join("vars.toml");
    fs::write(&vars, "MNEMONIC = \"stored phrase\"\nBSCSCAN_API_KEY = \"bsc-key\"\n").unwrap();

    let store = SecretStore::open(&vars).unwrap();
    let config = resolver::resolve(ChainId::Bsc, &store).unwrap();

    assert_eq!(config.accounts.mnemonic, "stored phrase");
    assert_eq!(resolver::explorer_api_key(ChainId::Bsc, &store), "bsc-key");
}

#[test]
fn test_no_sources_at_all_yields_empty_mnemonic() {
    let dir = tempfile::tempdir().unwrap();

    let merged = env::merge_env_files(dir.path());
    assert!(merged.is_empty());

    let store = SecretStore::open(&dir.path().join("vars.toml")).unwrap();
    let config = resolver::resolve(ChainId::Mainnet, &store).unwrap();
    assert_eq!(config.accounts.mnemonic, "");
}
