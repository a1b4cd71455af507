#![allow(dead_code)]

use solana_program_test::ProgramTest;
use std::{env, path::PathBuf};
use tempfile::TempDir;

pub use contracts_smoke::{config::default_deploy_dir, Endpoint, SmokeConfig};
pub use solana_sdk::{
    pubkey::Pubkey,
    signature::{write_keypair_file, Keypair, Signer},
    transaction::Transaction,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn in_process_config() -> SmokeConfig {
    SmokeConfig {
        endpoint: Endpoint::InProcess,
        wallet: None,
        deploy_dir: default_deploy_dir(),
    }
}

pub fn program_test() -> ProgramTest {
    program_test_at(&[Pubkey::new_from_array(contracts::ID)])
}

/// Loads the same artifact once per address.
pub fn program_test_at(program_ids: &[Pubkey]) -> ProgramTest {
    let deploy_dir = default_deploy_dir();
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = deploy_dir.join("contracts.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    for program_id in program_ids {
        pt.add_upgradeable_program_to_genesis("contracts", program_id);
    }
    pt
}

/// A fresh keypair written where `CONTRACTS_WALLET` could point at it.
pub fn wallet_file() -> (TempDir, PathBuf, Keypair) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("id.json");
    let keypair = Keypair::new();
    write_keypair_file(&keypair, &path).unwrap();
    (dir, path, keypair)
}
