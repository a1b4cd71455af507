use std::{
    env,
    path::{Path, PathBuf},
};

use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::error::ConfigError;

/// Address of a remote banks server, `host:port`.
pub const BANKS_ADDR_VAR: &str = "CONTRACTS_BANKS_ADDR";
/// Path of the signer keypair (JSON byte array, as written by `solana-keygen`).
pub const WALLET_VAR: &str = "CONTRACTS_WALLET";
/// Directory holding the built program, shared with `solana-program-test`.
pub const BPF_OUT_DIR_VAR: &str = "BPF_OUT_DIR";

/// File name `cargo-build-sbf` gives the program artifact.
pub const PROGRAM_ARTIFACT: &str = "contracts.so";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Boot a bank in this process with the program loaded from the deploy dir.
    InProcess,
    /// Talk to an already running banks server.
    Banks(String),
}

#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub endpoint: Endpoint,
    pub wallet: Option<PathBuf>,
    pub deploy_dir: PathBuf,
}

impl SmokeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let endpoint = match get(BANKS_ADDR_VAR) {
            Some(addr) => {
                validate_address(&addr)?;
                Endpoint::Banks(addr)
            }
            None => Endpoint::InProcess,
        };
        let wallet = get(WALLET_VAR).map(PathBuf::from);
        let deploy_dir = get(BPF_OUT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_deploy_dir);

        Ok(Self { endpoint, wallet, deploy_dir })
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.deploy_dir.join(PROGRAM_ARTIFACT)
    }

    /// `Ok(None)` when no wallet is configured.
    pub fn load_payer(&self) -> Result<Option<Keypair>, ConfigError> {
        let Some(path) = &self.wallet else {
            return Ok(None);
        };
        read_keypair_file(path)
            .map(Some)
            .map_err(|err| ConfigError::InvalidWallet {
                path: path.clone(),
                reason: err.to_string(),
            })
    }
}

/// `<workspace>/target/deploy`, where `cargo-build-sbf` writes the artifact.
pub fn default_deploy_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("deploy")
}

fn validate_address(addr: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidAddress(addr.to_string());
    let (host, port) = addr.rsplit_once(':').ok_or_else(invalid)?;
    if host.is_empty() || port.parse::<u16>().is_err() {
        return Err(invalid());
    }
    Ok(())
}
