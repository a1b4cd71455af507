use std::{io, path::PathBuf};

use solana_program_test::BanksClientError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// Failure of the remote `initialize` call itself.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    #[error("execution environment unreachable: {0}")]
    Unreachable(String),
    #[error("transaction rejected: {0}")]
    Rejected(TransactionError),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<BanksClientError> for RemoteCallError {
    fn from(err: BanksClientError) -> Self {
        match err {
            BanksClientError::TransactionError(err) => RemoteCallError::Rejected(err),
            BanksClientError::SimulationError { err, .. } => RemoteCallError::Rejected(err),
            BanksClientError::Io(err) => RemoteCallError::Unreachable(err.to_string()),
            other => RemoteCallError::Transport(other.to_string()),
        }
    }
}

/// Environment configuration that cannot produce a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a remote endpoint needs a signer, set CONTRACTS_WALLET")]
    MissingWallet,
    #[error("cannot read wallet {path}: {reason}")]
    InvalidWallet { path: PathBuf, reason: String },
    #[error("invalid endpoint address `{0}`, expected host:port")]
    InvalidAddress(String),
    #[error("program artifact not found at {0}")]
    MissingArtifact(PathBuf),
}

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    RemoteCall(#[from] RemoteCallError),
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}
