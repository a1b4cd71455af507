use async_trait::async_trait;
use solana_program_test::BanksClient;
use solana_sdk::{hash::Hash, transaction::Transaction};

use crate::error::RemoteCallError;

/// Where a signed transaction goes. `submit` returns once the environment
/// has confirmed or rejected it.
#[async_trait]
pub trait Transport: Send {
    async fn latest_blockhash(&mut self) -> Result<Hash, RemoteCallError>;

    async fn submit(&mut self, transaction: Transaction) -> Result<(), RemoteCallError>;
}

#[async_trait]
impl Transport for BanksClient {
    async fn latest_blockhash(&mut self) -> Result<Hash, RemoteCallError> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn submit(&mut self, transaction: Transaction) -> Result<(), RemoteCallError> {
        Ok(self.process_transaction(transaction).await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use solana_sdk::transaction::TransactionError;

    #[derive(Debug, Clone)]
    pub enum Behaviour {
        Accept,
        Reject(TransactionError),
        Offline,
    }

    /// In-memory environment that records what it was sent.
    pub struct RecordingTransport {
        pub behaviour: Behaviour,
        pub blockhash: Hash,
        pub submitted: Vec<Transaction>,
    }

    impl RecordingTransport {
        pub fn new(behaviour: Behaviour) -> Self {
            Self { behaviour, blockhash: Hash::new_unique(), submitted: Vec::new() }
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn latest_blockhash(&mut self) -> Result<Hash, RemoteCallError> {
            match &self.behaviour {
                Behaviour::Offline => Err(RemoteCallError::Unreachable("connection refused".into())),
                _ => Ok(self.blockhash),
            }
        }

        async fn submit(&mut self, transaction: Transaction) -> Result<(), RemoteCallError> {
            self.submitted.push(transaction);
            match &self.behaviour {
                Behaviour::Accept => Ok(()),
                Behaviour::Reject(err) => Err(RemoteCallError::Rejected(err.clone())),
                Behaviour::Offline => Err(RemoteCallError::Unreachable("connection refused".into())),
            }
        }
    }
}
