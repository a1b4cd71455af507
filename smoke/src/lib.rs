//! Smoke runner for the `contracts` program: connect to an execution
//! environment, call `initialize` once, report the transaction signature.

pub mod client;
pub mod config;
pub mod error;
pub mod runner;
pub mod transport;

pub use client::ContractsClient;
pub use config::{Endpoint, SmokeConfig};
pub use error::{ConfigError, RemoteCallError, SmokeError};
pub use runner::{connect, run_from_env, run_initialize_smoke_test};
pub use transport::Transport;
