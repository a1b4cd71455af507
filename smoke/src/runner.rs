use std::io::{self, Write};

use log::{debug, info, warn};
use solana_banks_client::start_tcp_client;
use solana_program_test::{BanksClient, ProgramTest};
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};

use crate::{
    client::ContractsClient,
    config::{Endpoint, SmokeConfig, BPF_OUT_DIR_VAR},
    error::{ConfigError, RemoteCallError, SmokeError},
    transport::Transport,
};

/// Prefix of the report line.
pub const SIGNATURE_PREFIX: &str = "Your transaction signature";

/// Lamports moved to a configured wallet when it signs against an in-process bank.
const WALLET_FUNDING: u64 = LAMPORTS_PER_SOL;

/// Calls `initialize` exactly once. On success the signature is written to
/// `out`; on failure nothing is.
pub async fn run_initialize_smoke_test<T, W>(
    client: &mut ContractsClient<T>,
    out: &mut W,
) -> Result<Signature, SmokeError>
where
    T: Transport,
    W: Write,
{
    let signature = client.initialize().await?;
    writeln!(out, "{} {}", SIGNATURE_PREFIX, signature)?;
    Ok(signature)
}

/// Resolves the configuration into a client. Every configuration problem
/// surfaces here, before anything is submitted.
pub async fn connect(config: &SmokeConfig) -> Result<ContractsClient<BanksClient>, SmokeError> {
    match &config.endpoint {
        Endpoint::Banks(addr) => {
            let payer = config.load_payer()?.ok_or(ConfigError::MissingWallet)?;
            debug!("connecting to banks server at {}", addr);
            let banks_client = start_tcp_client(addr.clone())
                .await
                .map_err(|err| RemoteCallError::Unreachable(format!("{}: {}", addr, err)))?;
            Ok(ContractsClient::new(banks_client, payer))
        }
        Endpoint::InProcess => {
            let artifact = config.artifact_path();
            if !artifact.exists() {
                return Err(ConfigError::MissingArtifact(artifact).into());
            }
            let wallet = config.load_payer()?;

            let (mut banks_client, genesis_payer, _) = program_test(config).start().await;
            let payer = match wallet {
                Some(wallet) => {
                    fund(&mut banks_client, &genesis_payer, &wallet.pubkey()).await?;
                    wallet
                }
                None => genesis_payer,
            };
            info!("in-process bank ready, payer {}", payer.pubkey());
            Ok(ContractsClient::new(banks_client, payer))
        }
    }
}

/// Configure from the process environment, connect, run once, report on stdout.
pub async fn run_from_env() -> Result<Signature, SmokeError> {
    let config = SmokeConfig::from_env()?;
    let mut client = connect(&config).await?;
    run_initialize_smoke_test(&mut client, &mut io::stdout()).await
}

fn program_test(config: &SmokeConfig) -> ProgramTest {
    std::env::set_var(BPF_OUT_DIR_VAR, &config.deploy_dir);

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    let program_id = Pubkey::new_from_array(contracts::ID);
    pt.add_upgradeable_program_to_genesis("contracts", &program_id);
    pt
}

async fn fund(
    banks_client: &mut BanksClient,
    from: &Keypair,
    to: &Pubkey,
) -> Result<(), RemoteCallError> {
    let blockhash = banks_client.latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&from.pubkey(), to, WALLET_FUNDING)],
        Some(&from.pubkey()),
        &[from],
        blockhash,
    );
    banks_client.submit(tx).await.inspect_err(|err| {
        warn!("could not fund wallet {}: {}", to, err);
    })
}
