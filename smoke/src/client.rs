use contracts::instruction::ContractsInstruction;
use log::{debug, info};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{error::RemoteCallError, transport::Transport};

/// Typed handle on a deployed `contracts` program.
pub struct ContractsClient<T> {
    transport: T,
    payer: Keypair,
    program_id: Pubkey,
}

impl<T> ContractsClient<T> {
    /// Bound to the program's declared address.
    pub fn new(transport: T, payer: Keypair) -> Self {
        Self {
            transport,
            payer,
            program_id: Pubkey::new_from_array(contracts::ID),
        }
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn initialize_instruction(&self) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: vec![],
            data: ContractsInstruction::Initialize.discriminator().to_vec(),
        }
    }
}

impl<T: Transport> ContractsClient<T> {
    /// Submits `initialize` once and waits for confirmation.
    pub async fn initialize(&mut self) -> Result<Signature, RemoteCallError> {
        let blockhash = self.transport.latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[self.initialize_instruction()],
            Some(&self.payer.pubkey()),
            &[&self.payer],
            blockhash,
        );
        let signature = tx.signatures[0];

        debug!("submitting initialize to {} as {}", self.program_id, signature);
        self.transport.submit(tx).await?;
        info!("initialize confirmed: {}", signature);

        Ok(signature)
    }
}
