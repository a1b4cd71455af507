use crate::error::ContractsError;

pub mod initialize;

pub use initialize::*;

/// Length of the discriminator that prefixes every instruction.
pub const DISCRIMINATOR_LEN: usize = 8;

/// `sha256("global:initialize")[..8]`, the selector generated workspace
/// clients use for `initialize`.
pub const INITIALIZE_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [175, 175, 109, 31, 13, 152, 155, 237];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractsInstruction {
    Initialize,
}

impl ContractsInstruction {
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            ContractsInstruction::Initialize => INITIALIZE_DISCRIMINATOR,
        }
    }
}

impl TryFrom<&[u8]> for ContractsInstruction {
    type Error = ContractsError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.is_empty() {
            return Err(ContractsError::EmptyInstruction);
        }
        if data.len() < DISCRIMINATOR_LEN {
            return Err(ContractsError::UnknownDiscriminator);
        }
        let (disc, payload) = data.split_at(DISCRIMINATOR_LEN);

        match disc {
            d if d == INITIALIZE_DISCRIMINATOR => {
                // initialize takes no arguments
                if !payload.is_empty() {
                    return Err(ContractsError::UnexpectedArguments);
                }
                Ok(ContractsInstruction::Initialize)
            }
            _ => Err(ContractsError::UnknownDiscriminator),
        }
    }
}
