use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

use crate::error::{to_program_error, ContractsError};
use crate::instruction::{self, ContractsInstruction};

#[inline(always)]
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // A copy of this program deployed at another address must not answer
    if *program_id != crate::ID {
        return Err(to_program_error(ContractsError::WrongProgram));
    }

    match ContractsInstruction::try_from(instruction_data).map_err(to_program_error)? {
        ContractsInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(program_id, accounts)
        }
    }
}
