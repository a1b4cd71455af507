use pinocchio::program_error::ProgramError;

// simple internal error enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractsError {
    WrongProgram,
    EmptyInstruction,
    UnknownDiscriminator,
    UnexpectedArguments,
}

// map internal errors to standard program error
pub fn to_program_error(err: ContractsError) -> ProgramError {
    match err {
        ContractsError::WrongProgram => ProgramError::IncorrectProgramId,
        ContractsError::EmptyInstruction
        | ContractsError::UnknownDiscriminator
        | ContractsError::UnexpectedArguments => ProgramError::InvalidInstructionData,
    }
}

impl From<ContractsError> for ProgramError {
    fn from(err: ContractsError) -> Self {
        to_program_error(err)
    }
}
