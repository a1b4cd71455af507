use pinocchio::program_entrypoint;

use crate::processor::process_instruction;

// Entrypoint macro
program_entrypoint!(process_instruction);
