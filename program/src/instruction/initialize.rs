use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;

/// No accounts, no arguments, no state: the call only proves the program is
/// deployed and reachable.
pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    log!("Greetings from:");
    pinocchio::pubkey::log(program_id);
    msg!("contracts initialized");
    Ok(())
}
