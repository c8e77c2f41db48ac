//! Solana program entrypoint.
//!
//! Forwards incoming instructions from the runtime into the program's instruction handlers.

use pinocchio::{
    account::AccountView,
    no_allocator,
    nostd_panic_handler,
    program_entrypoint,
    Address,
    ProgramResult,
};
use xbasic_interface::{
    error::XbasicError,
    instructions::XbasicInstruction,
};

use crate::instructions::*;

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

#[inline(never)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data_with_tag: &[u8],
) -> ProgramResult {
    let [tag, instruction_data @ ..] = instruction_data_with_tag else {
        return Err(XbasicError::InvalidInstructionTag.into());
    };

    let instruction_tag = XbasicInstruction::try_from(*tag)?;

    // Safety: No account data is currently borrowed. CPIs to this program must ensure they do not
    // hold references to the account data used in each instruction.
    unsafe {
        match instruction_tag {
            XbasicInstruction::Initialize => process_initialize(accounts, instruction_data),
            XbasicInstruction::Update => process_update(accounts, instruction_data),
            XbasicInstruction::IntroduceYourself => {
                process_introduce_yourself(accounts, instruction_data)
            }
            XbasicInstruction::Visit => process_visit(accounts, instruction_data),
            XbasicInstruction::CreateCheck => process_create_check(accounts, instruction_data),
            XbasicInstruction::CashCheck => process_cash_check(accounts, instruction_data),
        }
    }
}
