//! See [`process_update`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use xbasic_interface::instructions::SetDataInstructionData;

use crate::{
    context::update_context::UpdateContext,
    debug,
};

/// Instruction handler logic for overwriting the value stored in an existing `MyAccount`.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_update(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let data = SetDataInstructionData::unpack(instruction_data)?.data();
    let mut ctx = unsafe { UpdateContext::load(accounts) }?;

    // Safety: Scoped mutable borrow of the validated account.
    unsafe { ctx.my_account.load_unchecked_mut() }.set_data(data);

    debug!("Updated my account with data: {}", data);

    Ok(())
}
