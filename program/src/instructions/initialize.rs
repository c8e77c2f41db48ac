//! See [`process_initialize`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use xbasic_interface::{
    instructions::SetDataInstructionData,
    state::{
        my_account::MyAccount,
        transmutable::Transmutable,
    },
};

use crate::{
    context::initialize_context::InitializeContext,
    debug,
    shared::create_account::create_program_account,
};

/// Instruction handler logic for creating a keypair-addressed [`MyAccount`] and storing its
/// initial value.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_initialize(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let data = SetDataInstructionData::unpack(instruction_data)?.data();
    let ctx = InitializeContext::load(accounts)?;

    // `my_account` signs the transaction itself, so no PDA signer is needed.
    create_program_account(ctx.user, ctx.my_account, MyAccount::LEN, &[])?;

    // Safety: Scoped mutable borrow of the newly created account's data.
    let account_data = unsafe { ctx.my_account.borrow_unchecked_mut() };
    account_data.copy_from_slice(MyAccount::new(data).as_bytes());

    debug!("Initialized my account with data: {}", data);

    Ok(())
}
