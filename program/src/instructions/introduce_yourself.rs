//! See [`process_introduce_yourself`].

use pinocchio::{
    account::AccountView,
    Address,
    ProgramResult,
};
use xbasic_interface::{
    error::XbasicError,
    instructions::IntroduceYourselfInstructionData,
    state::{
        transmutable::Transmutable,
        visitor_state::VisitorState,
    },
    visitor_state_seeds,
};

use crate::{
    context::introduce_yourself_context::IntroduceYourselfContext,
    debug,
    shared::create_account::create_program_account,
    visitor_signer,
};

/// Instruction handler logic for creating a visitor's state PDA with a visit count of one.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_introduce_yourself(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let visitor_bump = IntroduceYourselfInstructionData::unpack(instruction_data)?.visitor_bump;
    let ctx = IntroduceYourselfContext::load(accounts)?;

    // `CreateAccount` would also fail on a mismatched address, but checking first surfaces a
    // program error instead of a privilege escalation failure.
    let expected = Address::create_program_address(
        visitor_state_seeds!(ctx.visitor.address(), visitor_bump),
        &crate::ID,
    )
    .map_err(|_| XbasicError::InvalidVisitorState)?;
    if ctx.visitor_state.address() != &expected {
        return Err(XbasicError::InvalidVisitorState.into());
    }

    create_program_account(
        ctx.payer,
        ctx.visitor_state,
        VisitorState::LEN,
        &[visitor_signer!(ctx.visitor.address(), visitor_bump)],
    )?;

    // Safety: Scoped mutable borrow of the newly created visitor state.
    let state_data = unsafe { ctx.visitor_state.borrow_unchecked_mut() };
    state_data.copy_from_slice(VisitorState::new(visitor_bump).as_bytes());

    debug!("Hello, this is your first visit!");

    Ok(())
}
