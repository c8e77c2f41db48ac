//! See [`process_visit`].

use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use xbasic_interface::instructions::expect_empty_data;

use crate::{
    context::visit_context::VisitContext,
    debug,
};

/// Instruction handler logic for recording another visit.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_visit(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    expect_empty_data(instruction_data)?;
    let mut ctx = unsafe { VisitContext::load(accounts) }?;

    // Safety: Scoped mutable borrow of the validated visitor state.
    let visitor_state = unsafe { ctx.visitor_state.load_unchecked_mut() };
    visitor_state.try_increment_visit_count()?;

    debug!("Visit number {}", visitor_state.visit_count());

    Ok(())
}
