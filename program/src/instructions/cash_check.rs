//! See [`process_cash_check`].

use pinocchio::{
    account::AccountView,
    Address,
    ProgramResult,
};
use xbasic_interface::{
    check_signer_seeds,
    error::XbasicError,
    instructions::expect_empty_data,
};

use crate::{
    context::cash_check_context::CashCheckContext,
    debug,
    shared::token_transfers::pay_out_of_vault,
};

/// Instruction handler logic for paying a check out to its receiver and burning it.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_cash_check(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    expect_empty_data(instruction_data)?;
    let mut ctx = unsafe { CashCheckContext::load(accounts) }?;

    let (amount, nonce) = {
        // Safety: Scoped immutable borrow of the validated check.
        let check = unsafe { ctx.check.load_unchecked() };
        (check.amount(), check.nonce)
    };

    let check_signer = Address::create_program_address(
        check_signer_seeds!(ctx.check.account().address(), nonce),
        &crate::ID,
    )
    .map_err(|_| XbasicError::InvalidCheckNonce)?;
    if ctx.check_signer.address() != &check_signer {
        return Err(XbasicError::InvalidCheckSigner.into());
    }

    pay_out_of_vault(&ctx, amount, nonce)?;

    // Safety: Scoped mutable borrow of the check after the transfer CPI has returned.
    unsafe { ctx.check.load_unchecked_mut() }.burn()?;

    debug!("Cashed check for {} tokens", amount);

    Ok(())
}
