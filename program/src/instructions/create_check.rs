//! See [`process_create_check`].

use pinocchio::{
    account::AccountView,
    Address,
    ProgramResult,
};
use xbasic_interface::{
    check_signer_seeds,
    error::XbasicError,
    instructions::CreateCheckInstructionData,
    state::check::Check,
};

use crate::{
    context::create_check_context::CreateCheckContext,
    debug,
    shared::token_transfers::escrow_into_vault,
};

/// Instruction handler logic for escrowing tokens in a check's vault and recording the check.
///
/// The check account must already be allocated and assigned to this program, which lets the
/// client pick any keypair address for it.
///
/// # Safety
///
/// Caller guarantees no account data in `accounts` is currently borrowed.
#[inline(never)]
pub unsafe fn process_create_check(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let args = CreateCheckInstructionData::unpack(instruction_data)?;
    Check::validate_memo(args.memo)?;

    let ctx = unsafe { CreateCheckContext::load(accounts) }?;

    let check_signer = Address::create_program_address(
        check_signer_seeds!(ctx.check.account().address(), args.nonce),
        &crate::ID,
    )
    .map_err(|_| XbasicError::InvalidCheckNonce)?;
    if ctx.check_signer.address() != &check_signer {
        return Err(XbasicError::InvalidCheckSigner.into());
    }

    escrow_into_vault(&ctx, args.amount)?;

    let check = Check::new(
        *ctx.from.address(),
        *ctx.to.address(),
        args.amount,
        *ctx.vault.address(),
        args.nonce,
        args.memo,
    )?;

    // Safety: Scoped mutable borrow of the zeroed check account.
    unsafe { ctx.check.initialize(&check) };

    debug!("Created check for {} tokens", args.amount);

    Ok(())
}
