use pinocchio::ProgramResult;

use crate::{
    check_signer,
    context::{
        cash_check_context::CashCheckContext,
        create_check_context::CreateCheckContext,
    },
};

/// Moves `amount` from the check creator's token account into the check's vault.
///
/// ### Accounts
///   0. `[WRITE]` Source token account
///   1. `[WRITE]` Vault token account
///   2. `[READ, SIGNER]` Owner of the source token account (authority)
pub fn escrow_into_vault(ctx: &CreateCheckContext, amount: u64) -> ProgramResult {
    pinocchio_token::instructions::Transfer {
        from: ctx.from.account, // WRITE
        to: ctx.vault.account,  // WRITE
        authority: ctx.owner,   // READ
        amount,
    }
    .invoke()
}

/// Pays `amount` out of the check's vault to the receiver, signed by the check signer PDA.
///
/// ### Accounts
///   0. `[WRITE]` Vault token account
///   1. `[WRITE]` Receiver token account
///   2. `[READ]` Check signer (authority)
pub fn pay_out_of_vault(ctx: &CashCheckContext, amount: u64, nonce: u8) -> ProgramResult {
    pinocchio_token::instructions::Transfer {
        from: ctx.vault.account,     // WRITE
        to: ctx.to.account,          // WRITE
        authority: ctx.check_signer, // READ
        amount,
    }
    .invoke_signed(&[check_signer!(ctx.check.account().address(), nonce)])
}
