use pinocchio::{
    account::AccountView,
    cpi::Signer,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};

/// Creates a rent exempt account of `space` bytes owned by this program, funded by `payer`.
///
/// `signers` must contain the PDA signer when `account` is a PDA. Keypair accounts sign the
/// transaction themselves and pass no signers.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` Payer
///   1. `[WRITE, SIGNER]` New account
pub fn create_program_account(
    payer: &AccountView,
    account: &AccountView,
    space: usize,
    signers: &[Signer],
) -> ProgramResult {
    let lamports = Rent::get()?.try_minimum_balance(space)?;

    pinocchio_system::instructions::CreateAccount {
        from: payer, // WRITE
        to: account, // WRITE
        lamports,
        space: space as u64,
        owner: &crate::ID,
    }
    .invoke_signed(signers)
}
