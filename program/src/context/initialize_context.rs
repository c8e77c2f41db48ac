//! See [`InitializeContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    program_ids::check_system_program,
    signers::require_writable_signer,
};

/// The account context for the `Initialize` instruction.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub my_account: &'a AccountView,
    pub user: &'a AccountView,
    pub system_program: &'a AccountView,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeContext<'a>, ProgramError> {
        let [my_account, user, system_program, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        // `CreateAccount` fails if `my_account` already holds lamports or data, so there's no need
        // to check that it's uninitialized here.
        require_writable_signer(my_account)?;
        require_writable_signer(user)?;
        check_system_program(system_program)?;

        Ok(Self {
            my_account,
            user,
            system_program,
        })
    }
}
