//! See [`IntroduceYourselfContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    program_ids::check_system_program,
    signers::{
        require_signer,
        require_writable,
        require_writable_signer,
    },
};

/// The account context for the `IntroduceYourself` instruction.
#[derive(Clone)]
pub struct IntroduceYourselfContext<'a> {
    pub payer: &'a AccountView,
    pub visitor: &'a AccountView,
    pub visitor_state: &'a AccountView,
    pub system_program: &'a AccountView,
}

impl<'a> IntroduceYourselfContext<'a> {
    pub fn load(
        accounts: &'a [AccountView],
    ) -> Result<IntroduceYourselfContext<'a>, ProgramError> {
        let [payer, visitor, visitor_state, system_program, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        require_writable_signer(payer)?;
        require_signer(visitor)?;
        require_writable(visitor_state)?;
        check_system_program(system_program)?;

        Ok(Self {
            payer,
            visitor,
            visitor_state,
            system_program,
        })
    }
}
