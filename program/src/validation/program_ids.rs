use pinocchio::account::AccountView;
use xbasic_interface::{
    error::XbasicError,
    state::SYSTEM_PROGRAM_ID,
};

#[inline(always)]
pub fn check_system_program(account: &AccountView) -> Result<(), XbasicError> {
    if account.address() != &SYSTEM_PROGRAM_ID {
        return Err(XbasicError::InvalidSystemProgram);
    }
    Ok(())
}

/// Checks are only ever funded and paid out in SPL token accounts.
#[inline(always)]
pub fn check_token_program(account: &AccountView) -> Result<(), XbasicError> {
    if account.address() != &pinocchio_token::ID {
        return Err(XbasicError::InvalidTokenProgram);
    }
    Ok(())
}
