use pinocchio::{
    account::AccountView,
    error::ProgramError,
    Address,
};
use pinocchio_token::state::TokenAccount;
use xbasic_interface::error::XbasicError;

/// An initialized SPL token account along with copies of its mint and owner.
#[derive(Clone)]
pub struct TokenAccountView<'a> {
    pub account: &'a AccountView,
    pub mint: Address,
    pub owner: Address,
}

impl<'a> TokenAccountView<'a> {
    /// ### Accounts
    ///   0. `[READ]` Token account
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<TokenAccountView<'a>, ProgramError> {
        if !account.owned_by(&pinocchio_token::ID) {
            return Err(XbasicError::InvalidAccountOwner.into());
        }

        // The borrow is dropped before returning, after copying out the mint and owner.
        let token_account = TokenAccount::from_account_view(account)?;
        if !token_account.is_initialized() {
            return Err(XbasicError::AccountNotInitialized.into());
        }

        Ok(Self {
            account,
            mint: *token_account.mint(),
            owner: *token_account.owner(),
        })
    }

    #[inline(always)]
    pub fn address(&self) -> &'a Address {
        self.account.address()
    }

    #[inline(always)]
    pub fn check_owner(&self, expected_owner: &Address) -> Result<(), XbasicError> {
        if &self.owner != expected_owner {
            return Err(XbasicError::IncorrectTokenAccountOwner);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn check_mint(&self, expected_mint: &Address) -> Result<(), XbasicError> {
        if &self.mint != expected_mint {
            return Err(XbasicError::MintMismatch);
        }
        Ok(())
    }
}
