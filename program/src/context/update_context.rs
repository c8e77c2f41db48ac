//! See [`UpdateContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    my_account_view::MyAccountView,
    signers::require_writable,
};

/// The account context for the `Update` instruction. Any caller may update any account.
#[derive(Clone)]
pub struct UpdateContext<'a> {
    pub my_account: MyAccountView<'a>,
}

impl<'a> UpdateContext<'a> {
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` My account
    pub unsafe fn load(accounts: &'a [AccountView]) -> Result<UpdateContext<'a>, ProgramError> {
        let [my_account, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        require_writable(my_account)?;
        // Safety: Scoped immutable borrow of the account data to validate it.
        let my_account = unsafe { MyAccountView::new(my_account) }?;

        Ok(Self { my_account })
    }
}
