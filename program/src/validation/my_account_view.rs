use pinocchio::account::AccountView;
use xbasic_interface::{
    error::XbasicError,
    state::{
        my_account::MyAccount,
        transmutable::Transmutable,
    },
};

#[derive(Clone)]
pub struct MyAccountView<'a> {
    /// Private so a view can only be built through [`MyAccountView::new`].
    account: &'a AccountView,
}

impl<'a> MyAccountView<'a> {
    #[inline(always)]
    pub fn account(&self) -> &'a AccountView {
        self.account
    }

    /// Checks that the account is owned by this program and holds an initialized [`MyAccount`].
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` My account
    #[inline(always)]
    pub unsafe fn new(account: &'a AccountView) -> Result<MyAccountView<'a>, XbasicError> {
        if !account.owned_by(&crate::ID) {
            return Err(XbasicError::InvalidAccountOwner);
        }

        let data = unsafe { account.borrow_unchecked() };
        MyAccount::load(data)?;

        Ok(Self { account })
    }

    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` My account
    #[inline(always)]
    pub unsafe fn load_unchecked_mut(&mut self) -> &mut MyAccount {
        let data = unsafe { self.account.borrow_unchecked_mut() };
        // Safety: `Self::new` verified the owner, length and discriminant.
        unsafe { MyAccount::load_unchecked_mut(data) }
    }
}
