use pinocchio::account::AccountView;
use xbasic_interface::{
    error::XbasicError,
    state::{
        check::Check,
        transmutable::Transmutable,
    },
};

#[derive(Clone)]
pub struct CheckAccountView<'a> {
    account: &'a AccountView,
}

impl<'a> CheckAccountView<'a> {
    #[inline(always)]
    pub fn account(&self) -> &'a AccountView {
        self.account
    }

    /// Checks that the account is owned by this program and holds an initialized [`Check`].
    ///
    /// Whether the check is burned is left to the caller.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Check
    #[inline(always)]
    pub unsafe fn new(account: &'a AccountView) -> Result<CheckAccountView<'a>, XbasicError> {
        if !account.owned_by(&crate::ID) {
            return Err(XbasicError::InvalidAccountOwner);
        }

        let data = unsafe { account.borrow_unchecked() };
        Check::load(data)?;

        Ok(Self { account })
    }

    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Check
    #[inline(always)]
    pub unsafe fn load_unchecked(&self) -> &Check {
        let data = unsafe { self.account.borrow_unchecked() };
        // Safety: `Self::new` verified the owner, length and bit patterns.
        unsafe { Check::load_unchecked(data) }
    }

    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check
    #[inline(always)]
    pub unsafe fn load_unchecked_mut(&mut self) -> &mut Check {
        let data = unsafe { self.account.borrow_unchecked_mut() };
        // Safety: `Self::new` verified the owner, length and bit patterns.
        unsafe { Check::load_unchecked_mut(data) }
    }
}
