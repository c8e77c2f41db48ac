use pinocchio::account::AccountView;
use xbasic_interface::{
    error::XbasicError,
    state::{
        check::Check,
        transmutable::Transmutable,
    },
};

/// A program-owned account that was allocated with exactly [`Check::LEN`] zeroed bytes and has
/// never been written to.
#[derive(Clone)]
pub struct UninitializedCheckView<'a> {
    account: &'a AccountView,
}

impl<'a> UninitializedCheckView<'a> {
    #[inline(always)]
    pub fn account(&self) -> &'a AccountView {
        self.account
    }

    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Check
    #[inline(always)]
    pub unsafe fn new(account: &'a AccountView) -> Result<UninitializedCheckView<'a>, XbasicError> {
        if !account.owned_by(&crate::ID) {
            return Err(XbasicError::InvalidAccountOwner);
        }
        if account.data_len() != Check::LEN {
            return Err(XbasicError::InvalidAccountLength);
        }

        let data = unsafe { account.borrow_unchecked() };
        if data.iter().any(|byte| *byte != 0) {
            return Err(XbasicError::AlreadyInitializedAccount);
        }

        Ok(Self { account })
    }

    /// Writes `check` into the account, consuming the uninitialized view.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check
    #[inline(always)]
    pub unsafe fn initialize(self, check: &Check) {
        let data = unsafe { self.account.borrow_unchecked_mut() };
        // `Self::new` verified `data.len() == Check::LEN`.
        data.copy_from_slice(check.as_bytes());
    }
}
