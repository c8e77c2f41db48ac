use pinocchio::{
    account::AccountView,
    Address,
};
use xbasic_interface::{
    error::XbasicError,
    state::{
        transmutable::Transmutable,
        visitor_state::VisitorState,
    },
    visitor_state_seeds,
};

#[derive(Clone)]
pub struct VisitorStateView<'a> {
    account: &'a AccountView,
}

impl<'a> VisitorStateView<'a> {
    /// Checks that the account is a program-owned [`VisitorState`] whose address re-derives from
    /// `visitor`, the visitor seed and the stored bump.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Visitor state
    #[inline(always)]
    pub unsafe fn new(
        account: &'a AccountView,
        visitor: &Address,
    ) -> Result<VisitorStateView<'a>, XbasicError> {
        if !account.owned_by(&crate::ID) {
            return Err(XbasicError::InvalidAccountOwner);
        }

        let data = unsafe { account.borrow_unchecked() };
        let bump = VisitorState::load(data)?.bump;

        let expected =
            Address::create_program_address(visitor_state_seeds!(visitor, bump), &crate::ID)
                .map_err(|_| XbasicError::InvalidVisitorState)?;

        if account.address() != &expected {
            return Err(XbasicError::InvalidVisitorState);
        }

        Ok(Self { account })
    }

    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Visitor state
    #[inline(always)]
    pub unsafe fn load_unchecked_mut(&mut self) -> &mut VisitorState {
        let data = unsafe { self.account.borrow_unchecked_mut() };
        // Safety: `Self::new` verified the owner, length and discriminant.
        unsafe { VisitorState::load_unchecked_mut(data) }
    }
}
