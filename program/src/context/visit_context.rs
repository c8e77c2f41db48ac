//! See [`VisitContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    signers::{
        require_signer,
        require_writable,
    },
    visitor_state_view::VisitorStateView,
};

/// The account context for the `Visit` instruction.
#[derive(Clone)]
pub struct VisitContext<'a> {
    pub visitor: &'a AccountView,
    pub visitor_state: VisitorStateView<'a>,
}

impl<'a> VisitContext<'a> {
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ, SIGNER]` Visitor
    ///   1. `[WRITE]` Visitor state
    pub unsafe fn load(accounts: &'a [AccountView]) -> Result<VisitContext<'a>, ProgramError> {
        let [visitor, visitor_state, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        require_signer(visitor)?;
        require_writable(visitor_state)?;
        // Safety: Scoped immutable borrow of the visitor state to validate it.
        let visitor_state = unsafe { VisitorStateView::new(visitor_state, visitor.address()) }?;

        Ok(Self {
            visitor,
            visitor_state,
        })
    }
}
