//! See [`CashCheckContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    check_account_view::CheckAccountView,
    program_ids::check_token_program,
    signers::{
        require_signer,
        require_writable,
    },
    token_account_view::TokenAccountView,
};

/// The account context for the `CashCheck` instruction.
///
/// Validates every account against the stored check except the check signer, whose derivation is
/// verified with the check's nonce by the instruction handler.
#[derive(Clone)]
pub struct CashCheckContext<'a> {
    pub check: CheckAccountView<'a>,
    pub vault: TokenAccountView<'a>,
    pub check_signer: &'a AccountView,
    pub to: TokenAccountView<'a>,
    pub owner: &'a AccountView,
    pub token_program: &'a AccountView,
}

impl<'a> CashCheckContext<'a> {
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check
    ///   1. `[WRITE]` Vault token account
    ///   2. `[READ]` Check signer
    ///   3. `[WRITE]` Receiver token account
    ///   4. `[READ, SIGNER]` Owner of the receiver token account
    ///   5. `[READ]` Token program
    pub unsafe fn load(accounts: &'a [AccountView]) -> Result<CashCheckContext<'a>, ProgramError> {
        let [check, vault, check_signer, to, owner, token_program, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        require_writable(check)?;
        require_writable(vault)?;
        require_writable(to)?;
        require_signer(owner)?;
        check_token_program(token_program)?;

        // Safety: Scoped immutable borrow of the check account to validate it.
        let check = unsafe { CheckAccountView::new(check) }?;
        {
            // Safety: Scoped immutable borrow of the check account.
            let stored = unsafe { check.load_unchecked() };
            stored.check_not_burned()?;
            if vault.address() != &stored.vault {
                return Err(XbasicError::VaultMismatch.into());
            }
            if to.address() != &stored.to {
                return Err(XbasicError::ReceiverMismatch.into());
            }
        }

        let vault = TokenAccountView::new(vault)?;
        let to = TokenAccountView::new(to)?;
        to.check_owner(owner.address())?;

        Ok(Self {
            check,
            vault,
            check_signer,
            to,
            owner,
            token_program,
        })
    }
}
