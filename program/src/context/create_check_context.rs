//! See [`CreateCheckContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use xbasic_interface::error::XbasicError;

use crate::validation::{
    program_ids::check_token_program,
    signers::{
        require_signer,
        require_writable,
    },
    token_account_view::TokenAccountView,
    uninitialized_check_view::UninitializedCheckView,
};

/// The account context for the `CreateCheck` instruction.
///
/// The check signer's derivation depends on the nonce in the instruction data, so it's verified
/// by the instruction handler rather than here.
#[derive(Clone)]
pub struct CreateCheckContext<'a> {
    pub check: UninitializedCheckView<'a>,
    pub vault: TokenAccountView<'a>,
    pub check_signer: &'a AccountView,
    pub from: TokenAccountView<'a>,
    pub to: TokenAccountView<'a>,
    pub owner: &'a AccountView,
    pub token_program: &'a AccountView,
}

impl<'a> CreateCheckContext<'a> {
    /// # Safety
    ///
    /// Caller guarantees:
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check
    ///   1. `[WRITE]` Vault token account
    ///   2. `[READ]` Check signer
    ///   3. `[WRITE]` Source token account
    ///   4. `[READ]` Receiver token account
    ///   5. `[READ, SIGNER]` Owner
    ///   6. `[READ]` Token program
    pub unsafe fn load(
        accounts: &'a [AccountView],
    ) -> Result<CreateCheckContext<'a>, ProgramError> {
        let [check, vault, check_signer, from, to, owner, token_program, ..] = accounts else {
            return Err(XbasicError::NotEnoughAccountKeys.into());
        };

        require_writable(check)?;
        require_writable(vault)?;
        require_writable(from)?;
        require_signer(owner)?;
        check_token_program(token_program)?;

        // Safety: Scoped immutable borrow of the check account to verify it's zeroed.
        let check = unsafe { UninitializedCheckView::new(check) }?;

        let vault = TokenAccountView::new(vault)?;
        let from = TokenAccountView::new(from)?;
        let to = TokenAccountView::new(to)?;

        if &vault.owner != check_signer.address() {
            return Err(XbasicError::VaultOwnerMismatch.into());
        }
        from.check_owner(owner.address())?;
        from.check_mint(&vault.mint)?;
        to.check_mint(&vault.mint)?;

        Ok(Self {
            check,
            vault,
            check_signer,
            from,
            to,
            owner,
            token_program,
        })
    }
}
