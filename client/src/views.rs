//! Read-only snapshot views that decode `xbasic` and SPL token accounts into plain Rust structs.
//!
//! A view is a point-in-time copy of an account. Observing later changes requires fetching and
//! decoding the account again.

use anyhow::{
    bail,
    Context,
};
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use xbasic_interface::state::{
    check::Check,
    my_account::MyAccount,
    transmutable::Transmutable,
    visitor_state::VisitorState,
};

fn check_program_owner(owner: &Address) -> anyhow::Result<()> {
    if owner != &xbasic::ID {
        bail!("Account isn't owned by the xbasic program. Owner: {owner}");
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MyAccountView {
    pub data: u64,
}

impl MyAccountView {
    pub fn try_from_owner_and_data(owner: Address, data: &[u8]) -> anyhow::Result<Self> {
        check_program_owner(&owner)?;
        let account = MyAccount::load(data).context("Invalid MyAccount data")?;
        Ok(Self {
            data: account.data(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitorStateView {
    pub visit_count: u64,
    pub bump: u8,
}

impl VisitorStateView {
    pub fn try_from_owner_and_data(owner: Address, data: &[u8]) -> anyhow::Result<Self> {
        check_program_owner(&owner)?;
        let state = VisitorState::load(data).context("Invalid VisitorState data")?;
        Ok(Self {
            visit_count: state.visit_count(),
            bump: state.bump,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckView {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    pub vault: Address,
    pub nonce: u8,
    pub burned: bool,
    pub memo: Option<String>,
}

impl CheckView {
    pub fn try_from_owner_and_data(owner: Address, data: &[u8]) -> anyhow::Result<Self> {
        check_program_owner(&owner)?;
        let check = Check::load(data).context("Invalid Check data")?;
        Ok(Self {
            from: check.from,
            to: check.to,
            amount: check.amount(),
            vault: check.vault,
            nonce: check.nonce,
            burned: check.burned(),
            memo: check
                .memo()
                .map(|memo| String::from_utf8_lossy(memo).into_owned()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountView {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
}

impl TokenAccountView {
    /// `owner` is the account's program owner, which must be the SPL token program. The token
    /// account's own authority is [`TokenAccountView::owner`].
    pub fn try_from_owner_and_data(owner: Address, data: &[u8]) -> anyhow::Result<Self> {
        if owner != spl_token_interface::ID {
            bail!("Account isn't owned by the SPL token program. Owner: {owner}");
        }
        let account = spl_token_interface::state::Account::unpack(data)
            .context("Invalid SPL token account data")?;
        Ok(Self {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_program_accounts() -> anyhow::Result<()> {
        let view = MyAccountView::try_from_owner_and_data(
            xbasic::ID,
            MyAccount::new(1234).as_bytes(),
        )?;
        assert_eq!(view.data, 1234);

        let view = VisitorStateView::try_from_owner_and_data(
            xbasic::ID,
            VisitorState::new(254).as_bytes(),
        )?;
        assert_eq!(
            view,
            VisitorStateView {
                visit_count: 1,
                bump: 254
            }
        );

        let check = Check::new(
            Address::new_unique(),
            Address::new_unique(),
            100,
            Address::new_unique(),
            255,
            Some(&b"gm"[..]),
        )?;
        let view = CheckView::try_from_owner_and_data(xbasic::ID, check.as_bytes())?;
        assert_eq!(view.amount, 100);
        assert_eq!(view.memo.as_deref(), Some("gm"));
        assert!(!view.burned);
        Ok(())
    }

    #[test]
    fn rejects_wrong_owner_or_layout() {
        let data = MyAccount::new(1).as_bytes().to_vec();
        assert!(MyAccountView::try_from_owner_and_data(Address::new_unique(), &data).is_err());
        // A `MyAccount` isn't a `VisitorState`.
        assert!(VisitorStateView::try_from_owner_and_data(xbasic::ID, &data).is_err());
        assert!(CheckView::try_from_owner_and_data(xbasic::ID, &[0; Check::LEN]).is_err());
    }

    #[test]
    fn decodes_token_accounts() -> anyhow::Result<()> {
        let account = spl_token_interface::state::Account {
            mint: Address::new_unique(),
            owner: Address::new_unique(),
            amount: 42,
            state: spl_token_interface::state::AccountState::Initialized,
            ..Default::default()
        };
        let mut data = vec![0; spl_token_interface::state::Account::LEN];
        spl_token_interface::state::Account::pack(account, &mut data)?;

        let view = TokenAccountView::try_from_owner_and_data(spl_token_interface::ID, &data)?;
        assert_eq!(view.amount, 42);
        assert_eq!(view.mint, account.mint);
        assert!(TokenAccountView::try_from_owner_and_data(xbasic::ID, &data).is_err());
        Ok(())
    }
}
