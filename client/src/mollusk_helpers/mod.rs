//! In-process SVM helpers: a [`MolluskContext`] loaded with the built `xbasic` program and the SPL
//! token program, plus builders for the accounts the program's instructions expect.

use std::{
    collections::HashMap,
    path::PathBuf,
};

use mollusk_svm::{
    result::InstructionResult,
    Mollusk,
    MolluskContext,
};
use solana_account::Account;
use solana_address::Address;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    program_pack::Pack,
    rent::Rent,
};
use spl_token_interface::state::{
    Account as TokenAccount,
    AccountState,
    Mint,
};
use xbasic_interface::{
    error::XbasicError,
    state::{
        check::Check,
        transmutable::Transmutable,
        SYSTEM_PROGRAM_ID,
    },
};

use crate::context::xbasic::CheckAddresses;

pub type XbasicMolluskContext = MolluskContext<HashMap<Address, Account>>;

pub const MOLLUSK_DEFAULT_LAMPORTS: u64 = 100_000_000_000;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `xbasic.so` would return the absolute path version of
/// `../target/deploy/xbasic`, which is exactly what [`Mollusk::new`] expects.
///
/// Panics when the deploy file doesn't exist yet, i.e. `cargo build-sbf` hasn't been run.
fn deploy_file_to_program_name(program_name: &str) -> String {
    let deploy_file = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target/deploy/")
        .join(program_name);
    let path = deploy_file.canonicalize().unwrap_or_else(|e| {
        panic!(
            "{} is missing ({e}); run `cargo build-sbf` before the mollusk tests",
            deploy_file.display()
        )
    });

    path.to_str()
        .expect("Path should convert to a &str")
        .strip_suffix(".so")
        .expect("Deploy file should have an `.so` suffix")
        .to_string()
}

/// Creates and returns a [`MolluskContext`] with the `xbasic` program, the SPL token program and
/// the passed accounts already created.
pub fn new_xbasic_mollusk_context(accounts: Vec<(Address, Account)>) -> XbasicMolluskContext {
    let mut mollusk = Mollusk::new(&xbasic::ID, &deploy_file_to_program_name("xbasic.so"));
    mollusk_svm_programs_token::token::add_program(&mut mollusk);

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}

/// A system-owned wallet with no data.
pub fn system_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &SYSTEM_PROGRAM_ID)
}

/// A rent exempt, program-owned account of `data.len()` bytes.
pub fn program_account(data: &[u8]) -> Account {
    Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data: data.to_vec(),
        owner: xbasic::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// The zeroed, program-owned account `CreateCheck` expects as its check.
pub fn zeroed_check_account() -> Account {
    program_account(&[0; Check::LEN])
}

pub fn mint_account(mint_authority: &Address, supply: u64, decimals: u8) -> Account {
    let mint = Mint {
        mint_authority: Some(*mint_authority).into(),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: None.into(),
    };
    let mut data = vec![0; Mint::LEN];
    Mint::pack(mint, &mut data).expect("Mint should pack into Mint::LEN bytes");

    Account {
        lamports: Rent::default().minimum_balance(Mint::LEN),
        data,
        owner: spl_token_interface::ID,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn token_account(mint: &Address, owner: &Address, amount: u64) -> Account {
    let token_account = TokenAccount {
        mint: *mint,
        owner: *owner,
        amount,
        state: AccountState::Initialized,
        ..Default::default()
    };
    let mut data = vec![0; TokenAccount::LEN];
    TokenAccount::pack(token_account, &mut data)
        .expect("Token account should pack into Account::LEN bytes");

    Account {
        lamports: Rent::default().minimum_balance(TokenAccount::LEN),
        data,
        owner: spl_token_interface::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Every address involved in creating and cashing a single check, with the accounts seeded into
/// a mollusk context by [`CheckFixture::seed`].
#[derive(Clone, Copy, Debug)]
pub struct CheckFixture {
    pub mint: Address,
    /// Owns `from`.
    pub sender: Address,
    pub from: Address,
    /// Owns `to`.
    pub receiver: Address,
    pub to: Address,
    pub check: CheckAddresses,
}

impl CheckFixture {
    /// Seeds a mint, a sender token account holding `sender_balance`, an empty receiver token
    /// account, an empty vault owned by the check signer, and a zeroed check account.
    pub fn seed(context: &XbasicMolluskContext, sender_balance: u64) -> Self {
        let fixture = Self {
            mint: Address::new_unique(),
            sender: Address::new_unique(),
            from: Address::new_unique(),
            receiver: Address::new_unique(),
            to: Address::new_unique(),
            check: CheckAddresses::new(Address::new_unique(), Address::new_unique()),
        };

        let accounts = [
            (
                fixture.mint,
                mint_account(&Address::new_unique(), sender_balance, 6),
            ),
            (fixture.sender, system_account(MOLLUSK_DEFAULT_LAMPORTS)),
            (fixture.receiver, system_account(MOLLUSK_DEFAULT_LAMPORTS)),
            (
                fixture.from,
                token_account(&fixture.mint, &fixture.sender, sender_balance),
            ),
            (
                fixture.to,
                token_account(&fixture.mint, &fixture.receiver, 0),
            ),
            (
                fixture.check.vault,
                token_account(&fixture.mint, &fixture.check.check_signer, 0),
            ),
            (fixture.check.check, zeroed_check_account()),
        ];

        let mut store = context.account_store.borrow_mut();
        for (address, account) in accounts {
            store.insert(address, account);
        }

        fixture
    }
}

/// Reads the token balance of a seeded token account.
pub fn token_balance(context: &XbasicMolluskContext, token_account: &Address) -> Option<u64> {
    let store = context.account_store.borrow();
    let account = store.get(token_account)?;
    TokenAccount::unpack(&account.data)
        .ok()
        .map(|account| account.amount)
}

/// Decodes the [`XbasicError`] an instruction failed with, if it failed with one.
pub fn program_error(result: &InstructionResult) -> Option<XbasicError> {
    match result.raw_result {
        Err(InstructionError::Custom(code)) => XbasicError::from_code(code),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::TokenAccountView;

    #[test]
    fn xbasic_program_path() {
        let xbasic = deploy_file_to_program_name("xbasic.so");
        assert!(xbasic.ends_with("xbasic"));

        // Ensure the program deploy path is a valid file.
        assert!(PathBuf::from([xbasic.as_str(), ".so"].concat()).is_file());
    }

    #[test]
    #[should_panic(expected = "run `cargo build-sbf`")]
    fn missing_deploy_file_names_the_build_step() {
        deploy_file_to_program_name("not_built.so");
    }

    #[test]
    fn seeded_token_accounts_decode() -> anyhow::Result<()> {
        let owner = Address::new_unique();
        let mint = Address::new_unique();
        let account = token_account(&mint, &owner, 77);

        let view = TokenAccountView::try_from_owner_and_data(account.owner, &account.data)?;
        assert_eq!(view.owner, owner);
        assert_eq!(view.mint, mint);
        assert_eq!(view.amount, 77);
        Ok(())
    }

    #[test]
    fn check_fixture_seeds_every_account() {
        let context = new_xbasic_mollusk_context(vec![]);
        let fixture = CheckFixture::seed(&context, 1_000);

        assert_eq!(token_balance(&context, &fixture.from), Some(1_000));
        assert_eq!(token_balance(&context, &fixture.to), Some(0));
        assert_eq!(token_balance(&context, &fixture.check.vault), Some(0));

        let store = context.account_store.borrow();
        let check = store.get(&fixture.check.check).expect("Check should be seeded");
        assert_eq!(check.owner, xbasic::ID);
        assert!(check.data.iter().all(|b| *b == 0));
    }
}
