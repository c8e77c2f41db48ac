use client::{
    context::xbasic::{
        CheckAddresses,
        XbasicContext,
    },
    mollusk_helpers::{
        new_xbasic_mollusk_context,
        program_error,
        token_account,
        token_balance,
        CheckFixture,
        XbasicMolluskContext,
    },
    views::CheckView,
};
use solana_address::Address;
use solana_instruction::Instruction;
use xbasic_interface::error::XbasicError;

const SENDER_BALANCE: u64 = 1_000;
const AMOUNT: u64 = 100;
const GM: Option<&[u8]> = Some(b"gm".as_slice());

fn view_check(mollusk: &XbasicMolluskContext, check: &Address) -> CheckView {
    let store = mollusk.account_store.borrow();
    let account = store.get(check).expect("Check should exist");
    CheckView::try_from_owner_and_data(account.owner, &account.data).expect("Should decode Check")
}

fn create_check(fixture: &CheckFixture, amount: u64, memo: Option<&[u8]>) -> Instruction {
    XbasicContext.create_check(
        &fixture.check,
        fixture.from,
        fixture.to,
        fixture.sender,
        amount,
        memo,
    )
}

fn cash_check(fixture: &CheckFixture) -> Instruction {
    XbasicContext.cash_check(&fixture.check, fixture.to, fixture.receiver)
}

fn setup() -> (XbasicMolluskContext, CheckFixture) {
    let mollusk = new_xbasic_mollusk_context(vec![]);
    let fixture = CheckFixture::seed(&mollusk, SENDER_BALANCE);
    (mollusk, fixture)
}

#[test]
fn create_and_cash_a_check() {
    let (mollusk, fixture) = setup();

    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, GM));
    assert!(result.program_result.is_ok());

    let check = view_check(&mollusk, &fixture.check.check);
    assert_eq!(
        check,
        CheckView {
            from: fixture.from,
            to: fixture.to,
            amount: AMOUNT,
            vault: fixture.check.vault,
            nonce: fixture.check.nonce,
            burned: false,
            memo: Some("gm".into()),
        }
    );
    assert_eq!(
        token_balance(&mollusk, &fixture.from),
        Some(SENDER_BALANCE - AMOUNT)
    );
    assert_eq!(token_balance(&mollusk, &fixture.check.vault), Some(AMOUNT));

    let result = mollusk.process_instruction(&cash_check(&fixture));
    assert!(result.program_result.is_ok());

    assert!(view_check(&mollusk, &fixture.check.check).burned);
    assert_eq!(token_balance(&mollusk, &fixture.check.vault), Some(0));
    assert_eq!(token_balance(&mollusk, &fixture.to), Some(AMOUNT));
}

#[test]
fn a_check_is_cashed_exactly_once() {
    let (mollusk, fixture) = setup();

    let result = mollusk.process_instruction_chain(&[
        create_check(&fixture, AMOUNT, GM),
        cash_check(&fixture),
    ]);
    assert!(result.program_result.is_ok());

    let result = mollusk.process_instruction(&cash_check(&fixture));
    assert_eq!(program_error(&result), Some(XbasicError::AlreadyBurned));
    assert_eq!(token_balance(&mollusk, &fixture.to), Some(AMOUNT));
}

#[test]
fn memo_is_optional() {
    let (mollusk, fixture) = setup();

    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, None));
    assert!(result.program_result.is_ok());
    assert_eq!(view_check(&mollusk, &fixture.check.check).memo, None);
}

#[test]
fn only_gm_memos_are_accepted() {
    let (mollusk, fixture) = setup();

    let result =
        mollusk.process_instruction(&create_check(&fixture, AMOUNT, Some(&b"Hello world"[..])));
    assert_eq!(program_error(&result), Some(XbasicError::InvalidMessage));

    let too_long = [b'g'; 33];
    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, Some(&too_long[..])));
    assert_eq!(program_error(&result), Some(XbasicError::MemoTooLong));

    // Nothing moved.
    assert_eq!(token_balance(&mollusk, &fixture.from), Some(SENDER_BALANCE));
    assert_eq!(token_balance(&mollusk, &fixture.check.vault), Some(0));
}

#[test]
fn rejects_a_nonce_for_another_signer() {
    let (mollusk, fixture) = setup();

    let mut create = create_check(&fixture, AMOUNT, GM);
    // The nonce follows the tag and the amount.
    create.data[1 + 8] = fixture.check.nonce.wrapping_sub(1);
    let result = mollusk.process_instruction(&create);
    assert!(matches!(
        program_error(&result),
        Some(XbasicError::InvalidCheckNonce | XbasicError::InvalidCheckSigner)
    ));
}

#[test]
fn vault_must_be_owned_by_the_check_signer() {
    let (mollusk, fixture) = setup();
    let rogue_vault = Address::new_unique();
    mollusk.account_store.borrow_mut().insert(
        rogue_vault,
        token_account(&fixture.mint, &fixture.sender, 0),
    );

    let check = CheckAddresses {
        vault: rogue_vault,
        ..fixture.check
    };
    let create = XbasicContext.create_check(
        &check,
        fixture.from,
        fixture.to,
        fixture.sender,
        AMOUNT,
        GM,
    );
    let result = mollusk.process_instruction(&create);
    assert_eq!(program_error(&result), Some(XbasicError::VaultOwnerMismatch));
}

#[test]
fn token_accounts_must_share_a_mint() {
    let (mollusk, fixture) = setup();
    let other_mint_account = Address::new_unique();
    mollusk.account_store.borrow_mut().insert(
        other_mint_account,
        token_account(&Address::new_unique(), &fixture.receiver, 0),
    );

    let create = XbasicContext.create_check(
        &fixture.check,
        fixture.from,
        other_mint_account,
        fixture.sender,
        AMOUNT,
        GM,
    );
    let result = mollusk.process_instruction(&create);
    assert_eq!(program_error(&result), Some(XbasicError::MintMismatch));
}

#[test]
fn cannot_overwrite_an_existing_check() {
    let (mollusk, fixture) = setup();

    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, GM));
    assert!(result.program_result.is_ok());

    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, GM));
    assert_eq!(
        program_error(&result),
        Some(XbasicError::AlreadyInitializedAccount)
    );
}

#[test]
fn cannot_escrow_more_than_the_sender_holds() {
    let (mollusk, fixture) = setup();

    let result = mollusk.process_instruction(&create_check(&fixture, SENDER_BALANCE + 1, GM));
    assert!(result.program_result.is_err());
    assert_eq!(program_error(&result), None);

    let store = mollusk.account_store.borrow();
    assert!(store[&fixture.check.check].data.iter().all(|b| *b == 0));
}

#[test]
fn only_the_recorded_receiver_can_cash() {
    let (mollusk, fixture) = setup();
    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, GM));
    assert!(result.program_result.is_ok());

    // Another token account of the same mint, owned by the receiver.
    let other = Address::new_unique();
    mollusk.account_store.borrow_mut().insert(
        other,
        token_account(&fixture.mint, &fixture.receiver, 0),
    );
    let cash = XbasicContext.cash_check(&fixture.check, other, fixture.receiver);
    let result = mollusk.process_instruction(&cash);
    assert_eq!(program_error(&result), Some(XbasicError::ReceiverMismatch));

    // The recorded receiver account, signed for by someone who doesn't own it.
    let cash = XbasicContext.cash_check(&fixture.check, fixture.to, fixture.sender);
    let result = mollusk.process_instruction(&cash);
    assert_eq!(
        program_error(&result),
        Some(XbasicError::IncorrectTokenAccountOwner)
    );

    assert!(!view_check(&mollusk, &fixture.check.check).burned);
    assert_eq!(token_balance(&mollusk, &fixture.check.vault), Some(AMOUNT));
}

#[test]
fn cash_rejects_a_different_vault() {
    let (mollusk, fixture) = setup();
    let result = mollusk.process_instruction(&create_check(&fixture, AMOUNT, GM));
    assert!(result.program_result.is_ok());

    let check = CheckAddresses {
        vault: fixture.from,
        ..fixture.check
    };
    let cash = XbasicContext.cash_check(&check, fixture.to, fixture.receiver);
    let result = mollusk.process_instruction(&cash);
    assert_eq!(program_error(&result), Some(XbasicError::VaultMismatch));
}
