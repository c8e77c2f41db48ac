use client::{
    context::xbasic::XbasicContext,
    mollusk_helpers::{
        new_xbasic_mollusk_context,
        program_account,
        program_error,
        system_account,
        XbasicMolluskContext,
        MOLLUSK_DEFAULT_LAMPORTS,
    },
    pda::find_visitor_state_address,
    views::VisitorStateView,
};
use solana_address::Address;
use xbasic_interface::{
    error::XbasicError,
    instructions::{
        client::IntroduceYourself,
        IntroduceYourselfInstructionData,
    },
    state::{
        transmutable::Transmutable,
        visitor_state::VisitorState,
    },
};

fn view_visitor_state(mollusk: &XbasicMolluskContext, visitor: &Address) -> VisitorStateView {
    let (visitor_state, _bump) = find_visitor_state_address(visitor);
    let store = mollusk.account_store.borrow();
    let account = store.get(&visitor_state).expect("Visitor state should exist");
    VisitorStateView::try_from_owner_and_data(account.owner, &account.data)
        .expect("Should decode VisitorState")
}

fn new_payer_and_visitor() -> (XbasicMolluskContext, Address, Address) {
    let payer = Address::new_unique();
    let visitor = Address::new_unique();
    let mollusk = new_xbasic_mollusk_context(vec![
        (payer, system_account(MOLLUSK_DEFAULT_LAMPORTS)),
        (visitor, system_account(MOLLUSK_DEFAULT_LAMPORTS)),
    ]);
    (mollusk, payer, visitor)
}

#[test]
fn introduce_then_visit() {
    let (mollusk, payer, visitor) = new_payer_and_visitor();
    let (_, bump) = find_visitor_state_address(&visitor);

    let introduce = XbasicContext.introduce_yourself(payer, visitor);
    assert!(mollusk
        .process_instruction(&introduce)
        .program_result
        .is_ok());
    assert_eq!(
        view_visitor_state(&mollusk, &visitor),
        VisitorStateView {
            visit_count: 1,
            bump
        }
    );

    for expected in 2..=4 {
        let visit = XbasicContext.visit(visitor);
        assert!(mollusk.process_instruction(&visit).program_result.is_ok());
        assert_eq!(view_visitor_state(&mollusk, &visitor).visit_count, expected);
    }
}

#[test]
fn visitors_are_counted_separately() {
    let (mollusk, payer, alice) = new_payer_and_visitor();
    let bob = Address::new_unique();

    let result = mollusk.process_instruction_chain(&[
        XbasicContext.introduce_yourself(payer, alice),
        XbasicContext.introduce_yourself(payer, bob),
        XbasicContext.visit(alice),
        XbasicContext.visit(alice),
    ]);
    assert!(result.program_result.is_ok());

    assert_eq!(view_visitor_state(&mollusk, &alice).visit_count, 3);
    assert_eq!(view_visitor_state(&mollusk, &bob).visit_count, 1);
}

#[test]
fn introducing_twice_fails() {
    let (mollusk, payer, visitor) = new_payer_and_visitor();

    let introduce = XbasicContext.introduce_yourself(payer, visitor);
    assert!(mollusk
        .process_instruction(&introduce)
        .program_result
        .is_ok());
    assert!(mollusk
        .process_instruction(&introduce)
        .program_result
        .is_err());
    assert_eq!(view_visitor_state(&mollusk, &visitor).visit_count, 1);
}

#[test]
fn introduce_rejects_a_wrong_bump() {
    let (mollusk, payer, visitor) = new_payer_and_visitor();
    let (visitor_state, bump) = find_visitor_state_address(&visitor);

    let introduce = IntroduceYourself {
        payer,
        visitor,
        visitor_state,
    }
    .create_instruction(IntroduceYourselfInstructionData::new(bump.wrapping_sub(1)));
    let result = mollusk.process_instruction(&introduce);
    assert_eq!(
        program_error(&result),
        Some(XbasicError::InvalidVisitorState)
    );
}

#[test]
fn visit_rejects_another_visitors_state() {
    let (mollusk, payer, alice) = new_payer_and_visitor();
    let mallory = Address::new_unique();

    let introduce = XbasicContext.introduce_yourself(payer, alice);
    assert!(mollusk
        .process_instruction(&introduce)
        .program_result
        .is_ok());

    // Mallory signs but points at alice's state.
    let mut visit = XbasicContext.visit(mallory);
    visit.accounts[1].pubkey = find_visitor_state_address(&alice).0;
    let result = mollusk.process_instruction(&visit);
    assert_eq!(
        program_error(&result),
        Some(XbasicError::InvalidVisitorState)
    );
    assert_eq!(view_visitor_state(&mollusk, &alice).visit_count, 1);
}

#[test]
fn visit_requires_the_visitor_signature() {
    let (mollusk, payer, visitor) = new_payer_and_visitor();
    let introduce = XbasicContext.introduce_yourself(payer, visitor);
    assert!(mollusk
        .process_instruction(&introduce)
        .program_result
        .is_ok());

    let mut visit = XbasicContext.visit(visitor);
    visit.accounts[0].is_signer = false;
    let result = mollusk.process_instruction(&visit);
    assert_eq!(
        program_error(&result),
        Some(XbasicError::MissingRequiredSignature)
    );
}

#[test]
fn visit_count_overflow_is_an_error() {
    let visitor = Address::new_unique();
    let (visitor_state, bump) = find_visitor_state_address(&visitor);

    let mut data = VisitorState::new(bump).as_bytes().to_vec();
    data[8..16].copy_from_slice(&u64::MAX.to_le_bytes());
    let mollusk = new_xbasic_mollusk_context(vec![
        (visitor, system_account(MOLLUSK_DEFAULT_LAMPORTS)),
        (visitor_state, program_account(&data)),
    ]);

    let result = mollusk.process_instruction(&XbasicContext.visit(visitor));
    assert_eq!(
        program_error(&result),
        Some(XbasicError::ArithmeticOverflow)
    );
    assert_eq!(
        view_visitor_state(&mollusk, &visitor).visit_count,
        u64::MAX
    );
}
