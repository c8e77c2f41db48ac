//! Account validation wrappers. Each view checks an account's owner, layout and flags once so the
//! instruction handlers can borrow its data without repeating those checks.

pub mod check_account_view;
pub mod my_account_view;
pub mod program_ids;
pub mod signers;
pub mod token_account_view;
pub mod uninitialized_check_view;
pub mod visitor_state_view;
