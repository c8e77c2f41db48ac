//! Account context definitions for each `xbasic` instruction.
//!
//! Each context groups and validates the accounts required by its corresponding instruction before
//! execution.

pub mod cash_check_context;
pub mod create_check_context;
pub mod initialize_context;
pub mod introduce_yourself_context;
pub mod update_context;
pub mod visit_context;
