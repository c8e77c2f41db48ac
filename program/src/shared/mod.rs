//! Shared utilities and helpers for `xbasic` program logic.

pub mod create_account;
pub mod seeds;
pub mod token_transfers;
