//! Client-side utilities for the `xbasic` program.
//!
//! Includes instruction builders, RPC and mollusk harnesses, account snapshot views, PDA
//! derivations and the scenario runner.

pub mod context;
pub mod e2e_helpers;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod scenarios;
pub mod token_instructions;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
