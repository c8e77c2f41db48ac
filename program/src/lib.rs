//! The `xbasic` on-chain program: a stored counter, per-visitor visit tracking and one-time token
//! checks escrowed in program-derived vaults.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod debug;
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod instructions;
pub mod shared;
pub mod validation;

pub use xbasic_interface::program::ID;
