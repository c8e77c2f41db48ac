//! Public interface layer for the `xbasic` program: instruction layouts, account state, error
//! codes and PDA seeds shared by the on-chain program and its clients.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod pack;
pub mod seeds;
pub mod state;

pub mod program {
    solana_address::declare_id!("2j4NMzDYQPLpS2HKLR7EnzPt5MXBt3fT9PeWTvUAznQp");
}
