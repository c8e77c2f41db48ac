//! Contextual helpers that hold the addresses an instruction family needs and build or send its
//! instructions.

pub mod token;
pub mod xbasic;
