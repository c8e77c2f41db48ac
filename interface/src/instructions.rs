//! Instruction tags and instruction data layouts for the `xbasic` program.
//!
//! Instruction data is a single tag byte followed by the instruction's packed little-endian
//! arguments. The `client` feature adds [`crate::instructions::client`], which builds complete
//! `solana_instruction::Instruction`s from account addresses and arguments.

use crate::error::XbasicError;

pub mod create_check;
pub mod introduce_yourself;
pub mod set_data;

#[cfg(feature = "client")]
pub mod client;

pub use create_check::CreateCheckInstructionData;
pub use introduce_yourself::IntroduceYourselfInstructionData;
pub use set_data::SetDataInstructionData;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum XbasicInstruction {
    /// Creates and initializes a keypair-addressed [`crate::state::my_account::MyAccount`].
    ///
    /// ### Accounts
    ///   0. `[WRITE, SIGNER]` My account
    ///   1. `[WRITE, SIGNER]` User (payer)
    ///   2. `[READ]` System program
    Initialize,

    /// Overwrites the value stored in a [`crate::state::my_account::MyAccount`].
    ///
    /// ### Accounts
    ///   0. `[WRITE]` My account
    Update,

    /// Creates the visitor's [`crate::state::visitor_state::VisitorState`] PDA.
    ///
    /// ### Accounts
    ///   0. `[WRITE, SIGNER]` Payer
    ///   1. `[READ, SIGNER]` Visitor
    ///   2. `[WRITE]` Visitor state PDA
    ///   3. `[READ]` System program
    IntroduceYourself,

    /// Increments the visitor's visit count.
    ///
    /// ### Accounts
    ///   0. `[READ, SIGNER]` Visitor
    ///   1. `[WRITE]` Visitor state PDA
    Visit,

    /// Escrows tokens into a check's vault and records the check.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check (pre-allocated, program owned, zeroed)
    ///   1. `[WRITE]` Vault token account, owned by the check signer
    ///   2. `[READ]` Check signer PDA
    ///   3. `[WRITE]` Source token account
    ///   4. `[READ]` Receiver token account
    ///   5. `[READ, SIGNER]` Owner of the source token account
    ///   6. `[READ]` SPL token program
    CreateCheck,

    /// Pays a check's vault out to its receiver and burns the check.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Check
    ///   1. `[WRITE]` Vault token account
    ///   2. `[READ]` Check signer PDA
    ///   3. `[WRITE]` Receiver token account
    ///   4. `[READ, SIGNER]` Owner of the receiver token account
    ///   5. `[READ]` SPL token program
    CashCheck,
}

impl TryFrom<u8> for XbasicInstruction {
    type Error = XbasicError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(XbasicInstruction::Initialize),
            1 => Ok(XbasicInstruction::Update),
            2 => Ok(XbasicInstruction::IntroduceYourself),
            3 => Ok(XbasicInstruction::Visit),
            4 => Ok(XbasicInstruction::CreateCheck),
            5 => Ok(XbasicInstruction::CashCheck),
            _ => Err(XbasicError::InvalidInstructionTag),
        }
    }
}

/// Checks that an instruction without arguments received no instruction data.
#[inline(always)]
pub fn expect_empty_data(instruction_data: &[u8]) -> Result<(), XbasicError> {
    if !instruction_data.is_empty() {
        return Err(XbasicError::InvalidInstructionData);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    extern crate std;
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ixn_tag_try_from_u8_happy_path() {
        for variant in XbasicInstruction::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                XbasicInstruction::from_repr(variant_u8).unwrap(),
                XbasicInstruction::try_from(variant_u8).unwrap(),
            );
            assert_eq!(XbasicInstruction::try_from(variant_u8).unwrap(), variant);
        }
    }

    #[test]
    fn test_ixn_tag_try_from_u8_exhaustive() {
        let valids = XbasicInstruction::iter()
            .map(|v| v as u8)
            .collect::<HashSet<_>>();

        for v in 0..=u8::MAX {
            if valids.contains(&v) {
                assert_eq!(XbasicInstruction::try_from(v).unwrap() as u8, v);
            } else {
                assert_eq!(
                    XbasicInstruction::try_from(v),
                    Err(XbasicError::InvalidInstructionTag)
                );
            }
        }
    }

    #[test]
    fn empty_data_only() {
        assert!(expect_empty_data(&[]).is_ok());
        assert_eq!(
            expect_empty_data(&[0]),
            Err(XbasicError::InvalidInstructionData)
        );
    }
}
