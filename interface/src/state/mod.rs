//! On-chain account state for the `xbasic` program.
//!
//! Every account starts with an 8-byte discriminant, followed by its fields stored as
//! little-endian byte arrays so each layout has an alignment of 1.

use solana_address::Address;

use crate::error::{
    XbasicError,
    XbasicResult,
};

pub mod check;
pub mod my_account;
pub mod transmutable;
pub mod visitor_state;

pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const DISCRIMINANT_SIZE: usize = U64_SIZE;

/// Alias type for a u64 stored as little-endian bytes.
pub type LeU64 = [u8; U64_SIZE];

pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0; 32]);

/// Reads the u64 discriminant at the start of an account's data, if there is one.
#[inline(always)]
pub fn read_discriminant(data: &[u8]) -> Option<u64> {
    let bytes: &LeU64 = data.get(..DISCRIMINANT_SIZE)?.try_into().ok()?;
    Some(u64::from_le_bytes(*bytes))
}

/// Checks that the leading discriminant in `data` equals `expected`.
///
/// An all-zero discriminant means the account was allocated but never initialized.
#[inline(always)]
pub fn check_discriminant(data: &[u8], expected: u64) -> XbasicResult {
    match read_discriminant(data) {
        Some(d) if d == expected => Ok(()),
        Some(0) => Err(XbasicError::AccountNotInitialized),
        Some(_) => Err(XbasicError::InvalidAccountDiscriminant),
        None => Err(XbasicError::InvalidAccountLength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_checks() {
        let mut data = [0u8; 16];
        assert_eq!(
            check_discriminant(&data, 7),
            Err(XbasicError::AccountNotInitialized)
        );

        data[..8].copy_from_slice(&7u64.to_le_bytes());
        assert_eq!(check_discriminant(&data, 7), Ok(()));
        assert_eq!(
            check_discriminant(&data, 8),
            Err(XbasicError::InvalidAccountDiscriminant)
        );
        assert_eq!(
            check_discriminant(&data[..4], 7),
            Err(XbasicError::InvalidAccountLength)
        );
    }
}
