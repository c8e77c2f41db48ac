//! See [`MyAccount`].

use static_assertions::const_assert_eq;

use crate::{
    error::XbasicResult,
    state::{
        check_discriminant,
        transmutable::Transmutable,
        LeU64,
    },
};

/// First 8 bytes of `sha256("account:MyAccount")`.
pub const MY_ACCOUNT_DISCRIMINANT: u64 = 0x2a322dfb57061cf6;

/// A keypair-addressed account holding a single u64 value that can be overwritten at will.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MyAccount {
    discriminant: LeU64,
    data: LeU64,
}

impl MyAccount {
    pub fn new(data: u64) -> Self {
        Self {
            discriminant: MY_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            data: data.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn data(&self) -> u64 {
        u64::from_le_bytes(self.data)
    }

    #[inline(always)]
    pub fn set_data(&mut self, data: u64) {
        self.data = data.to_le_bytes();
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - Only the discriminant is constrained.
unsafe impl Transmutable for MyAccount {
    const LEN: usize = 16;

    #[inline(always)]
    fn validate_bit_patterns(bytes: &[u8]) -> XbasicResult {
        check_discriminant(bytes, MY_ACCOUNT_DISCRIMINANT)
    }
}

const_assert_eq!(MyAccount::LEN, size_of::<MyAccount>());
const_assert_eq!(align_of::<MyAccount>(), 1);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XbasicError;

    #[test]
    fn load_and_update() {
        let mut bytes = [0u8; MyAccount::LEN];
        bytes.copy_from_slice(MyAccount::new(1234).as_bytes());

        let account = MyAccount::load_mut(&mut bytes).unwrap();
        assert_eq!(account.data(), 1234);
        account.set_data(4321);

        assert_eq!(MyAccount::load(&bytes).unwrap().data(), 4321);
        assert_eq!(&bytes[8..], &4321u64.to_le_bytes());
    }

    #[test]
    fn rejects_zeroed_and_short_data() {
        assert_eq!(
            MyAccount::load(&[0u8; MyAccount::LEN]),
            Err(XbasicError::AccountNotInitialized)
        );
        assert_eq!(
            MyAccount::load(&[0u8; 8]),
            Err(XbasicError::InvalidAccountLength)
        );
    }
}
