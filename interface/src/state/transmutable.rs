// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// Original: https://github.com/solana-program/token/blob/75116550519a9ee3fdfa6c819aca91e383fffa39/p-interface/src/state/mod.rs

use crate::error::{
    XbasicError,
    XbasicResult,
};

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast.
///
/// # Safety
///
/// Implementor guarantees:
/// - `Self` has a stable layout; i.e. `#[repr(C)]` or `#[repr(transparent)]`
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
/// - `validate_bit_patterns` returns `Ok(())` only when `bytes` is a valid representation of `Self`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;

    /// Validates that `bytes` represents a valid `Self`. Implementors may assume
    /// `bytes.len() == Self::LEN`.
    fn validate_bit_patterns(bytes: &[u8]) -> XbasicResult;

    #[inline(always)]
    fn check_len(bytes: &[u8]) -> XbasicResult {
        if bytes.len() != Self::LEN {
            return Err(XbasicError::InvalidAccountLength);
        }
        Ok(())
    }

    /// Returns a reference to `Self` after checking the length and bit patterns of `bytes`.
    #[inline(always)]
    fn load(bytes: &[u8]) -> Result<&Self, XbasicError> {
        Self::check_len(bytes)?;
        Self::validate_bit_patterns(bytes)?;

        // Safety: All bit patterns were validated and `bytes.len() == Self::LEN`.
        unsafe { Ok(&*(bytes.as_ptr() as *const Self)) }
    }

    /// Returns a mutable reference to `Self` after checking the length and bit patterns of
    /// `bytes`.
    #[inline(always)]
    fn load_mut(bytes: &mut [u8]) -> Result<&mut Self, XbasicError> {
        Self::check_len(bytes)?;
        Self::validate_bit_patterns(bytes)?;

        // Safety: All bit patterns were validated and `bytes.len() == Self::LEN`.
        unsafe { Ok(&mut *(bytes.as_mut_ptr() as *mut Self)) }
    }

    /// # Safety
    ///
    /// Caller guarantees `bytes.len() == Self::LEN` and that `bytes` is a valid `Self`.
    #[inline(always)]
    unsafe fn load_unchecked(bytes: &[u8]) -> &Self {
        &*(bytes.as_ptr() as *const Self)
    }

    /// # Safety
    ///
    /// Caller guarantees `bytes.len() == Self::LEN` and that `bytes` is a valid `Self`.
    #[inline(always)]
    unsafe fn load_unchecked_mut(bytes: &mut [u8]) -> &mut Self {
        &mut *(bytes.as_mut_ptr() as *mut Self)
    }

    /// Views `self` as its raw bytes.
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        // Safety: `Self` is exactly `Self::LEN` bytes with alignment 1.
        unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) }
    }
}

/// Validates that a byte is a canonical boolean.
#[inline(always)]
pub fn validate_bool_byte(byte: u8) -> XbasicResult {
    match byte {
        0 | 1 => Ok(()),
        _ => Err(XbasicError::InvalidBoolByte),
    }
}
