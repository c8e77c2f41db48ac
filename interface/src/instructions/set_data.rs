use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::XbasicError,
    pack::{
        write_bytes,
        Pack,
    },
    state::{
        transmutable::Transmutable,
        LeU64,
        U64_SIZE,
    },
};

/// Instruction data for both `Initialize` and `Update`: the u64 value to store.
#[repr(C)]
pub struct SetDataInstructionData {
    data: LeU64,
}

impl SetDataInstructionData {
    pub fn new(data: u64) -> Self {
        Self {
            data: data.to_le_bytes(),
        }
    }

    #[inline(always)]
    pub fn data(&self) -> u64 {
        u64::from_le_bytes(self.data)
    }

    /// Unpacks untagged instruction data, which must be exactly [`Self::LEN`] bytes.
    #[inline(always)]
    pub fn unpack(instruction_data: &[u8]) -> Result<&Self, XbasicError> {
        Self::load(instruction_data).map_err(|_| XbasicError::InvalidInstructionData)
    }
}

impl Pack<U64_SIZE> for SetDataInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; U64_SIZE]) {
        write_bytes(&mut dst[0..8], &self.data);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for SetDataInstructionData {
    const LEN: usize = U64_SIZE;

    #[inline(always)]
    fn validate_bit_patterns(_bytes: &[u8]) -> crate::error::XbasicResult {
        // All bit patterns are valid: no enums, bools, or other types with invalid states.
        Ok(())
    }
}

const_assert_eq!(
    SetDataInstructionData::LEN,
    size_of::<SetDataInstructionData>()
);
const_assert_eq!(1, align_of::<SetDataInstructionData>());
