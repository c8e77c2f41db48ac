use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::{
        XbasicError,
        XbasicResult,
    },
    pack::{
        write_bytes,
        Pack,
    },
    state::{
        check::MEMO_CAPACITY,
        transmutable::{
            validate_bool_byte,
            Transmutable,
        },
        LeU64,
    },
};

/// The fixed-size prefix of `CreateCheck` instruction data. The memo bytes, if any, follow it.
#[repr(C)]
pub struct CreateCheckInstructionData {
    amount: LeU64,
    pub nonce: u8,
    has_memo: u8,
}

/// Decoded `CreateCheck` arguments, borrowing the memo from the instruction data.
pub struct CreateCheckArgs<'a> {
    pub amount: u64,
    pub nonce: u8,
    pub memo: Option<&'a [u8]>,
}

impl CreateCheckInstructionData {
    pub fn new(amount: u64, nonce: u8, has_memo: bool) -> Self {
        Self {
            amount: amount.to_le_bytes(),
            nonce,
            has_memo: has_memo as u8,
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    #[inline(always)]
    pub fn has_memo(&self) -> bool {
        self.has_memo == 1
    }

    /// Splits untagged instruction data into the fixed header and the trailing memo.
    ///
    /// Without a memo there must be no trailing bytes.
    pub fn unpack(instruction_data: &[u8]) -> Result<CreateCheckArgs<'_>, XbasicError> {
        if instruction_data.len() < Self::LEN {
            return Err(XbasicError::InvalidInstructionData);
        }
        let (header, memo) = instruction_data.split_at(Self::LEN);
        let header = Self::load(header).map_err(|_| XbasicError::InvalidInstructionData)?;

        let memo = match (header.has_memo(), memo.len()) {
            (false, 0) => None,
            (false, _) => return Err(XbasicError::InvalidInstructionData),
            (true, len) if len > MEMO_CAPACITY => return Err(XbasicError::MemoTooLong),
            (true, _) => Some(memo),
        };

        Ok(CreateCheckArgs {
            amount: header.amount(),
            nonce: header.nonce,
            memo,
        })
    }

    /// Packs the tag, header and memo into a full instruction data buffer.
    #[cfg(feature = "std")]
    pub fn pack_with_memo(amount: u64, nonce: u8, memo: Option<&[u8]>) -> std::vec::Vec<u8> {
        let header = Self::new(amount, nonce, memo.is_some());
        let mut data = header.pack_tagged(super::XbasicInstruction::CreateCheck as u8);
        if let Some(memo) = memo {
            data.extend_from_slice(memo);
        }
        data
    }
}

impl Pack<10> for CreateCheckInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 10]) {
        write_bytes(&mut dst[0..8], &self.amount);
        dst[8].write(self.nonce);
        dst[9].write(self.has_memo);
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - `has_memo` is checked to be a canonical bool.
unsafe impl Transmutable for CreateCheckInstructionData {
    #[allow(clippy::identity_op)]
    const LEN: usize = 0
    /* amount */   + size_of::<LeU64>()
    /* nonce */    + size_of::<u8>()
    /* has_memo */ + size_of::<u8>();

    #[inline(always)]
    fn validate_bit_patterns(bytes: &[u8]) -> XbasicResult {
        validate_bool_byte(bytes[9])
    }
}

const_assert_eq!(CreateCheckInstructionData::LEN, 10);
const_assert_eq!(
    CreateCheckInstructionData::LEN,
    size_of::<CreateCheckInstructionData>()
);
const_assert_eq!(1, align_of::<CreateCheckInstructionData>());

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: u64, nonce: u8, has_memo: u8, memo: &[u8]) -> [u8; 64] {
        let mut data = [0u8; 64];
        data[..8].copy_from_slice(&amount.to_le_bytes());
        data[8] = nonce;
        data[9] = has_memo;
        data[10..10 + memo.len()].copy_from_slice(memo);
        data
    }

    #[test]
    fn unpacks_header_and_memo() {
        let data = raw(100, 254, 1, b"gm");
        let args = CreateCheckInstructionData::unpack(&data[..12]).unwrap();
        assert_eq!(args.amount, 100);
        assert_eq!(args.nonce, 254);
        assert_eq!(args.memo, Some(&b"gm"[..]));
    }

    #[test]
    fn unpacks_without_memo() {
        let data = CreateCheckInstructionData::new(5, 1, false).pack();
        let args = CreateCheckInstructionData::unpack(&data).unwrap();
        assert_eq!(args.amount, 5);
        assert_eq!(args.memo, None);
    }

    #[test]
    fn rejects_malformed_data() {
        // Too short for the header.
        assert!(CreateCheckInstructionData::unpack(&[0; 9]).is_err());
        // Trailing bytes without a memo flag.
        let data = raw(1, 1, 0, b"gm");
        assert!(matches!(
            CreateCheckInstructionData::unpack(&data[..12]),
            Err(XbasicError::InvalidInstructionData)
        ));
        // Non-canonical bool.
        let data = raw(1, 1, 2, b"");
        assert!(CreateCheckInstructionData::unpack(&data[..10]).is_err());
        // Memo longer than a check can hold.
        let data = raw(1, 1, 1, &[b'g'; MEMO_CAPACITY + 1]);
        assert!(matches!(
            CreateCheckInstructionData::unpack(&data[..10 + MEMO_CAPACITY + 1]),
            Err(XbasicError::MemoTooLong)
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn packs_tag_header_and_memo() {
        let data = CreateCheckInstructionData::pack_with_memo(100, 7, Some(&b"gm"[..]));
        assert_eq!(data[0], 4);
        assert_eq!(data.len(), 1 + CreateCheckInstructionData::LEN + 2);
        let args = CreateCheckInstructionData::unpack(&data[1..]).unwrap();
        assert_eq!(args.nonce, 7);
        assert_eq!(args.memo, Some(&b"gm"[..]));
    }
}
