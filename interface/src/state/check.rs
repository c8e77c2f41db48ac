//! See [`Check`].

use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        XbasicError,
        XbasicResult,
    },
    state::{
        check_discriminant,
        transmutable::{
            validate_bool_byte,
            Transmutable,
        },
        LeU64,
    },
};

/// First 8 bytes of `sha256("account:Check")`.
pub const CHECK_DISCRIMINANT: u64 = 0xd479d49c459074b8;

/// The maximum number of memo bytes a check can store.
pub const MEMO_CAPACITY: usize = 32;

/// The only memo a check may carry.
pub const ACCEPTED_MEMO: &[u8] = b"gm";

/// A one-time token transfer. Tokens are escrowed in `vault`, a token account owned by the check
/// signer PDA, until the owner of `to` cashes the check.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    discriminant: LeU64,
    /// The token account the check was funded from.
    pub from: Address,
    /// The token account the check pays out to.
    pub to: Address,
    amount: LeU64,
    /// The escrow token account.
    pub vault: Address,
    /// The bump for the check signer PDA.
    pub nonce: u8,
    burned: u8,
    has_memo: u8,
    memo_len: u8,
    memo: [u8; MEMO_CAPACITY],
}

impl Check {
    /// Creates an unburned check. `memo` must already be validated with [`Check::validate_memo`].
    pub fn new(
        from: Address,
        to: Address,
        amount: u64,
        vault: Address,
        nonce: u8,
        memo: Option<&[u8]>,
    ) -> Result<Self, XbasicError> {
        let mut check = Self {
            discriminant: CHECK_DISCRIMINANT.to_le_bytes(),
            from,
            to,
            amount: amount.to_le_bytes(),
            vault,
            nonce,
            burned: 0,
            has_memo: 0,
            memo_len: 0,
            memo: [0; MEMO_CAPACITY],
        };

        if let Some(memo) = memo {
            if memo.len() > MEMO_CAPACITY {
                return Err(XbasicError::MemoTooLong);
            }
            check.has_memo = 1;
            check.memo_len = memo.len() as u8;
            check.memo[..memo.len()].copy_from_slice(memo);
        }

        Ok(check)
    }

    /// A memo is either absent or exactly [`ACCEPTED_MEMO`].
    #[inline(always)]
    pub fn validate_memo(memo: Option<&[u8]>) -> XbasicResult {
        match memo {
            None => Ok(()),
            Some(m) if m.len() > MEMO_CAPACITY => Err(XbasicError::MemoTooLong),
            Some(m) if m == ACCEPTED_MEMO => Ok(()),
            Some(_) => Err(XbasicError::InvalidMessage),
        }
    }

    #[inline(always)]
    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    #[inline(always)]
    pub fn burned(&self) -> bool {
        self.burned == 1
    }

    /// Burns the check so it can't be cashed again.
    #[inline(always)]
    pub fn burn(&mut self) -> XbasicResult {
        self.check_not_burned()?;
        self.burned = 1;
        Ok(())
    }

    #[inline(always)]
    pub fn check_not_burned(&self) -> XbasicResult {
        if self.burned() {
            return Err(XbasicError::AlreadyBurned);
        }
        Ok(())
    }

    pub fn memo(&self) -> Option<&[u8]> {
        (self.has_memo == 1).then(|| &self.memo[..self.memo_len as usize])
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - `burned` and `has_memo` must be canonical bools and `memo_len` must fit the memo buffer,
//   all of which `validate_bit_patterns` checks.
unsafe impl Transmutable for Check {
    #[allow(clippy::identity_op)]
    const LEN: usize = 0
    /* discriminant */ + size_of::<LeU64>()
    /* from */         + size_of::<Address>()
    /* to */           + size_of::<Address>()
    /* amount */       + size_of::<LeU64>()
    /* vault */        + size_of::<Address>()
    /* nonce */        + size_of::<u8>()
    /* burned */       + size_of::<u8>()
    /* has_memo */     + size_of::<u8>()
    /* memo_len */     + size_of::<u8>()
    /* memo */         + MEMO_CAPACITY;

    #[inline(always)]
    fn validate_bit_patterns(bytes: &[u8]) -> XbasicResult {
        check_discriminant(bytes, CHECK_DISCRIMINANT)?;

        // Safety: The length is checked by the caller, and every field is a byte array.
        let check = unsafe { Self::load_unchecked(bytes) };
        validate_bool_byte(check.burned)?;
        validate_bool_byte(check.has_memo)?;
        match (check.has_memo, check.memo_len as usize) {
            (0, 0) => Ok(()),
            (0, _) => Err(XbasicError::InvalidMemoLength),
            (_, len) if len > MEMO_CAPACITY => Err(XbasicError::InvalidMemoLength),
            _ => Ok(()),
        }
    }
}

const_assert_eq!(Check::LEN, 148);
const_assert_eq!(Check::LEN, size_of::<Check>());
const_assert_eq!(align_of::<Check>(), 1);
