//! See [`VisitorState`].

use static_assertions::const_assert_eq;

use crate::{
    error::{
        XbasicError,
        XbasicResult,
    },
    state::{
        check_discriminant,
        transmutable::Transmutable,
        LeU64,
    },
};

/// First 8 bytes of `sha256("account:VisitorState")`.
pub const VISITOR_STATE_DISCRIMINANT: u64 = 0x9a8832d9f0e16ff9;

/// Per-visitor counter stored at the PDA derived from
/// [`crate::visitor_state_seeds`] and [`VisitorState::bump`].
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorState {
    discriminant: LeU64,
    visit_count: LeU64,
    pub bump: u8,
}

impl VisitorState {
    /// A freshly introduced visitor has visited once.
    pub fn new(bump: u8) -> Self {
        Self {
            discriminant: VISITOR_STATE_DISCRIMINANT.to_le_bytes(),
            visit_count: 1u64.to_le_bytes(),
            bump,
        }
    }

    #[inline(always)]
    pub fn visit_count(&self) -> u64 {
        u64::from_le_bytes(self.visit_count)
    }

    /// Records one more visit and returns the new count.
    #[inline(always)]
    pub fn try_increment_visit_count(&mut self) -> Result<u64, XbasicError> {
        let count = self
            .visit_count()
            .checked_add(1)
            .ok_or(XbasicError::ArithmeticOverflow)?;
        self.visit_count = count.to_le_bytes();
        Ok(count)
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - Only the discriminant is constrained.
unsafe impl Transmutable for VisitorState {
    const LEN: usize = 17;

    #[inline(always)]
    fn validate_bit_patterns(bytes: &[u8]) -> XbasicResult {
        check_discriminant(bytes, VISITOR_STATE_DISCRIMINANT)
    }
}

const_assert_eq!(VisitorState::LEN, size_of::<VisitorState>());
const_assert_eq!(align_of::<VisitorState>(), 1);
