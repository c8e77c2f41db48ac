//! Packing helpers for building fixed-size instruction data without heap allocations.

use core::mem::MaybeUninit;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// The loop compiles down to a memcpy in release builds while staying bounds checked.
///
/// From pinocchio's `[no_std]` token library:
/// <https://github.com/anza-xyz/pinocchio/blob/3044aaf5ea7eac01adc754d4bdf93c21c6e54d42/programs/token/src/lib.rs#L13>
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}

/// Serializes a value into exactly `LEN` bytes.
pub trait Pack<const LEN: usize> {
    /// Writes every one of the `LEN` bytes in `dst`.
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; LEN]);

    #[inline(always)]
    fn pack(&self) -> [u8; LEN] {
        let mut dst = [UNINIT_BYTE; LEN];
        self.pack_into_slice(&mut dst);
        // Safety: `pack_into_slice` implementors write all `LEN` bytes.
        unsafe { *(dst.as_ptr() as *const [u8; LEN]) }
    }

    /// Packs the instruction tag followed by the instruction data.
    #[cfg(feature = "std")]
    fn pack_tagged(&self, tag: u8) -> std::vec::Vec<u8> {
        let mut data = std::vec::Vec::with_capacity(LEN + 1);
        data.push(tag);
        data.extend_from_slice(&self.pack());
        data
    }
}
