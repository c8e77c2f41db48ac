use core::mem::MaybeUninit;

use crate::{
    error::XbasicError,
    pack::Pack,
};

/// Instruction data for `IntroduceYourself`: the bump for the visitor state PDA.
pub struct IntroduceYourselfInstructionData {
    pub visitor_bump: u8,
}

impl IntroduceYourselfInstructionData {
    pub fn new(visitor_bump: u8) -> Self {
        Self { visitor_bump }
    }

    #[inline(always)]
    pub fn unpack(instruction_data: &[u8]) -> Result<Self, XbasicError> {
        match instruction_data {
            [visitor_bump] => Ok(Self::new(*visitor_bump)),
            _ => Err(XbasicError::InvalidInstructionData),
        }
    }
}

impl Pack<1> for IntroduceYourselfInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; 1]) {
        dst[0].write(self.visitor_bump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_single_byte() {
        let packed = IntroduceYourselfInstructionData::new(251).pack();
        assert_eq!(
            IntroduceYourselfInstructionData::unpack(&packed)
                .unwrap()
                .visitor_bump,
            251
        );
        assert!(IntroduceYourselfInstructionData::unpack(&[]).is_err());
        assert!(IntroduceYourselfInstructionData::unpack(&[1, 2]).is_err());
    }
}
