//! Program error codes and their conversions into `ProgramError` and message strings.

use pinocchio::error::ProgramError;

/// Offset added to every [`XbasicError`] discriminant when it's surfaced as a custom program error.
///
/// Keeps the codes for the check errors identical to the ones emitted by earlier deployments.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(strum_macros::FromRepr))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[repr(u8)]
pub enum XbasicError {
    InvalidCheckNonce,
    InvalidCheckSigner,
    AlreadyBurned,
    InvalidMessage,
    InvalidInstructionTag,
    InvalidInstructionData,
    NotEnoughAccountKeys,
    MissingRequiredSignature,
    AccountNotWritable,
    InvalidAccountOwner,
    InvalidAccountDiscriminant,
    InvalidAccountLength,
    AccountNotInitialized,
    AlreadyInitializedAccount,
    InvalidBoolByte,
    MemoTooLong,
    InvalidSystemProgram,
    InvalidTokenProgram,
    InvalidVisitorState,
    VaultMismatch,
    VaultOwnerMismatch,
    ReceiverMismatch,
    MintMismatch,
    IncorrectTokenAccountOwner,
    ArithmeticOverflow,
    InvalidMemoLength,
}

impl XbasicError {
    /// The custom program error code for this error.
    #[inline(always)]
    pub const fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }

    /// Recovers an error from a custom program error code, if the code belongs to this program.
    #[cfg(feature = "client")]
    pub fn from_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ERROR_CODE_OFFSET)?;
        u8::try_from(index).ok().and_then(Self::from_repr)
    }
}

impl From<XbasicError> for ProgramError {
    #[inline(always)]
    fn from(e: XbasicError) -> Self {
        ProgramError::Custom(e.code())
    }
}

impl From<XbasicError> for &'static str {
    fn from(value: XbasicError) -> Self {
        match value {
            XbasicError::InvalidCheckNonce => {
                "The given nonce does not create a valid program derived address."
            }
            XbasicError::InvalidCheckSigner => {
                "The derived check signer does not match that which was given."
            }
            XbasicError::AlreadyBurned => "The given check has already been burned.",
            XbasicError::InvalidMessage => "Sorry that doesn't look like a GM message.",
            XbasicError::InvalidInstructionTag => "Invalid instruction tag",
            XbasicError::InvalidInstructionData => "Instruction data is invalid",
            XbasicError::NotEnoughAccountKeys => "Not enough account keys passed",
            XbasicError::MissingRequiredSignature => "A required signature is missing",
            XbasicError::AccountNotWritable => "Account must be writable",
            XbasicError::InvalidAccountOwner => "Account isn't owned by the expected program",
            XbasicError::InvalidAccountDiscriminant => "Invalid account discriminant",
            XbasicError::InvalidAccountLength => "Account data has an unexpected length",
            XbasicError::AccountNotInitialized => "Account hasn't been initialized",
            XbasicError::AlreadyInitializedAccount => "Account has already been initialized",
            XbasicError::InvalidBoolByte => "Boolean byte must be 0 or 1",
            XbasicError::MemoTooLong => "Memo exceeds the maximum length",
            XbasicError::InvalidSystemProgram => "Invalid system program ID",
            XbasicError::InvalidTokenProgram => "Invalid token program ID",
            XbasicError::InvalidVisitorState => "Visitor state doesn't match the visitor PDA",
            XbasicError::VaultMismatch => "Vault doesn't match the check's vault",
            XbasicError::VaultOwnerMismatch => "Vault must be owned by the check signer",
            XbasicError::ReceiverMismatch => "Receiver doesn't match the check's receiver",
            XbasicError::MintMismatch => "Token accounts must share the same mint",
            XbasicError::IncorrectTokenAccountOwner => "Incorrect token account owner",
            XbasicError::ArithmeticOverflow => "Arithmetic overflow",
            XbasicError::InvalidMemoLength => "Stored memo length is invalid",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for XbasicError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message: &'static str = (*self).into();
        write!(f, "{self:?} ({}): {message}", self.code())
    }
}

#[cfg(all(feature = "std", not(target_os = "solana")))]
impl std::error::Error for XbasicError {}

pub type XbasicResult = Result<(), XbasicError>;
