use pinocchio::account::AccountView;
use xbasic_interface::error::XbasicError;

#[inline(always)]
pub fn require_signer(account: &AccountView) -> Result<(), XbasicError> {
    if !account.is_signer() {
        return Err(XbasicError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline(always)]
pub fn require_writable(account: &AccountView) -> Result<(), XbasicError> {
    if !account.is_writable() {
        return Err(XbasicError::AccountNotWritable);
    }
    Ok(())
}

/// Payers and freshly created keypair accounts must both sign and be writable.
#[inline(always)]
pub fn require_writable_signer(account: &AccountView) -> Result<(), XbasicError> {
    require_signer(account)?;
    require_writable(account)
}
