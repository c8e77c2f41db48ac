//! Signer seed builders for the program's PDAs, with the bump appended.

/// Builds the `Signer` for a visitor state PDA.
#[macro_export]
macro_rules! visitor_signer {
    ($visitor:expr, $bump:expr) => {
        ::pinocchio::cpi::Signer::from(&[
            ::pinocchio::cpi::Seed::from(::core::convert::AsRef::<[u8]>::as_ref($visitor)),
            ::pinocchio::cpi::Seed::from(::xbasic_interface::seeds::VISITOR_SEED),
            ::pinocchio::cpi::Seed::from(&[$bump]),
        ])
    };
}

/// Builds the `Signer` for a check signer PDA, the authority over a check's vault.
#[macro_export]
macro_rules! check_signer {
    ($check:expr, $nonce:expr) => {
        ::pinocchio::cpi::Signer::from(&[
            ::pinocchio::cpi::Seed::from(::core::convert::AsRef::<[u8]>::as_ref($check)),
            ::pinocchio::cpi::Seed::from(&[$nonce]),
        ])
    };
}
