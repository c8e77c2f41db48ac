//! PDA seed definitions.

/// The static seed appended to the visitor's address when deriving its visitor state PDA.
pub const VISITOR_SEED: &[u8] = b"1";

/// Seeds for a visitor state PDA, optionally followed by its bump.
#[macro_export]
macro_rules! visitor_state_seeds {
    ($visitor:expr) => {
        &[
            ::core::convert::AsRef::<[u8]>::as_ref($visitor),
            $crate::seeds::VISITOR_SEED,
        ]
    };
    ($visitor:expr, $bump:expr) => {
        &[
            ::core::convert::AsRef::<[u8]>::as_ref($visitor),
            $crate::seeds::VISITOR_SEED,
            &[$bump],
        ]
    };
}

/// Seeds for a check signer PDA, optionally followed by the check's nonce. The check signer owns
/// the check's vault.
#[macro_export]
macro_rules! check_signer_seeds {
    ($check:expr) => {
        &[::core::convert::AsRef::<[u8]>::as_ref($check)]
    };
    ($check:expr, $nonce:expr) => {
        &[::core::convert::AsRef::<[u8]>::as_ref($check), &[$nonce]]
    };
}

#[cfg(test)]
mod tests {
    use solana_address::Address;

    #[test]
    fn seeds_with_and_without_bump() {
        let visitor = Address::new_from_array([9; 32]);
        let seeds: &[&[u8]] = visitor_state_seeds!(&visitor);
        assert_eq!(seeds, &[&[9u8; 32][..], b"1"]);

        let seeds: &[&[u8]] = visitor_state_seeds!(&visitor, 254);
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[2], &[254]);

        let seeds: &[&[u8]] = check_signer_seeds!(&visitor, 7);
        assert_eq!(seeds, &[&[9u8; 32][..], &[7u8][..]]);
    }
}
