//! PDA derivations for the `xbasic` program.

use solana_address::Address;
use xbasic_interface::{
    check_signer_seeds,
    visitor_state_seeds,
};

/// Finds the visitor state PDA for `visitor` and its bump.
pub fn find_visitor_state_address(visitor: &Address) -> (Address, u8) {
    Address::find_program_address(visitor_state_seeds!(visitor), &xbasic::ID)
}

/// Finds the check signer PDA for `check` and its bump, which becomes the check's nonce.
pub fn find_check_signer_address(check: &Address) -> (Address, u8) {
    Address::find_program_address(check_signer_seeds!(check), &xbasic::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivations_are_deterministic_and_distinct() {
        let visitor = Address::new_unique();
        let (state, bump) = find_visitor_state_address(&visitor);
        assert_eq!(find_visitor_state_address(&visitor), (state, bump));

        let (signer, nonce) = find_check_signer_address(&visitor);
        assert_ne!(state, signer);
        assert_eq!(
            Address::create_program_address(check_signer_seeds!(&visitor, nonce), &xbasic::ID)
                .ok(),
            Some(signer)
        );
        assert_eq!(
            Address::create_program_address(visitor_state_seeds!(&visitor, bump), &xbasic::ID)
                .ok(),
            Some(state)
        );
    }
}
