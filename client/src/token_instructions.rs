//! Instruction pairs for creating SPL token mints and token accounts.

use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::program_pack::Pack;
use spl_token_interface::state::{
    Account,
    Mint,
};

/// Returns the system `CreateAccount` and `InitializeMint2` instructions for a new mint. The
/// payer is also the mint authority.
pub fn create_and_initialize_mint_instructions(
    mint_authority_and_payer: &Address,
    mint: &Address,
    rent_lamports: u64,
    mint_decimals: u8,
) -> anyhow::Result<(Instruction, Instruction)> {
    let create_mint_account = solana_system_interface::instruction::create_account(
        mint_authority_and_payer,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        &spl_token_interface::ID,
    );

    let initialize_mint = spl_token_interface::instruction::initialize_mint2(
        &spl_token_interface::ID,
        mint,
        mint_authority_and_payer,
        None,
        mint_decimals,
    )?;

    Ok((create_mint_account, initialize_mint))
}

/// Returns the system `CreateAccount` and `InitializeAccount3` instructions for a new token
/// account at a keypair address. The token account's owner doesn't have to sign, which is how
/// check vaults end up owned by a PDA.
pub fn create_and_initialize_token_account_instructions(
    payer: &Address,
    token_account: &Address,
    rent_lamports: u64,
    mint: &Address,
    owner: &Address,
) -> anyhow::Result<(Instruction, Instruction)> {
    let create_token_account = solana_system_interface::instruction::create_account(
        payer,
        token_account,
        rent_lamports,
        Account::LEN as u64,
        &spl_token_interface::ID,
    );

    let initialize_token_account = spl_token_interface::instruction::initialize_account3(
        &spl_token_interface::ID,
        token_account,
        mint,
        owner,
    )?;

    Ok((create_token_account, initialize_token_account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_instructions_target_the_new_mint() -> anyhow::Result<()> {
        let payer = Address::new_unique();
        let mint = Address::new_unique();
        let (create, initialize) = create_and_initialize_mint_instructions(&payer, &mint, 1, 6)?;

        assert_eq!(create.program_id, solana_system_interface::program::ID);
        assert_eq!(create.accounts[1].pubkey, mint);
        assert_eq!(initialize.program_id, spl_token_interface::ID);
        assert_eq!(initialize.accounts[0].pubkey, mint);
        Ok(())
    }

    #[test]
    fn token_account_owner_doesnt_sign() -> anyhow::Result<()> {
        let payer = Address::new_unique();
        let vault = Address::new_unique();
        let owner = Address::new_unique();
        let (create, initialize) = create_and_initialize_token_account_instructions(
            &payer,
            &vault,
            1,
            &Address::new_unique(),
            &owner,
        )?;

        assert!(create.accounts[1].is_signer);
        assert!(initialize.accounts.iter().all(|meta| !meta.is_signer));
        Ok(())
    }
}
