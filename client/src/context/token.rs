//! Token-level context for creating a mint and token accounts and minting test tokens.

use anyhow::Context;
use solana_address::Address;
use solana_sdk::{
    program_pack::Pack,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};
use spl_token_interface::{
    instruction::mint_to,
    state::{
        Account,
        Mint,
    },
};

use crate::{
    token_instructions::{
        create_and_initialize_mint_instructions,
        create_and_initialize_token_account_instructions,
    },
    transactions::CustomRpcClient,
    views::TokenAccountView,
};

pub const DEFAULT_MINT_DECIMALS: u8 = 6;

pub struct TokenContext {
    /// If the mint authority is provided, [`TokenContext`] can mint tokens directly to
    /// recipients, mostly for testing purposes.
    mint_authority: Option<Keypair>,
    pub mint_address: Address,
    pub mint_decimals: u8,
}

impl TokenContext {
    /// Creates an account, airdrops it SOL, and then uses it to create a new, random token mint.
    pub async fn create_new(rpc: &CustomRpcClient) -> anyhow::Result<Self> {
        let authority = rpc.fund_new_account().await?;
        Self::create_new_from_mint(rpc, authority, Keypair::new(), DEFAULT_MINT_DECIMALS).await
    }

    pub async fn create_new_from_mint(
        rpc: &CustomRpcClient,
        mint_authority: Keypair,
        mint: Keypair,
        decimals: u8,
    ) -> anyhow::Result<Self> {
        let mint_rent = rpc
            .client
            .get_minimum_balance_for_rent_exemption(Mint::LEN)
            .await?;

        let (create_mint_account, initialize_mint) = create_and_initialize_mint_instructions(
            &mint_authority.pubkey(),
            &mint.pubkey(),
            mint_rent,
            decimals,
        )?;

        rpc.send_and_confirm_txn(
            &mint_authority,
            &[&mint],
            &[create_mint_account, initialize_mint],
        )
        .await?;

        Ok(Self {
            mint_authority: Some(mint_authority),
            mint_address: mint.pubkey(),
            mint_decimals: decimals,
        })
    }

    pub fn mint_authority(&self) -> anyhow::Result<&Keypair> {
        self.mint_authority
            .as_ref()
            .context("Mint authority wasn't passed to the token context")
    }

    /// Creates a token account for this mint at a new keypair address, owned by `owner`. The
    /// owner may be a PDA since it doesn't need to sign.
    pub async fn create_token_account(
        &self,
        rpc: &CustomRpcClient,
        payer: &Keypair,
        owner: &Address,
    ) -> anyhow::Result<Address> {
        let token_account = Keypair::new();
        let rent = rpc
            .client
            .get_minimum_balance_for_rent_exemption(Account::LEN)
            .await?;

        let (create, initialize) = create_and_initialize_token_account_instructions(
            &payer.pubkey(),
            &token_account.pubkey(),
            rent,
            &self.mint_address,
            owner,
        )?;
        rpc.send_and_confirm_txn(payer, &[&token_account], &[create, initialize])
            .await?;

        Ok(token_account.pubkey())
    }

    /// Mints tokens to `token_account` if the mint authority was passed to the token context upon
    /// creation. Otherwise, it fails immediately.
    pub async fn mint_to(
        &self,
        rpc: &CustomRpcClient,
        payer: &Keypair,
        token_account: &Address,
        amount: u64,
    ) -> anyhow::Result<Signature> {
        let mint_authority = self.mint_authority()?;
        let mint_to = mint_to(
            &spl_token_interface::ID,
            &self.mint_address,
            token_account,
            &mint_authority.pubkey(),
            &[],
            amount,
        )?;
        rpc.send_and_confirm_txn(payer, &[mint_authority], &[mint_to])
            .await
            .map(|txn| txn.signature)
    }

    /// Fetches a fresh snapshot of a token account for this mint.
    pub async fn view_token_account(
        &self,
        rpc: &CustomRpcClient,
        token_account: &Address,
    ) -> anyhow::Result<TokenAccountView> {
        let account = rpc.client.get_account(token_account).await?;
        let view = TokenAccountView::try_from_owner_and_data(account.owner, &account.data)?;
        if view.mint != self.mint_address {
            anyhow::bail!(
                "Token account {token_account} holds mint {}, expected {}",
                view.mint,
                self.mint_address
            );
        }
        Ok(view)
    }

    pub async fn get_balance(
        &self,
        rpc: &CustomRpcClient,
        token_account: &Address,
    ) -> anyhow::Result<u64> {
        Ok(self.view_token_account(rpc, token_account).await?.amount)
    }
}
