use solana_address::Address;
use solana_sdk::signature::{
    Keypair,
    Signer,
};

use crate::{
    context::xbasic::XbasicContext,
    pda::find_visitor_state_address,
    transactions::{
        account_exists,
        CustomRpcClient,
    },
    views::{
        CheckView,
        MyAccountView,
        TokenAccountView,
        VisitorStateView,
    },
};

/// Convenience harness for end-to-end tests, examples and the scenario runner.
///
/// Upon instantiation it airdrops [`crate::transactions::DEFAULT_FUND_AMOUNT`] lamports to the
/// payer if the payer account doesn't exist yet. Without an explicit payer a fresh keypair is
/// generated.
pub struct E2e {
    pub rpc: CustomRpcClient,
    pub payer: Keypair,
    pub xbasic: XbasicContext,
}

impl E2e {
    pub async fn new(rpc: Option<CustomRpcClient>, payer: Option<Keypair>) -> anyhow::Result<Self> {
        let rpc = rpc.unwrap_or_default();
        let payer = payer.unwrap_or_else(Keypair::new);

        if !account_exists(&rpc.client, &payer.pubkey()).await? {
            rpc.fund_account(&payer.pubkey()).await?;
        }

        Ok(Self {
            rpc,
            payer,
            xbasic: XbasicContext,
        })
    }

    pub fn payer_address(&self) -> Address {
        self.payer.pubkey()
    }

    pub async fn view_my_account(&self, my_account: &Address) -> anyhow::Result<MyAccountView> {
        let account = self.rpc.client.get_account(my_account).await?;
        MyAccountView::try_from_owner_and_data(account.owner, &account.data)
    }

    /// Fetches the visitor state PDA derived from `visitor`.
    pub async fn view_visitor_state(&self, visitor: &Address) -> anyhow::Result<VisitorStateView> {
        let (visitor_state, _bump) = find_visitor_state_address(visitor);
        let account = self.rpc.client.get_account(&visitor_state).await?;
        VisitorStateView::try_from_owner_and_data(account.owner, &account.data)
    }

    pub async fn view_check(&self, check: &Address) -> anyhow::Result<CheckView> {
        let account = self.rpc.client.get_account(check).await?;
        CheckView::try_from_owner_and_data(account.owner, &account.data)
    }

    pub async fn view_token_account(
        &self,
        token_account: &Address,
    ) -> anyhow::Result<TokenAccountView> {
        let account = self.rpc.client.get_account(token_account).await?;
        TokenAccountView::try_from_owner_and_data(account.owner, &account.data)
    }
}
