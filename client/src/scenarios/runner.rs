use anyhow::{
    bail,
    ensure,
    Context,
};
use colored::Colorize;
use solana_address::Address;
use solana_sdk::signature::{
    Keypair,
    Signer,
};
use xbasic_interface::{
    error::XbasicError,
    state::{
        check::Check,
        transmutable::Transmutable,
    },
};

use super::{
    run_plan,
    RunReport,
    Scenario,
    ScenarioPlan,
    ScenarioStep,
};
use crate::{
    context::{
        token::TokenContext,
        xbasic::CheckAddresses,
    },
    e2e_helpers::E2e,
    pda::find_check_signer_address,
    print_kv,
    transactions::find_program_error,
    LogColor,
};

const GOD_SUPPLY: u64 = 1_000_000;
const CHECK_AMOUNT: u64 = 100;
const CHECK_MEMO: &[u8] = b"gm";
const INITIAL_DATA: u64 = 1234;
const UPDATED_DATA: u64 = 4321;
const REVISITS: u64 = 3;

/// Token accounts created by [`Scenario::SetupTokens`]. The payer owns both.
struct TokenSetup {
    token: TokenContext,
    god: Address,
    receiver: Address,
}

/// On-chain state carried from one scenario to the ones that depend on it.
#[derive(Default)]
struct ScenarioState {
    tokens: Option<TokenSetup>,
    check: Option<CheckAddresses>,
    my_account: Option<Address>,
    visitor: Option<Keypair>,
}

fn require<'a, T>(state: &'a Option<T>, prerequisite: Scenario) -> anyhow::Result<&'a T> {
    state
        .as_ref()
        .with_context(|| format!("`{prerequisite}` must run first"))
}

/// Runs a [`ScenarioPlan`] one scenario at a time against a live cluster.
pub struct ScenarioRunner {
    e2e: E2e,
    state: ScenarioState,
    progress: bool,
}

impl ScenarioRunner {
    pub fn new(e2e: E2e) -> Self {
        Self {
            e2e,
            state: ScenarioState::default(),
            progress: true,
        }
    }

    /// Whether to print scenario headers, results and the addresses each scenario creates.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Runs every scenario in `plan` in order. The first failure stops the run and every
    /// remaining scenario is reported as skipped.
    pub async fn run(&mut self, plan: &ScenarioPlan) -> RunReport {
        let progress = self.progress;
        run_plan(plan, self, progress).await
    }
}

impl ScenarioStep for ScenarioRunner {
    async fn run_scenario(&mut self, scenario: Scenario) -> anyhow::Result<()> {
        match scenario {
            Scenario::SetupTokens => self.setup_tokens().await,
            Scenario::CreateCheck => self.create_check().await,
            Scenario::CashCheck => self.cash_check().await,
            Scenario::RejectDoubleCash => self.reject_double_cash().await,
            Scenario::InitializeAccount => self.initialize_account().await,
            Scenario::UpdateAccount => self.update_account().await,
            Scenario::IntroduceVisitor => self.introduce_visitor().await,
            Scenario::Revisit => self.revisit().await,
        }
    }
}

impl ScenarioRunner {
    fn info(&self, key: &str, value: impl std::fmt::Display) {
        if self.progress {
            print_kv!(key, value, LogColor::Info);
        }
    }

    async fn setup_tokens(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, .. } = &self.e2e;

        let token = TokenContext::create_new(rpc).await?;
        let god = token.create_token_account(rpc, payer, &payer.pubkey()).await?;
        let receiver = token.create_token_account(rpc, payer, &payer.pubkey()).await?;
        token.mint_to(rpc, payer, &god, GOD_SUPPLY).await?;

        let balance = token.get_balance(rpc, &god).await?;
        ensure!(
            balance == GOD_SUPPLY,
            "God account holds {balance}, expected {GOD_SUPPLY}"
        );
        self.info("Mint", token.mint_address);
        self.info("God account", god);
        self.info("Receiver", receiver);

        self.state.tokens = Some(TokenSetup {
            token,
            god,
            receiver,
        });
        Ok(())
    }

    async fn create_check(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;
        let tokens = require(&self.state.tokens, Scenario::SetupTokens)?;

        let check = Keypair::new();
        let (check_signer, _nonce) = find_check_signer_address(&check.pubkey());
        let vault = tokens
            .token
            .create_token_account(rpc, payer, &check_signer)
            .await?;
        let addresses = CheckAddresses::new(check.pubkey(), vault);

        let rent = rpc
            .client
            .get_minimum_balance_for_rent_exemption(Check::LEN)
            .await?;
        let allocate = xbasic.allocate_check(&payer.pubkey(), &check.pubkey(), rent);
        let create = xbasic.create_check(
            &addresses,
            tokens.god,
            tokens.receiver,
            payer.pubkey(),
            CHECK_AMOUNT,
            Some(CHECK_MEMO),
        );
        rpc.send_and_confirm_txn(payer, &[&check], &[allocate, create])
            .await?;

        let view = self.e2e.view_check(&addresses.check).await?;
        ensure!(view.amount == CHECK_AMOUNT, "Check amount is {}", view.amount);
        ensure!(!view.burned, "A new check must not be burned");
        ensure!(view.memo.as_deref() == Some("gm"), "Memo is {:?}", view.memo);
        ensure!(view.to == tokens.receiver, "Check receiver is {}", view.to);
        ensure!(view.nonce == addresses.nonce, "Check nonce is {}", view.nonce);

        let vault_balance = tokens.token.get_balance(rpc, &vault).await?;
        ensure!(
            vault_balance == CHECK_AMOUNT,
            "Vault holds {vault_balance}, expected {CHECK_AMOUNT}"
        );
        self.info("Check", addresses.check);
        self.info("Vault", vault);

        self.state.check = Some(addresses);
        Ok(())
    }

    async fn cash_check(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;
        let tokens = require(&self.state.tokens, Scenario::SetupTokens)?;
        let check = require(&self.state.check, Scenario::CreateCheck)?;

        let receiver_before = tokens.token.get_balance(rpc, &tokens.receiver).await?;
        let cash = xbasic.cash_check(check, tokens.receiver, payer.pubkey());
        rpc.send_single_signer(payer, [cash]).await?;

        let view = self.e2e.view_check(&check.check).await?;
        ensure!(view.burned, "Cashed check must be burned");

        let vault_balance = tokens.token.get_balance(rpc, &check.vault).await?;
        ensure!(vault_balance == 0, "Vault still holds {vault_balance}");

        let receiver_after = tokens.token.get_balance(rpc, &tokens.receiver).await?;
        ensure!(
            receiver_after == receiver_before + CHECK_AMOUNT,
            "Receiver went from {receiver_before} to {receiver_after}"
        );
        Ok(())
    }

    async fn reject_double_cash(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;
        let tokens = require(&self.state.tokens, Scenario::SetupTokens)?;
        let check = require(&self.state.check, Scenario::CreateCheck)?;

        let cash = xbasic.cash_check(check, tokens.receiver, payer.pubkey());
        match rpc.send_single_signer(payer, [cash]).await {
            Ok(sent) => bail!("Cashing a burned check succeeded: {}", sent.signature),
            Err(error) => match find_program_error(&error) {
                Some(XbasicError::AlreadyBurned) => {
                    if self.progress {
                        print_kv!("Rejected", XbasicError::AlreadyBurned, LogColor::Success);
                    }
                    Ok(())
                }
                _ => Err(error.context("Expected the program to reject with AlreadyBurned")),
            },
        }
    }

    async fn initialize_account(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;

        let my_account = Keypair::new();
        let initialize = xbasic.initialize(my_account.pubkey(), payer.pubkey(), INITIAL_DATA);
        rpc.send_and_confirm_txn(payer, &[&my_account], &[initialize])
            .await?;

        let view = self.e2e.view_my_account(&my_account.pubkey()).await?;
        ensure!(view.data == INITIAL_DATA, "MyAccount holds {}", view.data);

        self.state.my_account = Some(my_account.pubkey());
        Ok(())
    }

    async fn update_account(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;
        let my_account = *require(&self.state.my_account, Scenario::InitializeAccount)?;

        rpc.send_single_signer(payer, [xbasic.update(my_account, UPDATED_DATA)])
            .await?;

        let view = self.e2e.view_my_account(&my_account).await?;
        ensure!(view.data == UPDATED_DATA, "MyAccount holds {}", view.data);
        Ok(())
    }

    async fn introduce_visitor(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;

        let visitor = Keypair::new();
        let introduce = xbasic.introduce_yourself(payer.pubkey(), visitor.pubkey());
        rpc.send_and_confirm_txn(payer, &[&visitor], &[introduce])
            .await?;

        let view = self.e2e.view_visitor_state(&visitor.pubkey()).await?;
        ensure!(view.visit_count == 1, "Visit count is {}", view.visit_count);
        self.info("Visitor", visitor.pubkey());

        self.state.visitor = Some(visitor);
        Ok(())
    }

    async fn revisit(&mut self) -> anyhow::Result<()> {
        let E2e { rpc, payer, xbasic } = &self.e2e;
        let visitor = require(&self.state.visitor, Scenario::IntroduceVisitor)?;

        let mut expected = self
            .e2e
            .view_visitor_state(&visitor.pubkey())
            .await?
            .visit_count;
        for _ in 0..REVISITS {
            rpc.send_and_confirm_txn(payer, &[visitor], &[xbasic.visit(visitor.pubkey())])
                .await?;
            expected += 1;

            let view = self.e2e.view_visitor_state(&visitor.pubkey()).await?;
            ensure!(
                view.visit_count == expected,
                "Visit count is {}, expected {expected}",
                view.visit_count
            );
        }
        Ok(())
    }
}
