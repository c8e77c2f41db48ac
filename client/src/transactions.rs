//! Lightweight, nonblocking RPC client utilities for funding accounts, sending transactions,
//! and printing `xbasic` program logs and errors.

use std::{
    future::Future,
    time::Duration,
};

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use solana_address::Address;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;
use solana_transaction_status::UiTransactionEncoding;
use xbasic_interface::error::XbasicError;

use crate::{
    logs::log_program_logs,
    print_kv,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        Self::new_from_url(DEFAULT_RPC_URL, Default::default())
    }
}

impl CustomRpcClient {
    pub fn new_from_url(url: &str, config: SendTransactionConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
            config,
        }
    }

    pub async fn fund_account(&self, address: &Address) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let kp = Keypair::new();
        fund(&self.client, &kp.pubkey()).await?;

        Ok(kp)
    }

    /// Sends and confirms a transaction with `signer` as the payer and sole signer.
    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<SentTransaction> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    /// Sends and confirms a transaction paid for by `payer` and signed by `payer` plus `signers`.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<SentTransaction> {
        send_transaction_with_config(&self.client, payer, signers, instructions, &self.config).await
    }
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let confirmed = poll_until_confirmed(MAX_TRIES, AIRDROP_POLL_INTERVAL, || async move {
        rpc.confirm_transaction(&airdrop_signature)
            .await
            .context("Couldn't confirm transaction")
    })
    .await?;

    if !confirmed {
        bail!("Airdrop did not land.");
    }

    Ok(())
}

const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Calls `poll` up to `max_tries` times, sleeping `interval` between attempts, and returns whether
/// any attempt reported confirmation.
async fn poll_until_confirmed<F, Fut>(
    max_tries: u8,
    interval: Duration,
    mut poll: F,
) -> anyhow::Result<bool>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    for attempt in 1..=max_tries {
        if poll().await? {
            return Ok(true);
        }
        if attempt < max_tries {
            tokio::time::sleep(interval).await;
        }
    }

    Ok(false)
}

#[derive(Clone, Debug)]
pub struct SendTransactionConfig {
    /// Prepends a compute unit limit (and a priority fee of 1) when set.
    pub compute_budget: Option<u32>,
    /// Prints each confirmed transaction's signature and program logs, and the decoded program
    /// error and payer of each failed one.
    pub debug_logs: bool,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: None,
            debug_logs: true,
        }
    }
}

/// A confirmed transaction's signature and the log lines it emitted.
#[derive(Clone, Debug)]
pub struct SentTransaction {
    pub signature: Signature,
    pub logs: Vec<String>,
}

async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> anyhow::Result<SentTransaction> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch the latest blockhash")?;

    let final_instructions: &[Instruction] = &[
        config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat();

    let msg = Message::new(final_instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    let all_signers = std::iter::once(payer)
        .chain(signers.iter().cloned())
        .collect::<Vec<_>>();
    tx.try_sign(&all_signers, bh)
        .context("Failed to sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(signature) => {
            let logs = fetch_transaction_logs(rpc, signature).await?;

            if config.debug_logs {
                print_kv!("Signature", signature, LogColor::Info);
                log_program_logs(&logs);
            }

            Ok(SentTransaction { signature, logs })
        }
        Err(error) => {
            if config.debug_logs {
                let program_error = error
                    .get_transaction_error()
                    .as_ref()
                    .and_then(custom_error_code)
                    .and_then(XbasicError::from_code);
                if let Some(program_error) = program_error {
                    print_kv!("Program error", program_error, LogColor::Error);
                }
                print_kv!("Payer", payer.pubkey(), LogColor::Error);
            }
            Err(error).context("Failed transaction submission")
        }
    }
}

/// Extracts the custom program error code from a failed transaction, if there is one.
pub fn custom_error_code(error: &TransactionError) -> Option<u32> {
    match error {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

/// Walks an `anyhow` error chain returned from [`CustomRpcClient::send_and_confirm_txn`] and
/// recovers the [`XbasicError`] that caused it.
pub fn find_program_error(error: &anyhow::Error) -> Option<XbasicError> {
    error.chain().find_map(|cause| {
        cause
            .downcast_ref::<solana_client::client_error::ClientError>()
            .and_then(|client_error| client_error.get_transaction_error())
            .as_ref()
            .and_then(custom_error_code)
            .and_then(XbasicError::from_code)
    })
}

async fn fetch_transaction_logs(rpc: &RpcClient, sig: Signature) -> anyhow::Result<Vec<String>> {
    let encoded = rpc
        .get_transaction_with_config(
            &sig,
            solana_client::rpc_config::RpcTransactionConfig {
                encoding: Some(UiTransactionEncoding::Json),
                commitment: Some(CommitmentConfig::confirmed()),
                max_supported_transaction_version: Some(0),
            },
        )
        .await
        .context("Should be able to fetch transaction with config")?;

    Ok(encoded
        .transaction
        .meta
        .and_then(|meta| Option::<Vec<String>>::from(meta.log_messages))
        .unwrap_or_default())
}

/// Checks if an account at the given address exists on-chain.
pub async fn account_exists(rpc: &RpcClient, address: &Address) -> anyhow::Result<bool> {
    Ok(rpc
        .get_account_with_commitment(address, CommitmentConfig::confirmed())
        .await
        .context("Couldn't retrieve account data")?
        .value
        .is_some())
}

/// Formats a failure for display, highlighting a decoded program error when one is present.
pub fn fmt_failure(error: &anyhow::Error) -> String {
    match find_program_error(error) {
        Some(program_error) => format!("{}", program_error.to_string().color(LogColor::Error)),
        None => format!("{}", format!("{error:#}").color(LogColor::Error)),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test]
    async fn confirms_on_the_last_allowed_try() {
        let calls = Cell::new(0u8);
        let confirmed = poll_until_confirmed(MAX_TRIES, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            let landed = calls.get() == MAX_TRIES;
            async move { Ok(landed) }
        })
        .await
        .unwrap();

        assert!(confirmed);
        assert_eq!(calls.get(), MAX_TRIES);
    }

    #[tokio::test]
    async fn gives_up_after_max_tries() {
        let calls = Cell::new(0u8);
        let confirmed = poll_until_confirmed(3, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Ok(false) }
        })
        .await
        .unwrap();

        assert!(!confirmed);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn stops_polling_on_rpc_errors() {
        let calls = Cell::new(0u8);
        let result = poll_until_confirmed(MAX_TRIES, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { anyhow::Result::<bool>::Err(anyhow::anyhow!("connection refused")) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn decodes_custom_instruction_errors() {
        let error = TransactionError::InstructionError(0, InstructionError::Custom(6002));
        assert_eq!(custom_error_code(&error), Some(6002));
        assert_eq!(
            custom_error_code(&error).and_then(XbasicError::from_code),
            Some(XbasicError::AlreadyBurned)
        );

        let error = TransactionError::InstructionError(1, InstructionError::InvalidArgument);
        assert_eq!(custom_error_code(&error), None);
        assert_eq!(custom_error_code(&TransactionError::AccountNotFound), None);
    }

    #[test]
    fn unrelated_errors_have_no_program_error() {
        let error = anyhow::anyhow!("connection refused").context("Failed transaction submission");
        assert_eq!(find_program_error(&error), None);
    }
}
