//! Runs the `xbasic` end-to-end scenarios against a cluster and reports the outcome of each one.

use std::process::ExitCode;

use clap::Parser;
use client::{
    e2e_helpers::E2e,
    print_kv,
    scenarios::{
        Scenario,
        ScenarioPlan,
        ScenarioRunner,
        ScenarioStatus,
    },
    transactions::CustomRpcClient,
    LogColor,
};
use colored::Colorize;
use solana_sdk::signer::Signer;
use strum::IntoEnumIterator;

use crate::cli::CliArgs;

pub mod cli;
pub mod load_env;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    if args.list {
        for scenario in Scenario::iter() {
            println!("{scenario}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let progress = args.progress_logs();
    let plan = ScenarioPlan::resolve(&args.scenarios);
    let rpc = CustomRpcClient::new_from_url(&args.url, args.send_config());
    let e2e = E2e::new(Some(rpc), load_env::payer_keypair()?).await?;

    if progress {
        print_kv!("RPC", args.url, LogColor::Info);
        print_kv!("Payer", e2e.payer.pubkey(), LogColor::Info);
        print_kv!("Plan", plan, LogColor::Info);
    }

    let report = ScenarioRunner::new(e2e)
        .with_progress(progress)
        .run(&plan)
        .await;
    let exit_code = if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(exit_code);
    }

    let passed = report.count(ScenarioStatus::Passed);
    let summary = format!("{passed}/{} passed", plan.scenarios().len());
    if report.succeeded() {
        print_kv!("Result", summary, LogColor::Success);
    } else {
        print_kv!("Result", summary, LogColor::Error);
        if let Some(failure) = report.first_failure() {
            print_kv!(
                "First failure",
                failure.scenario.to_string().bold(),
                LogColor::Error
            );
        }
    }

    Ok(exit_code)
}
