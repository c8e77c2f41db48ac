use clap::{
    command,
    Parser,
};
use client::{
    scenarios::Scenario,
    transactions::{
        SendTransactionConfig,
        DEFAULT_RPC_URL,
    },
};

#[derive(Parser, Debug)]
#[command(name = "scenario-runner")]
pub struct CliArgs {
    /// The cluster's JSON RPC URL.
    #[arg(short = 'u', long, default_value = DEFAULT_RPC_URL)]
    pub url: String,

    /// A scenario to run, in kebab-case; e.g. `cash-check`. Repeatable. Prerequisites are added
    /// automatically, and every scenario runs when none are passed.
    #[arg(short = 's', long = "scenario")]
    pub scenarios: Vec<Scenario>,

    /// Prepends a compute unit limit to every transaction.
    #[arg(long)]
    pub compute_budget: Option<u32>,

    /// Don't print transaction signatures and program logs.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print the final run report as JSON and nothing else.
    #[arg(long)]
    pub json: bool,

    /// List the available scenarios in run order and exit.
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Transaction signatures and program logs are printed unless `--quiet` or `--json` is set.
    pub fn send_config(&self) -> SendTransactionConfig {
        SendTransactionConfig {
            compute_budget: self.compute_budget,
            debug_logs: !self.quiet && !self.json,
        }
    }

    /// Scenario headers, results and the run summary go to stdout unless `--json` is set.
    pub fn progress_logs(&self) -> bool {
        !self.json
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_repeated_scenarios() {
        let args = CliArgs::try_parse_from([
            "scenario-runner",
            "--scenario",
            "revisit",
            "-s",
            "cash-check",
            "--compute-budget",
            "200000",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.scenarios, vec![Scenario::Revisit, Scenario::CashCheck]);
        assert_eq!(args.compute_budget, Some(200_000));
        assert_eq!(args.url, DEFAULT_RPC_URL);
        assert!(args.quiet);
        assert!(!args.json);
    }

    #[test]
    fn json_output_silences_every_other_log() {
        let args = CliArgs::try_parse_from(["scenario-runner", "--json"]).unwrap();
        assert!(!args.progress_logs());
        assert!(!args.send_config().debug_logs);
    }

    #[test]
    fn default_output_logs_progress_and_transactions() {
        let args =
            CliArgs::try_parse_from(["scenario-runner", "--compute-budget", "50000"]).unwrap();
        assert!(args.progress_logs());
        let config = args.send_config();
        assert!(config.debug_logs);
        assert_eq!(config.compute_budget, Some(50_000));

        let args = CliArgs::try_parse_from(["scenario-runner", "-q"]).unwrap();
        assert!(args.progress_logs());
        assert!(!args.send_config().debug_logs);
    }

    #[test]
    fn rejects_unknown_scenarios() {
        assert!(CliArgs::try_parse_from(["scenario-runner", "-s", "withdraw"]).is_err());
    }
}
