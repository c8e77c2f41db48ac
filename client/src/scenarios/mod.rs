//! Named end-to-end scenarios, the plan that orders them and the report a run produces.
//!
//! Scenarios build on each other's on-chain state (a check can't be cashed before it's created),
//! so a user selection is always resolved into the canonical order with every prerequisite
//! included.

use std::{
    collections::BTreeSet,
    fmt,
    time::{
        Duration,
        Instant,
    },
};

use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use strum_macros::{
    Display,
    EnumIter,
    EnumString,
};

mod runner;

pub use runner::ScenarioRunner;

use crate::{
    logs::log_header,
    print_kv,
    transactions::fmt_failure,
    LogColor,
};

/// Declaration order is the canonical run order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Mints 1 000 000 tokens into a payer-owned "god" account and creates a receiver account.
    SetupTokens,
    /// Escrows 100 tokens into a new check with the memo `gm`.
    CreateCheck,
    /// Cashes the check into the receiver account.
    CashCheck,
    /// Cashing the same check a second time fails with `AlreadyBurned`.
    RejectDoubleCash,
    /// Creates a `MyAccount` holding 1234.
    InitializeAccount,
    /// Overwrites the `MyAccount` value with 4321.
    UpdateAccount,
    /// Creates a visitor state PDA with a visit count of one.
    IntroduceVisitor,
    /// Visits three more times, one increment each.
    Revisit,
}

impl Scenario {
    /// The scenarios whose on-chain state this one reads.
    pub fn prerequisites(self) -> &'static [Scenario] {
        match self {
            Scenario::SetupTokens | Scenario::InitializeAccount | Scenario::IntroduceVisitor => &[],
            Scenario::CreateCheck => &[Scenario::SetupTokens],
            Scenario::CashCheck => &[Scenario::CreateCheck],
            Scenario::RejectDoubleCash => &[Scenario::CashCheck],
            Scenario::UpdateAccount => &[Scenario::InitializeAccount],
            Scenario::Revisit => &[Scenario::IntroduceVisitor],
        }
    }
}

/// An ordered, deduplicated list of scenarios to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioPlan {
    scenarios: Vec<Scenario>,
}

impl ScenarioPlan {
    pub fn all() -> Self {
        Self {
            scenarios: <Scenario as strum::IntoEnumIterator>::iter().collect(),
        }
    }

    /// Resolves a selection into canonical order, adding every transitive prerequisite. An empty
    /// selection runs everything.
    pub fn resolve(selection: &[Scenario]) -> Self {
        if selection.is_empty() {
            return Self::all();
        }

        let mut required = BTreeSet::new();
        let mut pending = selection.to_vec();
        while let Some(scenario) = pending.pop() {
            if required.insert(scenario) {
                pending.extend_from_slice(scenario.prerequisites());
            }
        }

        Self {
            scenarios: required.into_iter().collect(),
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

impl fmt::Display for ScenarioPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scenarios.iter().join(" -> "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioStatus {
    Passed,
    Failed,
    /// Not attempted because an earlier scenario failed.
    Skipped,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub status: ScenarioStatus,
    pub error: Option<String>,
    pub elapsed_ms: u128,
}

impl ScenarioOutcome {
    fn passed(scenario: Scenario, elapsed: Duration) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Passed,
            error: None,
            elapsed_ms: elapsed.as_millis(),
        }
    }

    fn failed(scenario: Scenario, error: &anyhow::Error, elapsed: Duration) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Failed,
            error: Some(format!("{error:#}")),
            elapsed_ms: elapsed.as_millis(),
        }
    }

    fn skipped(scenario: Scenario) -> Self {
        Self {
            scenario,
            status: ScenarioStatus::Skipped,
            error: None,
            elapsed_ms: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// True when every planned scenario passed.
    pub fn succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| outcome.status == ScenarioStatus::Passed)
    }

    pub fn count(&self, status: ScenarioStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }

    pub fn first_failure(&self) -> Option<&ScenarioOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.status == ScenarioStatus::Failed)
    }
}

/// Executes a single scenario for [`run_plan`].
pub(crate) trait ScenarioStep {
    async fn run_scenario(&mut self, scenario: Scenario) -> anyhow::Result<()>;
}

/// Runs every scenario in `plan` in order through `step`. The first failure stops the run and
/// every remaining scenario is reported as skipped without being handed to `step`.
///
/// Progress headers and per-scenario results are printed only when `progress` is set.
pub(crate) async fn run_plan<S: ScenarioStep>(
    plan: &ScenarioPlan,
    step: &mut S,
    progress: bool,
) -> RunReport {
    let mut report = RunReport::default();
    let mut failed = false;

    for &scenario in plan.scenarios() {
        if failed {
            report.outcomes.push(ScenarioOutcome::skipped(scenario));
            continue;
        }

        if progress {
            log_header(&scenario.to_string());
        }
        let start = Instant::now();
        let result = step.run_scenario(scenario).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                if progress {
                    print_kv!(scenario, "passed".bold(), LogColor::Success);
                }
                report
                    .outcomes
                    .push(ScenarioOutcome::passed(scenario, elapsed));
            }
            Err(error) => {
                if progress {
                    print_kv!(scenario, fmt_failure(&error), LogColor::Error);
                }
                report
                    .outcomes
                    .push(ScenarioOutcome::failed(scenario, &error, elapsed));
                failed = true;
            }
        }
    }

    report
}
