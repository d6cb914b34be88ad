use std::io::{self, Write};
use std::time::Duration;

use tracing::instrument;

use crate::config::{HarnessConfig, REQUIRED_ENV_VARS};
use crate::customer::CustomerConfig;
use crate::error::{HarnessError, Result};
use crate::graph::{DynAgentGraph, GraphFactory, GraphInput};
use crate::message::Reply;
use crate::scenario::{validate_response, Scenario, ValidationReport};
use crate::utils::preview;

pub const PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioOutcome {
    /// The graph replied and the reply was validated.
    Completed {
        reply: Reply,
        report: ValidationReport,
    },
    /// No reply to validate: invocation error, timeout or empty message list.
    Errored { reason: String },
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        match self {
            Self::Completed { report, .. } => report.passed(),
            Self::Errored { .. } => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub outcome: ScenarioOutcome,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestSummary {
    pub results: Vec<ScenarioResult>,
}

impl TestSummary {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.passed())
            .count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "📊 Test Summary:")?;
        writeln!(out, "{}", "=".repeat(30))?;
        for result in &self.results {
            let status = if result.outcome.passed() {
                "✅ PASS"
            } else {
                "❌ FAIL"
            };
            writeln!(out, "   {status}: {}", result.name)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Overall Result: {}/{} tests passed",
            self.passed(),
            self.total()
        )
    }
}

/// Runs scenarios one at a time against a single graph and customer.
pub struct ScenarioRunner {
    graph: DynAgentGraph,
    customer: CustomerConfig,
    timeout: Option<Duration>,
}

impl ScenarioRunner {
    pub fn new(graph: DynAgentGraph, customer: CustomerConfig) -> Self {
        Self {
            graph,
            customer,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn invoke(&self, scenario: &Scenario) -> Result<Reply> {
        let input = GraphInput::user(scenario.message.as_str());
        let config = self.customer.clone().into_runnable();
        let call = self.graph.invoke(input, &config);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| HarnessError::Timeout(limit))??,
            None => call.await?,
        };
        output.last_reply().ok_or(HarnessError::EmptyReply)
    }

    #[instrument(skip_all, fields(scenario = %scenario.name))]
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioOutcome {
        match self.invoke(scenario).await {
            Ok(reply) => {
                let report = validate_response(scenario, &reply.display_text());
                tracing::info!(passed = report.passed(), "scenario validated");
                ScenarioOutcome::Completed { reply, report }
            }
            Err(err) => {
                tracing::warn!(error = %err, "scenario failed");
                ScenarioOutcome::Errored {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub async fn run_all<W: Write>(
        &self,
        scenarios: &[Scenario],
        out: &mut W,
    ) -> io::Result<TestSummary> {
        writeln!(out, "🧪 Running Test Scenarios:")?;
        writeln!(out)?;

        let mut summary = TestSummary::default();
        for (index, scenario) in scenarios.iter().enumerate() {
            writeln!(out, "Test {}: {}", index + 1, scenario.name)?;
            writeln!(out, "Message: {}", scenario.message)?;
            writeln!(out, "Expected: {}", scenario.expected)?;
            writeln!(out, "{}", "-".repeat(40))?;
            out.flush()?;

            let outcome = self.run_scenario(scenario).await;
            match &outcome {
                ScenarioOutcome::Completed { reply, report } => {
                    let text = reply.display_text();
                    writeln!(out, "🤖 Assistant Response:")?;
                    writeln!(out, "   {}...", preview(&text, PREVIEW_CHARS))?;
                    writeln!(out)?;
                    writeln!(out, "🔍 Response Validation:")?;
                    for check in &report.checks {
                        writeln!(out, "   {check}")?;
                    }
                }
                ScenarioOutcome::Errored { reason } => {
                    writeln!(out, "❌ Error: {reason}")?;
                }
            }
            writeln!(out)?;

            summary.results.push(ScenarioResult {
                name: scenario.name.clone(),
                outcome,
            });
        }

        summary.render(out)?;
        Ok(summary)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SuiteOutcome {
    Completed(TestSummary),
    MissingEnvironment(Vec<String>),
    InvalidConfig(String),
    GraphUnavailable(String),
}

impl SuiteOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Completed(summary) if summary.all_passed())
    }
}

/// Validates the environment, builds the graph and runs the fixed scenarios.
///
/// Nothing is constructed, and no request is sent, until every required
/// variable is present.
pub async fn run_suite<F, W>(
    lookup: F,
    factory: &dyn GraphFactory,
    scenarios: &[Scenario],
    out: &mut W,
) -> io::Result<SuiteOutcome>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    writeln!(out, "🛒 Testing Personal Grocery Assistant")?;
    writeln!(out, "{}", "=".repeat(50))?;

    let config = match HarnessConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(HarnessError::MissingEnvironment(missing)) => {
            writeln!(
                out,
                "❌ Environment Error: {}",
                HarnessError::MissingEnvironment(missing.clone())
            )?;
            return Ok(SuiteOutcome::MissingEnvironment(missing));
        }
        Err(err) => {
            writeln!(out, "❌ Configuration Error: {err}")?;
            return Ok(SuiteOutcome::InvalidConfig(err.to_string()));
        }
    };
    writeln!(out, "✅ Environment validation passed")?;

    let graph = match factory.create(&config) {
        Ok(graph) => graph,
        Err(err) => {
            writeln!(out, "❌ Graph Error: {err}")?;
            writeln!(out, "Make sure the agent graph settings are correct")?;
            return Ok(SuiteOutcome::GraphUnavailable(err.to_string()));
        }
    };

    let customer = CustomerConfig::test_session();
    writeln!(out, "👤 Customer Configuration:")?;
    writeln!(out, "   Profile ID: {}", customer.customer_profile_id)?;
    writeln!(out, "   User ID: {}", customer.user_id)?;
    writeln!(out)?;

    let runner = ScenarioRunner::new(graph, customer).with_timeout(config.scenario_timeout);
    let summary = runner.run_all(scenarios, out).await?;
    writeln!(out, "✅ Test completed!")?;
    Ok(SuiteOutcome::Completed(summary))
}

/// Printed when the suite cannot start.
pub fn write_environment_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Make sure all environment variables are set:")?;
    for name in REQUIRED_ENV_VARS {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}
