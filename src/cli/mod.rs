use std::io::{self, Write};

use crate::config::{EnvConfig, HarnessConfig};
use crate::customer::SARAH_PROFILE_ID;
use crate::demo;
use crate::graph::DefaultGraphFactory;
use crate::runner::{run_suite, SuiteOutcome};
use crate::scenario::default_scenarios;

/// Profile demo against the hosted services; configuration problems are
/// reported and the demo is skipped.
pub async fn profile_demo<W: Write>(profile_id: &str, out: &mut W) -> io::Result<()> {
    let manager = HarnessConfig::from_env()
        .and_then(|config| demo::build_memory_manager(&config, profile_id));
    match manager {
        Ok(manager) => demo::profile_loading(&manager, out).await,
        Err(err) => {
            writeln!(out, "❌ Profile demo skipped: {err}")?;
            writeln!(out)
        }
    }
}

/// Scenario suite driven by the process environment.
pub async fn scenario_suite<W: Write>(out: &mut W) -> io::Result<SuiteOutcome> {
    run_suite(
        EnvConfig::get_env_optional,
        &DefaultGraphFactory,
        &default_scenarios(),
        out,
    )
    .await
}

/// Profile demo, multi-customer demo, then the scenario suite.
pub async fn full_run<W: Write>(out: &mut W) -> io::Result<SuiteOutcome> {
    writeln!(out, "🛒 Personal Grocery Assistant - Test Suite")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    profile_demo(SARAH_PROFILE_ID, out).await?;
    demo::multi_customer(out)?;

    writeln!(out, "🤖 Running Interactive Assistant Test...")?;
    writeln!(out, "Note: This requires OpenAI API key to be set")?;
    writeln!(out)?;
    scenario_suite(out).await
}
