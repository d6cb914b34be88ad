use std::io::{self, Write};

use anyhow::bail;
use clap::{Parser, Subcommand};
use grocery_harness::cli::{full_run, profile_demo, scenario_suite};
use grocery_harness::customer::SARAH_PROFILE_ID;
use grocery_harness::demo;
use grocery_harness::runner::{write_environment_help, SuiteOutcome};
use grocery_harness::utils::LoggingConfig;
use grocery_harness::EnvConfig;

#[derive(Parser)]
#[command(
    name = "grocery-harness",
    version,
    about = "Smoke tests for the personal grocery assistant",
    author
)]
struct Cli {
    /// Exit with an error unless every scenario passes
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Profile demo, multi-customer demo and scenario suite (default)
    All,
    /// Load one customer profile and print its contexts
    Profile {
        #[arg(long, default_value = SARAH_PROFILE_ID)]
        profile_id: String,
    },
    /// Print example runtime configurations
    Customers,
    /// Run the scenario suite only
    Scenarios,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    EnvConfig::load_dotenv();
    LoggingConfig::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::All);

    let result = tokio::select! {
        result = run(command) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\n👋 Test interrupted by user");
            return Ok(());
        }
    };

    match result {
        Ok(Some(outcome)) if cli.strict && !outcome.succeeded() => {
            bail!("scenario suite did not pass: {}", describe(&outcome))
        }
        Ok(_) => Ok(()),
        Err(err) => {
            println!("❌ Test failed: {err}");
            write_environment_help(&mut io::stdout())?;
            if cli.strict {
                bail!(err);
            }
            Ok(())
        }
    }
}

async fn run(command: Command) -> io::Result<Option<SuiteOutcome>> {
    let mut out = io::stdout();
    let outcome = match command {
        Command::All => Some(full_run(&mut out).await?),
        Command::Profile { profile_id } => {
            profile_demo(&profile_id, &mut out).await?;
            None
        }
        Command::Customers => {
            demo::multi_customer(&mut out)?;
            None
        }
        Command::Scenarios => Some(scenario_suite(&mut out).await?),
    };
    out.flush()?;
    Ok(outcome)
}

fn describe(outcome: &SuiteOutcome) -> String {
    match outcome {
        SuiteOutcome::Completed(summary) => {
            format!("{}/{} scenarios passed", summary.passed(), summary.total())
        }
        SuiteOutcome::MissingEnvironment(names) => format!("missing environment {names:?}"),
        SuiteOutcome::InvalidConfig(reason) => format!("invalid configuration: {reason}"),
        SuiteOutcome::GraphUnavailable(reason) => format!("graph unavailable: {reason}"),
    }
}
