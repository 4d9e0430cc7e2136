use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystrategy::application::context::PaymentContext;
use paystrategy::application::runner::run_plan;
use paystrategy::domain::plan::PaymentPlan;
use paystrategy::interfaces::json::plan_reader::PlanReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON payment plan. Runs the built-in demo plan when omitted.
    #[arg(long)]
    plan: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let plan = match cli.plan {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            PlanReader::new(file).read().into_diagnostic()?
        }
        None => PaymentPlan::demo(),
    };

    let stdout = io::stdout();
    let mut context = PaymentContext::new(stdout.lock());
    run_plan(plan, &mut context);

    Ok(())
}
