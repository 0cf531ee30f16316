//! ccchart - Chart cost trends from ccusage JSON reports

use ccchart::{
    CcchartError, Result,
    cli::Cli,
    dashboard::ChartSession,
    timezone::TimezoneConfig,
};
use ccchart_terminal::{
    StatusKind, get_formatter,
    output::detect_bar_width,
    print_status,
};
use clap::Parser;
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging. The --quiet flag should override RUST_LOG.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("warn")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new(
            "ccchart=debug,ccchart_core=debug,ccchart_terminal=debug",
        )
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.no_color || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_status(&e.to_string(), StatusKind::Error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let tz_config = TimezoneConfig::from_cli(cli.timezone.as_deref(), cli.local)?;
    info!("Using timezone: {}", tz_config.display_name());

    // Reject malformed bounds before doing any I/O
    let (since, until) = cli.bounds()?;

    let source = cli.report_source();
    status(cli, &format!("Loading report from {}", source.describe()), StatusKind::Info);
    let report = source.load().await?;
    status(cli, "Report loaded successfully!", StatusKind::Success);

    let mut session = ChartSession::new(&report, tz_config.tz);
    let (start, end) = session
        .bounds_with_defaults(since, until)
        .ok_or(CcchartError::NoChartableData)?;

    let view = session.apply_filter(start, end)?;
    status(cli, "Filter applied successfully", StatusKind::Success);

    let bar_width = cli.width.unwrap_or_else(detect_bar_width);
    let formatter = get_formatter(cli.json, bar_width);
    println!("{}", formatter.format_chart(&view));

    Ok(())
}

/// Non-error status lines, silenced by --quiet
fn status(cli: &Cli, message: &str, kind: StatusKind) {
    if !cli.quiet {
        print_status(message, kind);
    }
}
