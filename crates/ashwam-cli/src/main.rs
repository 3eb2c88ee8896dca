use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use ashwam_cli::{run_monitor, Cli, Command};
use ashwam_core::config::MonitorConfig;
use ashwam_observability::init_tracing;
use ashwam_observability::tracing_setup::events;
use ashwam_storage::{JsonFileSink, JsonlRecordSource};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "monitoring run failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Run { data, out } => {
            let started = Instant::now();
            let source = JsonlRecordSource::new(data);
            let sink = JsonFileSink::new(&out)
                .with_context(|| format!("cannot prepare output directory {}", out.display()))?;
            events::run_started(source.data_dir(), sink.out_dir());

            let summary = run_monitor(&source, &sink, &MonitorConfig::default()).with_context(
                || format!("monitoring run over {} failed", source.data_dir().display()),
            )?;

            events::run_completed(started.elapsed().as_millis(), summary.canary.status.as_str());
            println!("Monitoring complete. Reports saved to {}", sink.out_dir().display());
            println!("{summary}");
            Ok(())
        }
    }
}
