use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod io;
mod output;
mod telemetry;

fn main() -> Result<()> {
    let cli = args::Cli::parse();
    telemetry::init_tracing(cli.log_json, cli.log_level);
    output::init(cli.json);

    cmd::dispatch(cli)
}
