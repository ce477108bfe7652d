use clap::Parser;
use options::run_options::RunOptions;
use session::runner::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = RunOptions::parse();

    run(args.command).await
}
