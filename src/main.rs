use anyhow::{Context, Result};
use arith_bench::{cli::Cli, create_default_runner};
use clap::Parser;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let runner = create_default_runner();
    let mut stdout = std::io::stdout().lock();

    runner
        .run_and_write(&mut stdout)
        .context("ベンチマークの実行に失敗しました")?;

    Ok(())
}
