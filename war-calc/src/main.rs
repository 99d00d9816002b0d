use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use war_calc::cli::RootArgs;
use war_calc::config::CalcConfig;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = RootArgs::parse();
    let config = CalcConfig::from_env_and_args(&args).wrap_err("load config")?;

    let output = war_calc::execute(&args, &config)?;
    println!("{output}");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
