use anyhow::{Context, Result};
use clap::Parser;
use sigma_histogram::app::WindowRenderer;
use sigma_histogram::cli::Cli;
use sigma_histogram::pipeline;
use tracing_subscriber::EnvFilter;

// debug switches everything to TRACE, otherwise RUST_LOG decides (warn by default)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = args.to_config();
    if let Err(err) = config.validate() {
        anyhow::bail!("Invalid arguments: {err}");
    }

    let mut renderer = WindowRenderer::new(config.window.clone());
    pipeline::run(&config, &mut renderer, |line| println!("{line}"))
        .context("histogram pipeline failed")?;
    Ok(())
}
