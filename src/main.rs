use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kacker::app::AppContext;
use kacker::cli::{commands, Cli, Commands};
use kacker::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    let default_output = config.output.path.clone();
    let mut ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Render {
            fragment,
            output,
            open,
        } => {
            commands::render(&mut ctx, &fragment, output.as_deref(), open).await?;
        }
        Commands::Browse { output, open } => {
            let output = output.unwrap_or(default_output);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::browse(&mut ctx, stdin, &output, open).await?;
        }
    }

    Ok(())
}
